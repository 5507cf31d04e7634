use chrono::NaiveDate;
use std::io::{self, Write};
use std::path::Path;

use crate::dates;
use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{format_amount, ExpenseRow};
use crate::outcome::Confirmation;

pub(crate) const DELIMITER: u8 = b';';
pub(crate) const HEADER: [&str; 5] = ["ID", "DATA", "CATEGORIA", "IMPORTO", "DESCRIZIONE"];

/// `Report_Spese_<DD-MM-YYYY>.csv`
pub(crate) fn default_file_name(today: NaiveDate) -> String {
    format!("Report_Spese_{}.csv", dates::display(today))
}

/// Write every expense to `path` as a `;`-separated file. Nothing is
/// written when there are no expenses.
pub(crate) fn export_expenses(db: &Database, path: &Path) -> Result<Confirmation> {
    let rows = db.list_expenses()?;
    if rows.is_empty() {
        tracing::warn!(path = %path.display(), "export skipped: no expenses");
        return Err(Error::EmptyDataset);
    }

    // A rendering failure must leave the destination untouched.
    let mut buffer = Vec::new();
    write_rows(&rows, &mut buffer).map_err(|e| Error::io(path, e))?;
    std::fs::write(path, buffer).map_err(|e| Error::io(path, e))?;

    tracing::info!(path = %path.display(), rows = rows.len(), "expenses exported");
    Ok(Confirmation::Exported {
        path: path.to_path_buf(),
        rows: rows.len(),
    })
}

fn write_rows<W: Write>(rows: &[ExpenseRow], out: W) -> io::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(HEADER)?;
    for row in rows {
        let date = dates::to_display(&row.date)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        writer.write_record([
            row.id.to_string().as_str(),
            date.as_str(),
            row.category.as_str(),
            format_amount(row.amount).as_str(),
            row.description_or_empty(),
        ])?;
    }
    writer.flush()
}
