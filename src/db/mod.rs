mod budgets;
mod categories;
mod expenses;
mod reports;
mod schema;

use rusqlite::types::{Type, ValueRef};
use rusqlite::{Connection, Row};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The single connection shared by every store and report for the
/// lifetime of the process.
pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database file, creating its directory and the schema if
    /// either is missing.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        let db = Self { conn };
        db.provision()?;
        tracing::info!(path = %path.display(), "database ready");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let db = Self { conn };
        db.provision()?;
        Ok(db)
    }

    /// Create the tables and constraints if absent. Safe to run on every start.
    pub(crate) fn provision(&self) -> Result<()> {
        self.conn.execute_batch(schema::SCHEMA_V1)?;

        let version: i32 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version < schema::CURRENT_VERSION {
            self.conn
                .pragma_update(None, "user_version", schema::CURRENT_VERSION)?;
            tracing::debug!(
                from = version,
                to = schema::CURRENT_VERSION,
                "schema version recorded"
            );
        }
        Ok(())
    }
}

// ── Column helpers ────────────────────────────────────────────

/// Amounts are written as decimal text. Rows written by older releases may
/// hold REAL values, which are converted on read.
fn decimal_from_value(value: ValueRef<'_>, idx: usize) -> rusqlite::Result<Option<Decimal>> {
    match value {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(n) => Ok(Some(Decimal::from(n))),
        ValueRef::Real(f) => Decimal::try_from(f)
            .map(Some)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Real, Box::new(e))),
        ValueRef::Text(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })?;
            Decimal::from_str(text.trim()).map(Some).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
            })
        }
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(
            idx,
            "importo".into(),
            Type::Blob,
        )),
    }
}

fn amount_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    decimal_from_value(row.get_ref(idx)?, idx)?
        .ok_or(rusqlite::Error::InvalidColumnType(idx, "importo".into(), Type::Null))
}

fn optional_amount_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Decimal>> {
    decimal_from_value(row.get_ref(idx)?, idx)
}
