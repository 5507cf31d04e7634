use rusqlite::params;
use rust_decimal::Decimal;

use super::categories::require_category;
use super::{amount_at, Database};
use crate::dates;
use crate::error::Result;
use crate::models::{ensure_positive, Budget};
use crate::outcome::Confirmation;

impl Database {
    /// Set the budget for a (month, category) pair, overwriting any
    /// existing amount in the same statement.
    pub(crate) fn upsert_budget(
        &mut self,
        month: &str,
        category: &str,
        amount: Decimal,
    ) -> Result<Confirmation> {
        dates::validate_month(month)?;
        ensure_positive(amount, "budget")?;

        let tx = self.conn.transaction()?;
        let category_id = require_category(&tx, category)?;
        tx.execute(
            "INSERT INTO budget (mese, id_categoria, importo)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(mese, id_categoria) DO UPDATE SET importo = excluded.importo",
            params![month, category_id, amount.to_string()],
        )?;
        tx.commit()?;

        tracing::debug!(month, category, %amount, "budget saved");
        Ok(Confirmation::BudgetSaved {
            month: month.to_string(),
            category: category.to_string(),
        })
    }

    pub(crate) fn budgets(&self) -> Result<Vec<Budget>> {
        let mut stmt = self.conn.prepare(
            "SELECT b.id, b.mese, c.nome, b.importo
             FROM budget b
             JOIN categorie c ON c.id = b.id_categoria
             ORDER BY b.mese ASC, c.nome ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Budget {
                id: row.get(0)?,
                month: row.get(1)?,
                category: row.get(2)?,
                amount: amount_at(row, 3)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}
