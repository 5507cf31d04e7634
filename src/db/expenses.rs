use rusqlite::{params, Connection};

use super::categories::require_category;
use super::{amount_at, Database};
use crate::dates;
use crate::error::{Error, Result};
use crate::models::{ensure_positive, normalize_description, ExpenseDraft, ExpenseRow};
use crate::outcome::Confirmation;

impl Database {
    pub(crate) fn create_expense(&mut self, draft: &ExpenseDraft) -> Result<Confirmation> {
        validate(draft)?;

        let tx = self.conn.transaction()?;
        let category_id = require_category(&tx, &draft.category)?;
        tx.execute(
            "INSERT INTO spese (data_spesa, importo, id_categoria, descrizione)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                draft.date,
                draft.amount.to_string(),
                category_id,
                description(draft),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        tracing::debug!(expense_id = id, date = %draft.date, category = %draft.category, "expense created");
        Ok(Confirmation::ExpenseCreated(id))
    }

    /// Replace every mutable field of an existing expense.
    pub(crate) fn update_expense(&mut self, id: i64, draft: &ExpenseDraft) -> Result<Confirmation> {
        validate(draft)?;

        let tx = self.conn.transaction()?;
        let category_id = require_category(&tx, &draft.category)?;
        if !exists(&tx, id)? {
            tracing::warn!(expense_id = id, "update of missing expense");
            return Err(missing(id));
        }
        tx.execute(
            "UPDATE spese
             SET data_spesa = ?1, importo = ?2, id_categoria = ?3, descrizione = ?4
             WHERE id = ?5",
            params![
                draft.date,
                draft.amount.to_string(),
                category_id,
                description(draft),
                id,
            ],
        )?;
        tx.commit()?;

        tracing::debug!(expense_id = id, "expense updated");
        Ok(Confirmation::ExpenseUpdated(id))
    }

    pub(crate) fn delete_expense(&mut self, id: i64) -> Result<Confirmation> {
        let tx = self.conn.transaction()?;
        if !exists(&tx, id)? {
            tracing::warn!(expense_id = id, "delete of missing expense");
            return Err(missing(id));
        }
        tx.execute("DELETE FROM spese WHERE id = ?1", params![id])?;
        tx.commit()?;

        tracing::debug!(expense_id = id, "expense deleted");
        Ok(Confirmation::ExpenseDeleted(id))
    }

    pub(crate) fn expense_exists(&self, id: i64) -> Result<bool> {
        exists(&self.conn, id)
    }

    pub(crate) fn expense_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM spese", [], |row| row.get(0))?)
    }

    /// Every expense with its category name, oldest first. Same-day
    /// expenses keep insertion order.
    pub(crate) fn list_expenses(&self) -> Result<Vec<ExpenseRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.id, s.data_spesa, c.nome, s.importo, s.descrizione
             FROM spese s
             JOIN categorie c ON c.id = s.id_categoria
             ORDER BY s.data_spesa ASC, s.id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ExpenseRow {
                id: row.get(0)?,
                date: row.get(1)?,
                category: row.get(2)?,
                amount: amount_at(row, 3)?,
                description: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

fn validate(draft: &ExpenseDraft) -> Result<()> {
    dates::validate_date(&draft.date)?;
    ensure_positive(draft.amount, "amount")
}

fn description(draft: &ExpenseDraft) -> Option<String> {
    draft.description.as_deref().and_then(normalize_description)
}

fn exists(conn: &Connection, id: i64) -> Result<bool> {
    Ok(conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM spese WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )?)
}

fn missing(id: i64) -> Error {
    Error::NotFound(format!("expense #{id} not found"))
}
