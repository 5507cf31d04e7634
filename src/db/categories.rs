use rusqlite::{params, Connection, OptionalExtension};

use super::Database;
use crate::error::{Error, Result};
use crate::models::Category;
use crate::outcome::Confirmation;

impl Database {
    /// Exact-match lookup of a category id by name. Store operations resolve
    /// names through `require_category`; this public form is only used by tests.
    #[cfg(test)]
    pub(crate) fn find_category_id(&self, name: &str) -> Result<Option<i64>> {
        category_id(&self.conn, name)
    }

    pub(crate) fn create_category(&mut self, name: &str) -> Result<Confirmation> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("category name cannot be empty".into()));
        }

        let tx = self.conn.transaction()?;
        if category_id(&tx, name)?.is_some() {
            tracing::warn!(category = name, "category already exists");
            return Err(Error::Duplicate(format!("category '{name}' already exists")));
        }
        tx.execute("INSERT INTO categorie (nome) VALUES (?1)", params![name])?;
        tx.commit()?;

        tracing::debug!(category = name, "category created");
        Ok(Confirmation::CategoryCreated(name.to_string()))
    }

    /// Delete a category and, through the cascade, its budgets. Refused while
    /// any expense still points at it.
    pub(crate) fn delete_category(&mut self, name: &str) -> Result<Confirmation> {
        let tx = self.conn.transaction()?;
        let id = require_category(&tx, name)?;
        if has_expenses(&tx, id)? {
            tracing::warn!(category = name, "category still has expenses");
            return Err(Error::ReferentialConflict(format!(
                "cannot delete category '{name}': expenses are still assigned to it"
            )));
        }
        tx.execute("DELETE FROM categorie WHERE id = ?1", params![id])?;
        tx.commit()?;

        tracing::debug!(category = name, id, "category deleted");
        Ok(Confirmation::CategoryDeleted(name.to_string()))
    }

    pub(crate) fn categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, nome FROM categorie ORDER BY nome ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn category_has_expenses(&self, id: i64) -> Result<bool> {
        has_expenses(&self.conn, id)
    }
}

pub(super) fn category_id(conn: &Connection, name: &str) -> Result<Option<i64>> {
    Ok(conn
        .query_row(
            "SELECT id FROM categorie WHERE nome = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?)
}

/// Resolve a category name or fail with `NotFound`.
pub(super) fn require_category(conn: &Connection, name: &str) -> Result<i64> {
    category_id(conn, name)?
        .ok_or_else(|| Error::NotFound(format!("category '{name}' does not exist")))
}

fn has_expenses(conn: &Connection, id: i64) -> Result<bool> {
    Ok(conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM spese WHERE id_categoria = ?1)",
        params![id],
        |row| row.get(0),
    )?)
}
