use rusqlite::params;
use rust_decimal::Decimal;

use super::{amount_at, optional_amount_at, Database};
use crate::error::Result;
use crate::models::{round_cents, BudgetReportRow, BudgetStatus, CategoryTotal, ListingRow};

impl Database {
    /// All-time spending per category, categories without expenses included
    /// at zero. Largest total first, ties by name.
    pub(crate) fn totals_by_category(&self) -> Result<Vec<CategoryTotal>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.id, c.nome, s.importo
             FROM categorie c
             LEFT JOIN spese s ON s.id_categoria = c.id
             ORDER BY c.id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                optional_amount_at(row, 2)?,
            ))
        })?;

        let mut grouped: Vec<(i64, CategoryTotal)> = Vec::new();
        for row in rows {
            let (id, category, amount) = row?;
            let amount = amount.unwrap_or_default();
            match grouped.last_mut() {
                Some((last_id, acc)) if *last_id == id => acc.total += amount,
                _ => grouped.push((
                    id,
                    CategoryTotal {
                        category,
                        total: amount,
                    },
                )),
            }
        }

        let mut totals: Vec<CategoryTotal> = grouped
            .into_iter()
            .map(|(_, acc)| CategoryTotal {
                total: round_cents(acc.total),
                ..acc
            })
            .collect();
        totals.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });
        Ok(totals)
    }

    /// Each budget next to what was actually spent in its month and
    /// category. Latest month first, then by category name.
    pub(crate) fn budget_vs_actual(&self) -> Result<Vec<BudgetReportRow>> {
        let tx = self.conn.unchecked_transaction()?;

        let budgets = {
            let mut stmt = tx.prepare(
                "SELECT b.mese, b.id_categoria, c.nome, b.importo
                 FROM budget b
                 JOIN categorie c ON c.id = b.id_categoria
                 ORDER BY b.mese DESC, c.nome ASC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    amount_at(row, 3)?,
                ))
            })?;
            rows.collect::<std::result::Result<Vec<_>, _>>()?
        };

        let mut spent_stmt = tx.prepare(
            "SELECT importo FROM spese
             WHERE id_categoria = ?1 AND substr(data_spesa, 1, 7) = ?2",
        )?;
        let mut report = Vec::with_capacity(budgets.len());
        for (month, category_id, category, budget) in budgets {
            let amounts = spent_stmt.query_map(params![category_id, month], |row| amount_at(row, 0))?;
            let mut spent = Decimal::ZERO;
            for amount in amounts {
                spent += amount?;
            }
            report.push(BudgetReportRow {
                status: BudgetStatus::classify(spent, budget),
                month,
                category,
                budget,
                spent,
            });
        }
        Ok(report)
    }

    /// The expense listing without ids, in the same order.
    pub(crate) fn full_listing(&self) -> Result<Vec<ListingRow>> {
        Ok(self
            .list_expenses()?
            .into_iter()
            .map(ListingRow::from)
            .collect())
    }
}
