use std::io::{self, Write};

use crate::dates;
use crate::models::{
    format_amount, Budget, BudgetReportRow, Category, CategoryTotal, ExpenseRow, ListingRow,
};
use crate::outcome::Outcome;

/// Print a result message: successes on stdout, failures on stderr.
/// Returns the success flag.
pub(crate) fn print_outcome(outcome: &Outcome) -> bool {
    if outcome.ok {
        println!("{}", outcome.message);
    } else {
        eprintln!("{}", outcome.message);
    }
    outcome.ok
}

/// Stored dates are shown day-first; anything unparseable is shown as is.
fn display_date(canonical: &str) -> String {
    dates::to_display(canonical).unwrap_or_else(|_| canonical.to_string())
}

/// Each category is paired with whether expenses still reference it.
pub(crate) fn categories(out: &mut impl Write, categories: &[(Category, bool)]) -> io::Result<()> {
    if categories.is_empty() {
        return writeln!(out, "No categories.");
    }
    writeln!(out, "Categories:")?;
    for (cat, in_use) in categories {
        let marker = if *in_use { ", in use" } else { "" };
        writeln!(out, "- {cat} (id={}{marker})", cat.id)?;
    }
    Ok(())
}

pub(crate) fn expenses(out: &mut impl Write, rows: &[ExpenseRow]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No expenses.");
    }
    writeln!(out, "ID  Date        Category            Amount    Description")?;
    writeln!(out, "{}", "-".repeat(70))?;
    for row in rows {
        writeln!(
            out,
            "{:<3} {}  {:<18}  {:>8}  {}",
            row.id,
            display_date(&row.date),
            row.category,
            format_amount(row.amount),
            row.description_or_empty(),
        )?;
    }
    Ok(())
}

pub(crate) fn budgets(out: &mut impl Write, budgets: &[Budget]) -> io::Result<()> {
    if budgets.is_empty() {
        return writeln!(out, "No budgets defined.");
    }
    for budget in budgets {
        writeln!(
            out,
            "#{:<3} {}  {:<18}  {:>10}",
            budget.id,
            budget.month,
            budget.category,
            format_amount(budget.amount)
        )?;
    }
    Ok(())
}

pub(crate) fn totals(out: &mut impl Write, totals: &[CategoryTotal]) -> io::Result<()> {
    writeln!(out, "Category..................Total spent")?;
    for total in totals {
        writeln!(out, "{:<26}{:>10}", total.category, format_amount(total.total))?;
    }
    Ok(())
}

pub(crate) fn budget_report(out: &mut impl Write, rows: &[BudgetReportRow]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "No budgets defined.");
    }
    for row in rows {
        writeln!(out)?;
        writeln!(out, "Month:    {}", row.month)?;
        writeln!(out, "Category: {}", row.category)?;
        writeln!(out, "Budget:   {}", format_amount(row.budget))?;
        writeln!(out, "Spent:    {}", format_amount(row.spent))?;
        writeln!(out, "Status:   {}", row.status)?;
    }
    Ok(())
}

pub(crate) fn listing(out: &mut impl Write, rows: &[ListingRow]) -> io::Result<()> {
    writeln!(out, "Date        Category            Amount    Description")?;
    writeln!(out, "{}", "-".repeat(62))?;
    for row in rows {
        writeln!(
            out,
            "{}  {:<18}  {:>8}  {}",
            display_date(&row.date),
            row.category,
            format_amount(row.amount),
            row.description.as_deref().unwrap_or(""),
        )?;
    }
    Ok(())
}
