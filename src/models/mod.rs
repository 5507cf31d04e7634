mod budget;
mod category;
mod expense;
mod money;
mod report;

pub(crate) use budget::Budget;
pub(crate) use category::Category;
pub(crate) use expense::{normalize_description, ExpenseDraft, ExpenseRow};
pub(crate) use money::{ensure_positive, format_amount, parse_amount, round_cents};
pub(crate) use report::{BudgetReportRow, BudgetStatus, CategoryTotal, ListingRow};
