use rust_decimal::Decimal;

use super::ExpenseRow;

/// Total spent in one category across all time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub(crate) category: String,
    pub(crate) total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetStatus {
    Ok,
    BudgetReached,
    BudgetExceeded,
}

impl BudgetStatus {
    /// Exact comparison; both sides are fixed-point decimals.
    pub(crate) fn classify(spent: Decimal, budget: Decimal) -> Self {
        match spent.cmp(&budget) {
            std::cmp::Ordering::Less => Self::Ok,
            std::cmp::Ordering::Equal => Self::BudgetReached,
            std::cmp::Ordering::Greater => Self::BudgetExceeded,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BudgetReached => "BUDGET_REACHED",
            Self::BudgetExceeded => "BUDGET_EXCEEDED",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetReportRow {
    pub(crate) month: String,
    pub(crate) category: String,
    pub(crate) budget: Decimal,
    pub(crate) spent: Decimal,
    pub(crate) status: BudgetStatus,
}

/// An expense as shown in the full listing report, without its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListingRow {
    pub(crate) date: String,
    pub(crate) category: String,
    pub(crate) amount: Decimal,
    pub(crate) description: Option<String>,
}

impl From<ExpenseRow> for ListingRow {
    fn from(row: ExpenseRow) -> Self {
        Self {
            date: row.date,
            category: row.category,
            amount: row.amount,
            description: row.description,
        }
    }
}
