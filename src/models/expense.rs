use rust_decimal::Decimal;

/// The mutable fields of an expense, as supplied on create and update.
#[derive(Debug, Clone)]
pub(crate) struct ExpenseDraft {
    /// Format: "YYYY-MM-DD"
    pub(crate) date: String,
    pub(crate) amount: Decimal,
    pub(crate) category: String,
    pub(crate) description: Option<String>,
}

impl ExpenseDraft {
    pub(crate) fn new(date: &str, amount: Decimal, category: &str, description: &str) -> Self {
        Self {
            date: date.to_string(),
            amount,
            category: category.to_string(),
            description: normalize_description(description),
        }
    }
}

/// One stored expense with its category resolved to a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseRow {
    pub(crate) id: i64,
    pub(crate) date: String,
    pub(crate) category: String,
    pub(crate) amount: Decimal,
    pub(crate) description: Option<String>,
}

impl ExpenseRow {
    pub(crate) fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Blank descriptions are stored as NULL; anything else is kept verbatim.
pub(crate) fn normalize_description(description: &str) -> Option<String> {
    if description.trim().is_empty() {
        None
    } else {
        Some(description.to_string())
    }
}
