use rust_decimal::Decimal;

/// A stored monthly budget, joined with its category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Budget {
    pub(crate) id: i64,
    /// Format: "YYYY-MM"
    pub(crate) month: String,
    pub(crate) category: String,
    pub(crate) amount: Decimal,
}
