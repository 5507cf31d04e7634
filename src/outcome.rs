use std::fmt;
use std::path::PathBuf;

use crate::error::Result;

/// What a successful mutating operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Confirmation {
    CategoryCreated(String),
    CategoryDeleted(String),
    ExpenseCreated(i64),
    ExpenseUpdated(i64),
    ExpenseDeleted(i64),
    BudgetSaved { month: String, category: String },
    Exported { path: PathBuf, rows: usize },
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryCreated(name) => write!(f, "Category '{name}' created."),
            Self::CategoryDeleted(name) => write!(f, "Category '{name}' deleted."),
            Self::ExpenseCreated(id) => write!(f, "Expense #{id} recorded."),
            Self::ExpenseUpdated(id) => write!(f, "Expense #{id} updated."),
            Self::ExpenseDeleted(id) => write!(f, "Expense #{id} deleted."),
            Self::BudgetSaved { month, category } => {
                write!(f, "Budget for '{category}' in {month} saved.")
            }
            Self::Exported { path, rows } => {
                write!(f, "Exported {rows} expenses to {}", path.display())
            }
        }
    }
}

/// Success flag plus the message a caller shows verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub(crate) ok: bool,
    pub(crate) message: String,
}

impl From<Result<Confirmation>> for Outcome {
    fn from(result: Result<Confirmation>) -> Self {
        match result {
            Ok(done) => Self {
                ok: true,
                message: done.to_string(),
            },
            Err(err) => Self {
                ok: false,
                message: format!("Error: {err}"),
            },
        }
    }
}
