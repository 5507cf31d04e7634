use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::export;

/// Overrides the application root directory.
pub(crate) const HOME_ENV: &str = "SPESE_HOME";

/// Where the database and default exports live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// `$SPESE_HOME` when set, otherwise the working directory.
    pub(crate) fn resolve() -> Result<Self> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::from_root(root));
        }
        let cwd = std::env::current_dir().map_err(|e| Error::io(Path::new("."), e))?;
        Ok(Self::from_root(cwd))
    }

    pub(crate) fn from_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub(crate) fn database_file(&self) -> PathBuf {
        self.root.join("sql").join("expenses.db")
    }

    /// Export destination. A relative name lands in the root directory, an
    /// absolute path is kept as given, and no name means today's default.
    pub(crate) fn export_file(&self, requested: Option<&str>, today: NaiveDate) -> PathBuf {
        match requested.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => self.root.join(name),
            None => self.root.join(export::default_file_name(today)),
        }
    }
}
