//! Core Errors
//!
//! Failures raised while loading site data. The filter engine itself never fails.

use thiserror::Error;

/// Catalog construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    #[error("Category id must not be blank (category #{0})")]
    BlankCategoryId(usize),

    #[error("Failed to parse menu data: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        CatalogError::Parse(error.to_string())
    }
}

/// Site configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
