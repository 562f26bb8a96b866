//! Fixtures

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};

pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product record failed validation
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct {
        /// Identifier of the offending product
        id: String,

        /// What was wrong with it
        reason: &'static str,
    },

    /// Catalog construction error
    #[error("Failed to build catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a fixture loader with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a catalog from `<base>/products/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any product is invalid.
    pub fn load_catalog(&self, name: &str) -> Result<Catalog, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        catalog_from_str(&contents)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a catalog fixture held in memory
///
/// # Errors
///
/// Returns an error if the YAML is malformed, the currency is unknown, or any product is invalid.
pub fn catalog_from_str(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: products::CatalogFixture = serde_norway::from_str(yaml)?;

    fixture.try_into()
}
