//! Fixtures

use std::{fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::products::{Catalog, CatalogError, Product};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Catalog shape error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// No catalog loaded yet
    #[error("No catalog loaded yet")]
    CatalogNotLoaded,

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// On-disk shape of a catalog fixture file.
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    products: Vec<Product>,
}

/// Fixture
///
/// Loads a demo catalog from YAML files under the base path.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// The loaded catalog, if any
    catalog: Option<Catalog>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: None,
        }
    }

    /// Load a catalog from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// product list violates the catalog shape.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalog").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CatalogFixture = serde_norway::from_str(&contents)?;

        self.catalog = Some(Catalog::new(fixture.products)?);

        Ok(self)
    }

    /// Load a complete fixture set by name
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog fixture cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_catalog(name)?;

        Ok(fixture)
    }

    /// Get the loaded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if no catalog has been loaded yet.
    pub fn catalog(&self) -> Result<&Catalog, FixtureError> {
        self.catalog.as_ref().ok_or(FixtureError::CatalogNotLoaded)
    }

    /// Get a product from the loaded catalog by id
    ///
    /// # Errors
    ///
    /// Returns an error if no catalog is loaded or the product is not found.
    pub fn product(&self, id: &str) -> Result<&Product, FixtureError> {
        self.catalog()?
            .get(id)
            .ok_or_else(|| FixtureError::ProductNotFound(id.to_string()))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
