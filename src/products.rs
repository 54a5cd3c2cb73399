//! Products

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::prices::Price;

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two catalog entries share the same product id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// A catalog entry declares no sizes.
    #[error("Product {0} has an empty size list")]
    NoSizes(String),
}

/// Product
///
/// A read-only catalog entry, supplied externally at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price in minor units
    pub price: Price,

    /// Opaque image reference
    pub image: String,

    /// Category label
    pub category: String,

    /// Ordered sequence of available size labels (non-empty)
    pub sizes: SmallVec<[String; 5]>,
}

/// Catalog
///
/// The static product list handed to the storefront at startup, in supplied
/// order, with an id index for lookups. Nothing beyond the declared shape
/// (unique ids, non-empty size lists) is validated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Create a catalog from the given products.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateProduct`]: two entries share an id.
    /// - [`CatalogError::NoSizes`]: an entry has an empty size list.
    pub fn new(products: impl Into<Vec<Product>>) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut index = FxHashMap::default();

        for (i, product) in products.iter().enumerate() {
            if product.sizes.is_empty() {
                return Err(CatalogError::NoSizes(product.id.clone()));
            }

            if index.insert(product.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }

        Ok(Catalog { products, index })
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// All products, in supplied order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
