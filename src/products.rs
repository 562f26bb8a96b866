//! Products

use std::fmt;

use serde::Deserialize;
use slotmap::new_key_type;

use crate::prices::Price;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Catalog-assigned product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Price of a single unit, in the catalog currency's minor units
    pub unit_price: Price,

    /// Display glyph
    pub image: String,

    /// Optional category used for grouping in listings
    pub category: Option<String>,

    /// Optional long-form description
    pub description: Option<String>,
}

impl Product {
    /// Create a product with no image, category or description.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            image: String::new(),
            category: None,
            description: None,
        }
    }

    /// Set the display glyph.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
