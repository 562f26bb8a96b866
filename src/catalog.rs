//! Catalog

use std::io;

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    products::{Product, ProductId, ProductKey},
    receipt::format_amount,
};

/// Errors related to catalog construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A product with the same identifier is already in the catalog.
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),
}

/// Read-only list of purchasable products, in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    currency: &'static Currency,
    products: SlotMap<ProductKey, Product>,
    keys: FxHashMap<ProductId, ProductKey>,
    order: Vec<ProductKey>,
}

impl Catalog {
    /// Create an empty catalog priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            currency,
            products: SlotMap::with_key(),
            keys: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Create a catalog from a list of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if two products share an id.
    pub fn with_products(
        products: impl IntoIterator<Item = Product>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(currency);

        for product in products {
            catalog.insert(product)?;
        }

        Ok(catalog)
    }

    /// Add a product to the end of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if the id is already present.
    pub fn insert(&mut self, product: Product) -> Result<ProductKey, CatalogError> {
        if self.keys.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        let id = product.id.clone();
        let key = self.products.insert(product);

        self.keys.insert(id, key);
        self.order.push(key);

        Ok(key)
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.keys
            .get(id)
            .and_then(|&key| self.products.get(key))
    }

    /// Check whether a product id is in the catalog.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.keys.contains_key(id)
    }

    /// Iterate products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.order.iter().filter_map(|&key| self.products.get(key))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Currency all prices are expressed in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Distinct categories, in the order they first appear.
    pub fn categories(&self) -> SmallVec<[&str; 8]> {
        let mut categories: SmallVec<[&str; 8]> = SmallVec::new();

        for category in self.iter().filter_map(|product| product.category.as_deref()) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        categories
    }

    /// Products in the given category, in insertion order.
    pub fn in_category<'c>(&'c self, category: &'c str) -> impl Iterator<Item = &'c Product> {
        self.iter()
            .filter(move |product| product.category.as_deref() == Some(category))
    }

    /// Write the catalog as a table.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        let mut builder = Builder::default();

        builder.push_record(["Id", "", "Product", "Category", "Price"]);

        for product in self.iter() {
            builder.push_record([
                product.id.to_string(),
                product.image.clone(),
                product.name.clone(),
                product.category.clone().unwrap_or_default(),
                format_amount(*product.unit_price, self.currency),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(4..5), Alignment::right());

        writeln!(out, "{table}")
    }
}
