//! Cart
//!
//! The cart ledger: an insertion-ordered set of lines keyed by product id.
//! Totals are derived from the catalog on every call and never cached.

use std::num::NonZeroU32;

use thiserror::Error;
use tracing::{debug, info};

use crate::{catalog::Catalog, prices::Price, products::ProductId, receipt::Receipt};

/// Errors raised by cart operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The product id is not present in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The operation needs an existing cart line for this product.
    #[error("product {0} is not in the cart")]
    ItemNotInCart(ProductId),

    /// The line quantity would exceed `u32::MAX`.
    #[error("quantity for product {0} is too large")]
    QuantityOverflow(ProductId),

    /// A line or cart total would exceed `u64::MAX` minor units.
    #[error("cart total is too large")]
    AmountOverflow,

    /// Checkout was requested on an empty cart.
    #[error("cart is empty")]
    EmptyCart,
}

/// One product's quantity entry within a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product_id: ProductId,
    quantity: NonZeroU32,
}

impl CartLine {
    /// Product this line refers to.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Number of units, always at least one.
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    pub(crate) fn total(&self, unit_price: Price) -> Result<Price, CartError> {
        unit_price
            .checked_mul(self.quantity)
            .ok_or(CartError::AmountOverflow)
    }
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Bumps the quantity of an existing line, otherwise appends a new line.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownProduct`]: the id is not in `catalog`.
    /// - [`CartError::QuantityOverflow`]: the line quantity would overflow.
    pub fn add_item(&mut self, id: &ProductId, catalog: &Catalog) -> Result<&mut Self, CartError> {
        self.add_items(id, NonZeroU32::MIN, catalog)
    }

    /// Add `quantity` units of a product in one step.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownProduct`]: the id is not in `catalog`.
    /// - [`CartError::QuantityOverflow`]: the line quantity would overflow.
    pub fn add_items(
        &mut self,
        id: &ProductId,
        quantity: NonZeroU32,
        catalog: &Catalog,
    ) -> Result<&mut Self, CartError> {
        if !catalog.contains(id) {
            return Err(CartError::UnknownProduct(id.clone()));
        }

        if let Some(line) = self.line_mut(id) {
            line.quantity = line
                .quantity
                .checked_add(quantity.get())
                .ok_or_else(|| CartError::QuantityOverflow(id.clone()))?;

            debug!(product = %id, quantity = line.quantity.get(), "increased cart line");
        } else {
            self.lines.push(CartLine {
                product_id: id.clone(),
                quantity,
            });

            debug!(product = %id, quantity = quantity.get(), "added cart line");
        }

        Ok(self)
    }

    /// Remove a product's line regardless of quantity. Absent products are ignored.
    pub fn remove_item(&mut self, id: &ProductId) -> &mut Self {
        let before = self.lines.len();

        self.lines.retain(|line| &line.product_id != id);

        if self.lines.len() < before {
            debug!(product = %id, "removed cart line");
        }

        self
    }

    /// Increase a line's quantity by one.
    ///
    /// # Errors
    ///
    /// - [`CartError::ItemNotInCart`]: there is no line for `id`.
    /// - [`CartError::QuantityOverflow`]: the quantity is already `u32::MAX`.
    pub fn increment_quantity(&mut self, id: &ProductId) -> Result<&mut Self, CartError> {
        let line = self
            .line_mut(id)
            .ok_or_else(|| CartError::ItemNotInCart(id.clone()))?;

        line.quantity = line
            .quantity
            .checked_add(1)
            .ok_or_else(|| CartError::QuantityOverflow(id.clone()))?;

        debug!(product = %id, quantity = line.quantity.get(), "incremented cart line");

        Ok(self)
    }

    /// Decrease a line's quantity by one, removing the line when it reaches zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotInCart`] if there is no line for `id`.
    pub fn decrement_quantity(&mut self, id: &ProductId) -> Result<&mut Self, CartError> {
        let line = self
            .line_mut(id)
            .ok_or_else(|| CartError::ItemNotInCart(id.clone()))?;

        if let Some(quantity) = NonZeroU32::new(line.quantity.get() - 1) {
            line.quantity = quantity;

            debug!(product = %id, quantity = quantity.get(), "decremented cart line");
        } else {
            self.remove_item(id);
        }

        Ok(self)
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> &mut Self {
        self.lines.clear();
        self
    }

    /// Total for one line: quantity times the product's unit price.
    ///
    /// # Errors
    ///
    /// - [`CartError::ItemNotInCart`]: there is no line for `id`.
    /// - [`CartError::UnknownProduct`]: the id is not in `catalog`.
    /// - [`CartError::AmountOverflow`]: the total does not fit in a `u64`.
    pub fn line_total(&self, id: &ProductId, catalog: &Catalog) -> Result<u64, CartError> {
        let line = self
            .line(id)
            .ok_or_else(|| CartError::ItemNotInCart(id.clone()))?;

        let product = catalog
            .get(id)
            .ok_or_else(|| CartError::UnknownProduct(id.clone()))?;

        line.total(product.unit_price).map(|total| *total)
    }

    /// Sum of all line totals; zero for an empty cart.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownProduct`]: a line's product is not in `catalog`.
    /// - [`CartError::AmountOverflow`]: the total does not fit in a `u64`.
    pub fn cart_total(&self, catalog: &Catalog) -> Result<u64, CartError> {
        let total = self.lines.iter().try_fold(Price::ZERO, |acc, line| {
            let product = catalog
                .get(&line.product_id)
                .ok_or_else(|| CartError::UnknownProduct(line.product_id.clone()))?;

            acc.checked_add(line.total(product.unit_price)?)
                .ok_or(CartError::AmountOverflow)
        })?;

        Ok(*total)
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Quantity held for a product, if it has a line.
    pub fn quantity(&self, id: &ProductId) -> Option<NonZeroU32> {
        self.line(id).map(CartLine::quantity)
    }

    /// Check whether the cart has a line for a product.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.line(id).is_some()
    }

    /// Lines in the order their products were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Snapshot the cart's lines and totals without changing it.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownProduct`]: a line's product is not in `catalog`.
    /// - [`CartError::AmountOverflow`]: a total does not fit in a `u64`.
    pub fn receipt(&self, catalog: &Catalog) -> Result<Receipt, CartError> {
        Receipt::from_cart(self, catalog)
    }

    /// Snapshot the cart, then clear it.
    ///
    /// The cart is left unchanged if the receipt cannot be built.
    ///
    /// # Errors
    ///
    /// - [`CartError::EmptyCart`]: there is nothing to check out.
    /// - [`CartError::UnknownProduct`]: a line's product is not in `catalog`.
    /// - [`CartError::AmountOverflow`]: a total does not fit in a `u64`.
    pub fn checkout(&mut self, catalog: &Catalog) -> Result<Receipt, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let receipt = Receipt::from_cart(self, catalog)?;

        self.clear();

        info!(
            items = receipt.item_count(),
            total = receipt.total(),
            "checked out cart"
        );

        Ok(receipt)
    }

    fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product_id == id)
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.product_id == id)
    }
}
