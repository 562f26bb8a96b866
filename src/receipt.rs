//! Receipt

use std::{io, num::NonZeroU32};

use rusty_money::{Money, iso::Currency};
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
    cart::{Cart, CartError},
    catalog::Catalog,
    prices::Price,
    products::ProductId,
};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The cart could not be priced against the catalog.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Writing the receipt failed.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// A priced cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    /// Product identifier
    pub product_id: ProductId,

    /// Product name at the time of the snapshot
    pub name: String,

    /// Product display glyph
    pub image: String,

    /// Units purchased
    pub quantity: NonZeroU32,

    /// Price of one unit, in minor units
    pub unit_price: u64,

    /// `quantity * unit_price`, in minor units
    pub line_total: u64,
}

/// Immutable snapshot of a cart's lines and totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    lines: SmallVec<[ReceiptLine; 8]>,
    item_count: u64,
    total: u64,
    currency: &'static Currency,
}

impl Receipt {
    /// Price every line of `cart` against `catalog`.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownProduct`]: a line's product is not in `catalog`.
    /// - [`CartError::AmountOverflow`]: a total does not fit in a `u64`.
    pub fn from_cart(cart: &Cart, catalog: &Catalog) -> Result<Self, CartError> {
        let mut lines = SmallVec::with_capacity(cart.len());
        let mut total = Price::ZERO;

        for line in cart.lines() {
            let product = catalog
                .get(line.product_id())
                .ok_or_else(|| CartError::UnknownProduct(line.product_id().clone()))?;

            let line_total = line.total(product.unit_price)?;

            total = total
                .checked_add(line_total)
                .ok_or(CartError::AmountOverflow)?;

            lines.push(ReceiptLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                image: product.image.clone(),
                quantity: line.quantity(),
                unit_price: *product.unit_price,
                line_total: *line_total,
            });
        }

        Ok(Self {
            lines,
            item_count: cart.item_count(),
            total: *total,
            currency: catalog.currency(),
        })
    }

    /// Priced lines in cart order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Sum of all line totals, in minor units.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Currency of all amounts.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Check if the receipt has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write the receipt as a table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Io`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.is_empty() {
            writeln!(out, "\n Cart is empty")?;

            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Qty", "Unit Price", "Line Total"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                format!("{} {}", line.image, line.name).trim().to_string(),
                line.quantity.to_string(),
                format_amount(line.unit_price, self.currency),
                format_amount(line.line_total, self.currency),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "\n{table}")?;
        writeln!(out, " Items: {}", self.item_count)?;
        writeln!(
            out,
            " \x1b[1mTotal:\x1b[0m {}",
            format_amount(self.total, self.currency)
        )?;

        Ok(())
    }
}

/// Format a minor-unit amount with the currency's symbol and separators.
///
/// Amounts beyond `i64::MAX` minor units are clamped for display.
pub fn format_amount(minor_units: u64, currency: &'static Currency) -> String {
    let amount = i64::try_from(minor_units).unwrap_or(i64::MAX);

    Money::from_minor(amount, currency).to_string()
}
