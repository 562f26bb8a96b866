//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::{
    catalog::Catalog,
    fixtures::FixtureError,
    prices::{Price, RUPIAH},
    products::{Product, ProductId},
};

/// Catalog document in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// ISO currency code shared by every price (e.g., "IDR")
    pub currency: String,

    /// Products in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product price in major units (e.g., "2500.00")
    pub price: String,

    /// Display glyph
    #[serde(default)]
    pub image: String,

    /// Category
    #[serde(default)]
    pub category: Option<String>,

    /// Description
    #[serde(default)]
    pub description: Option<String>,
}

impl ProductFixture {
    /// Validate the record and convert it into a [`Product`] priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the price is invalid.
    pub fn into_product(self, currency: &'static Currency) -> Result<Product, FixtureError> {
        if self.name.trim().is_empty() {
            return Err(FixtureError::InvalidProduct {
                id: self.id.to_string(),
                reason: "name must not be blank",
            });
        }

        let unit_price = parse_price(&self.price, currency)?;

        Ok(Product {
            id: self.id,
            name: self.name,
            unit_price,
            image: self.image,
            category: self.category.filter(|category| !category.trim().is_empty()),
            description: self.description,
        })
    }
}

impl TryFrom<CatalogFixture> for Catalog {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let currency = parse_currency(&fixture.currency)?;
        let mut catalog = Catalog::new(currency);

        for product_fixture in fixture.products {
            catalog.insert(product_fixture.into_product(currency)?)?;
        }

        Ok(catalog)
    }
}

/// Parse an ISO currency code
///
/// # Errors
///
/// Returns an error if the code is not one of IDR, GBP, USD or EUR. IDR maps to
/// [`RUPIAH`], which has no minor unit.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim() {
        "IDR" => Ok(RUPIAH),
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

/// Parse a major-unit amount (e.g., "2.99") into minor units of `currency`
///
/// The amount is scaled by the currency's exponent and rounded to the nearest minor unit.
///
/// # Errors
///
/// Returns an error if the amount cannot be parsed, is negative, or does not fit in a `u64`.
pub fn parse_price(s: &str, currency: &'static Currency) -> Result<Price, FixtureError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let scale = 10_u64
        .checked_pow(currency.exponent)
        .map(Decimal::from)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    amount
        .checked_mul(scale)
        .and_then(|value| value.round_dp(0).to_u64())
        .map(Price::new)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))
}
