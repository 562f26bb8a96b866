//! Prices

use std::{num::NonZeroU32, ops::Deref};

use rusty_money::iso::{self, Currency};

/// Indonesian Rupiah counted in whole rupiah.
///
/// ISO 4217 gives IDR two decimal places, but sen are no longer issued and
/// store prices are quoted in whole rupiah, so one minor unit is one rupiah.
pub const RUPIAH: &Currency = &Currency {
    exponent: 0,
    minor_units: 1,
    ..*iso::IDR
};

/// Represents a non-negative amount in minor currency units (cents, sen, pence).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: u64,
}

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self { value: 0 };

    /// Creates a new Price
    pub fn new(value: u64) -> Self {
        Price { value }
    }

    /// Price of `quantity` units at this unit price, or `None` on overflow.
    pub fn checked_mul(self, quantity: NonZeroU32) -> Option<Self> {
        self.value
            .checked_mul(u64::from(quantity.get()))
            .map(Self::new)
    }

    /// Sum of two prices, or `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.value.checked_add(other.value).map(Self::new)
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}
