//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    fixtures::{Fixture, FixtureError, catalog_from_str},
    prices::{Price, RUPIAH},
    products::{Product, ProductId, ProductKey},
    receipt::{Receipt, ReceiptError, ReceiptLine, format_amount},
    session::{CartCommand, Session, SessionError},
};
