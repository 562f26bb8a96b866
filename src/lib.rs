//! Tally
//!
//! Tally is an in-memory shopping-cart ledger: a product catalog, a cart whose
//! lines are keyed by product id, derived totals, and checkout receipts.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod fixtures;
pub mod observability;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod receipt;
pub mod session;
