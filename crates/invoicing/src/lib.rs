//! Invoicing read layer.
//!
//! This crate contains the read-only accessor API over raw invoice/refund
//! records fetched from an upstream ERP, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage). Fetching the record and
//! authenticating against the ERP are the caller's concern.

pub mod currencies;
pub mod invoice;
pub mod money;


pub use currencies::{is_known_currency_code, minor_units};
pub use invoice::{Classification, Direction, DocumentKind, InvoiceView};
pub use money::{Currency, Money, Sign};
