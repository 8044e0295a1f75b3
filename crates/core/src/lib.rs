//! `erplens-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the raw record wrapper, the dotted-path resolver, and the
//! error model.

pub mod error;
pub mod record;
pub mod resolve;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use record::RawRecord;
pub use value_object::ValueObject;
