//! # Domain Layer
//!
//! Transient shapes assembled while quoting shipping for a cart: cart
//! lines read from the marketplace database, per-shop parcel groups, and
//! the carrier quotes produced for them.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
