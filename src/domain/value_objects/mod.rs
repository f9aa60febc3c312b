//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`CartId`]: UUID-based cart identifier
//! - [`ShopId`], [`ProductId`]: String-based identifiers
//!
//! ## Shipping Types
//!
//! - [`LocalityCode`]: Carrier locality (DANE municipality) code
//! - [`Money`]: Non-negative decimal amount with checked arithmetic

pub mod ids;
pub mod locality;
pub mod money;

pub use ids::{CartId, ProductId, ShopId};
pub use locality::LocalityCode;
pub use money::{ArithmeticError, ArithmeticResult, Money};
