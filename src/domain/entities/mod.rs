//! # Domain Entities
//!
//! Shapes assembled for one shipping quote request. None of them is
//! persisted.
//!
//! - [`CartLine`]: Cart item joined with product and seller shop data
//! - [`Piece`]: One physical parcel
//! - [`ShopGroup`]: Parcels and declared value for one seller shop
//! - [`ShopQuote`]: Carrier quote (or fallback) for one shop
//! - [`CartShippingQuote`]: Quotes for every shop plus the grand total

pub mod cart_line;
pub mod piece;
pub mod shop_group;
pub mod shop_quote;

pub use cart_line::{CartLine, Dimensions};
pub use piece::Piece;
pub use shop_group::ShopGroup;
pub use shop_quote::{CartShippingQuote, PartialQuoteFailure, ShopQuote};
