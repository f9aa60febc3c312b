//! # Infrastructure Layer
//!
//! Adapters for the outside world.
//!
//! - [`carrier`]: Shipping carrier HTTP integrations
//! - [`persistence`]: Cart line repositories

pub mod carrier;
pub mod persistence;
