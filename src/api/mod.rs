//! # API Layer
//!
//! Inbound interfaces of the service.
//!
//! - [`rest`]: axum REST API

pub mod rest;
