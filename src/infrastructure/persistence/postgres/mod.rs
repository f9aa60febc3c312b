//! # PostgreSQL Repositories
//!
//! sqlx-backed implementations of the repository ports.

pub mod cart_line_repository;

pub use cart_line_repository::PostgresCartLineRepository;
