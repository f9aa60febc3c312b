//! # In-Memory Repositories
//!
//! In-memory implementations for testing without database dependencies.
//!
//! All implementations use `Arc<RwLock<HashMap>>` for thread-safe access.

pub mod cart_line_repository;

pub use cart_line_repository::InMemoryCartLineRepository;
