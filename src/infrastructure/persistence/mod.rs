//! # Persistence Layer
//!
//! ## Repository Traits (Ports)
//!
//! - [`CartLineRepository`]: Read access to cart lines joined with
//!   product and seller shop data
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory implementation for tests
//! - `postgres`: PostgreSQL implementation using sqlx

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use in_memory::InMemoryCartLineRepository;
pub use postgres::PostgresCartLineRepository;
pub use traits::{CartLineRepository, RepositoryError, RepositoryResult};
