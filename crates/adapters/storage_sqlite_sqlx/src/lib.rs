//! # homestead-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `homestead-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `homestead-app` (for port traits) and `homestead-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod codec;
pub mod error;
pub mod pool;
pub mod property_repo;
pub mod user_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use property_repo::SqlitePropertyRepository;
pub use user_repo::SqliteUserRepository;
