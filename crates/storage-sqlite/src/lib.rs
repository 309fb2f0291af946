//! SQLite storage implementation for VibeLoop.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `vibeloop-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations and the bundled member seed
//! - The single writer actor that serializes every write
//! - Repository implementations for members and goals
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//!
//! ```text
//! core (domain)      server (axum)
//!       │                  │
//!       └────────┬─────────┘
//!                │
//!                ▼
//!        storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod goals;
pub mod members;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, seed_members, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from vibeloop-core for convenience
pub use vibeloop_core::errors::{DatabaseError, Error, Result};
