//! VibeLoop Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for the team mood and goal tracker.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod members;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
