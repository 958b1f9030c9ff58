//! SQLite backend implementation.
//!
//! This module provides a complete SQLite implementation of all three
//! storage traits. It supports both in-memory databases (for testing) and
//! file-based databases (for development and small deployments).
//!
//! # Example
//!
//! ```no_run
//! use intake_store::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open("intake.db")?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! One table per collection (`patients`, `encounters`, `vitals`) with typed
//! columns, plus lookup indexes on the two reference columns. Reference
//! columns carry no foreign key constraint; references are weak by design
//! of the data model. Schema versioning lives in `schema_version`.

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use schema::SCHEMA_VERSION;
