//! Intake Storage Layer
//!
//! This crate provides the persistence layer for the clinical records intake
//! service. It owns three independent record collections - patients,
//! encounters and vitals - and the composed read-back queries that join them.
//!
//! # Data model
//!
//! - [`Patient`](model::Patient) - demographic record with an embedded
//!   emergency contact.
//! - [`Encounter`](model::Encounter) - one episode of care, referencing a
//!   patient by identifier.
//! - [`Vitals`](model::Vitals) - one set of measurements, referencing an
//!   encounter by identifier.
//!
//! Cross-entity references are weak: they are stored as plain identifier
//! values and are never checked against the referenced collection. Deleting
//! a patient (not exposed by this layer) would not cascade.
//!
//! # Architecture
//!
//! - [`id`] - record identifier type and parsing
//! - [`model`] - domain records and write payloads
//! - [`error`] - error types for all operations
//! - [`store`] - storage traits per collection
//! - [`detail`] - composed queries across the three collections
//! - [`sqlite`] - SQLite backend implementation
//!
//! # Quick start
//!
//! ```no_run
//! use intake_store::model::NewPatient;
//! use intake_store::sqlite::SqliteBackend;
//! use intake_store::store::PatientStore;
//!
//! # async fn example() -> intake_store::StorageResult<()> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let id = backend
//!     .register(NewPatient {
//!         surname: Some("Mensah".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let patient = backend.get_patient(&id).await?;
//! assert!(patient.is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod detail;
pub mod error;
pub mod id;
pub mod model;
pub mod sqlite;
pub mod store;

// Re-export commonly used types at crate root
pub use error::{BackendError, StorageError, StorageResult};
pub use id::{InvalidIdError, RecordId};
pub use model::{Patient, PatientDetail, PatientSummary};
pub use store::{EncounterStore, PatientStore, VitalsStore};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
