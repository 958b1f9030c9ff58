//! HTTP request handlers for the intake API.
//!
//! Each submodule implements one group of operations:
//!
//! - [`patients`] - registration, roster, and detail read-back
//! - [`encounters`] - starting an encounter
//! - [`vitals`] - submitting vitals against an encounter
//! - [`health`] - health and probe endpoints

pub mod encounters;
pub mod health;
pub mod patients;
pub mod vitals;

pub use encounters::start_encounter_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use patients::{get_patient_handler, list_patients_handler, register_patient_handler};
pub use vitals::submit_vitals_handler;
