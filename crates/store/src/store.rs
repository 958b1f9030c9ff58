//! Storage traits for the three record collections.
//!
//! Each collection gets its own trait so the composition layer can state
//! exactly which legs of the join it needs. A backend normally implements
//! all three; the traits exist so handlers and the composer stay decoupled
//! from any concrete database.
//!
//! All writes are single-record atomic creates. No operation spans two
//! collections, so there is nothing for a cross-write transaction to
//! protect. None of the records can be updated or deleted through this
//! layer - every record is write-once.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::id::RecordId;
use crate::model::{
    Encounter, NewEncounter, NewPatient, NewVitals, Patient, PatientSummary, Vitals,
};

/// Storage for patient demographic records.
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Registers a new patient.
    ///
    /// The payload may be partial; no required-field enforcement is
    /// performed. Assigns and returns a fresh identifier.
    ///
    /// # Errors
    ///
    /// `StorageError::Backend` if the store is unreachable or rejects the
    /// write.
    async fn register(&self, patient: NewPatient) -> StorageResult<RecordId>;

    /// Lists all patients, projected to the roster summary fields.
    ///
    /// Ordering is store-native; insertion order is not guaranteed. An
    /// empty store produces an empty vector, never an error.
    async fn list_patients(&self) -> StorageResult<Vec<PatientSummary>>;

    /// Fetches a full patient record by identifier.
    ///
    /// Returns `None` when the identifier was never issued. Identifier
    /// format errors are raised by [`RecordId::parse`] before the store is
    /// ever reached.
    async fn get_patient(&self, id: &RecordId) -> StorageResult<Option<Patient>>;
}

/// Storage for encounter records.
///
/// Encounters have no direct read-by-id operation; they are only reachable
/// through the composed patient detail query.
#[async_trait]
pub trait EncounterStore: Send + Sync {
    /// Starts an encounter for a patient.
    ///
    /// The patient reference is stored as-is - its existence is not
    /// verified. A missing timestamp is assigned the current time, once,
    /// at write time.
    async fn start_encounter(&self, encounter: NewEncounter) -> StorageResult<RecordId>;

    /// Returns all encounters referencing the given patient.
    async fn encounters_for_patient(&self, patient_id: &RecordId)
    -> StorageResult<Vec<Encounter>>;
}

/// Storage for vitals records.
#[async_trait]
pub trait VitalsStore: Send + Sync {
    /// Submits a set of measurements against an encounter.
    ///
    /// The encounter reference is stored as-is; existence is not verified.
    /// Numeric fields accept any value - no physiological range checks.
    async fn submit_vitals(&self, vitals: NewVitals) -> StorageResult<RecordId>;

    /// Returns all vitals referencing the given encounter.
    async fn vitals_for_encounter(&self, encounter_id: &RecordId) -> StorageResult<Vec<Vitals>>;
}
