//! Composed read-back queries across the three collections.
//!
//! The patient detail view is a two-level explicit join by foreign key:
//! patient, then every encounter whose `patient_id` matches, then for each
//! encounter every vitals record whose `encounter_id` matches. The joins run
//! as secondary queries against the respective stores; nothing is
//! materialized on the patient record itself.

use crate::error::StorageResult;
use crate::id::RecordId;
use crate::model::{EncounterDetail, PatientDetail, PatientSummary};
use crate::store::{EncounterStore, PatientStore, VitalsStore};

/// Assembles a patient's full record.
///
/// Returns `None` when the patient identifier does not resolve. A patient
/// with no encounters yields an empty `encounters` sequence; an encounter
/// with no vitals yields an empty `vitals` sequence. Neither case is an
/// error.
pub async fn patient_detail<S>(store: &S, id: &RecordId) -> StorageResult<Option<PatientDetail>>
where
    S: PatientStore + EncounterStore + VitalsStore + ?Sized,
{
    let Some(patient) = store.get_patient(id).await? else {
        return Ok(None);
    };

    let mut encounters = Vec::new();
    for encounter in store.encounters_for_patient(id).await? {
        let vitals = store.vitals_for_encounter(&encounter.id).await?;
        encounters.push(EncounterDetail { encounter, vitals });
    }

    Ok(Some(PatientDetail {
        patient,
        encounters,
    }))
}

/// Produces the projected patient roster.
///
/// Delegates to [`PatientStore::list_patients`].
pub async fn patient_list<S>(store: &S) -> StorageResult<Vec<PatientSummary>>
where
    S: PatientStore + ?Sized,
{
    store.list_patients().await
}
