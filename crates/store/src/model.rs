//! Domain records and write payloads.
//!
//! Wire shapes are camelCase throughout. Registration payloads may be
//! partial - no field is required and nothing beyond JSON well-formedness is
//! enforced here. Cross-entity references (`patient_id`, `encounter_id`) are
//! plain identifiers, never checked against the referenced collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Emergency contact sub-record embedded in a patient record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    /// Contact name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Relationship to the patient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// Demographics payload for registering a patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Given names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_names: Option<String>,
    /// Gender, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Phone number, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Residential address, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential_address: Option<String>,
    /// Embedded emergency contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
}

/// A stored patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// The record identifier, assigned at registration.
    pub id: RecordId,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Given names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_names: Option<String>,
    /// Gender, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Phone number, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Residential address, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential_address: Option<String>,
    /// Embedded emergency contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
}

/// Roster projection of a patient record.
///
/// Exactly five fields. Address and emergency contact are not merely
/// omitted from serialization - they are not present on the type, so a
/// roster response can never leak them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    /// The record identifier.
    pub id: RecordId,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Given names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_names: Option<String>,
    /// Gender, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Phone number, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Payload for starting an encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEncounter {
    /// Identifier of the patient this encounter is for. Stored as-is;
    /// existence of the referenced patient is not verified.
    pub patient_id: RecordId,
    /// Encounter type label, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encounter_type: Option<String>,
    /// When the encounter happened. Omitted means "now", assigned once at
    /// write time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_and_time: Option<DateTime<Utc>>,
}

/// A stored encounter record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    /// The record identifier.
    pub id: RecordId,
    /// Weak reference to the patient.
    pub patient_id: RecordId,
    /// When the encounter happened.
    pub date_and_time: DateTime<Utc>,
    /// Encounter type label, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encounter_type: Option<String>,
}

/// Payload for submitting vitals against an encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVitals {
    /// Identifier of the encounter these measurements belong to. Stored
    /// as-is; existence is not verified.
    pub encounter_id: RecordId,
    /// Blood pressure, free text (e.g. "120/80").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    /// Body temperature. Any numeric value is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Pulse rate. Any numeric value is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<f64>,
    /// Oxygen saturation. Any numeric value is accepted.
    #[serde(default, rename = "spO2", skip_serializing_if = "Option::is_none")]
    pub sp_o2: Option<f64>,
}

/// A stored vitals record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    /// The record identifier.
    pub id: RecordId,
    /// Weak reference to the encounter.
    pub encounter_id: RecordId,
    /// Blood pressure, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    /// Body temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Pulse rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<f64>,
    /// Oxygen saturation.
    #[serde(default, rename = "spO2", skip_serializing_if = "Option::is_none")]
    pub sp_o2: Option<f64>,
}

/// An encounter with its related vitals attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncounterDetail {
    /// The encounter record.
    #[serde(flatten)]
    pub encounter: Encounter,
    /// All vitals referencing this encounter. Empty when none were
    /// submitted.
    pub vitals: Vec<Vitals>,
}

/// A patient's full record: demographics plus the two-level join down to
/// vitals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientDetail {
    /// The patient record.
    #[serde(flatten)]
    pub patient: Patient,
    /// All encounters referencing this patient, each with its vitals.
    /// Empty when the patient has no encounters.
    pub encounters: Vec<EncounterDetail>,
}
