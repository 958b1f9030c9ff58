//! Storage trait implementations for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{Row, params};

use crate::error::{BackendError, StorageError, StorageResult};
use crate::id::RecordId;
use crate::model::{
    EmergencyContact, Encounter, NewEncounter, NewPatient, NewVitals, Patient, PatientSummary,
    Vitals,
};
use crate::store::{EncounterStore, PatientStore, VitalsStore};

use super::SqliteBackend;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        message,
        source: None,
    })
}

fn parse_timestamp(raw: &str) -> StorageResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| internal_error(format!("Failed to parse stored timestamp: {}", e)))
}

fn parse_contact(raw: Option<String>) -> StorageResult<Option<EmergencyContact>> {
    match raw {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<(String, NewPatient, Option<String>)> {
    let id: String = row.get(0)?;
    let contact: Option<String> = row.get(6)?;
    let fields = NewPatient {
        surname: row.get(1)?,
        other_names: row.get(2)?,
        gender: row.get(3)?,
        phone_number: row.get(4)?,
        residential_address: row.get(5)?,
        emergency_contact: None,
    };
    Ok((id, fields, contact))
}

#[async_trait]
impl PatientStore for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn register(&self, patient: NewPatient) -> StorageResult<RecordId> {
        let conn = self.get_connection()?;
        let id = RecordId::generate();

        let contact = patient
            .emergency_contact
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        conn.execute(
            "INSERT INTO patients
                (id, surname, other_names, gender, phone_number,
                 residential_address, emergency_contact)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                id.as_str(),
                patient.surname,
                patient.other_names,
                patient.gender,
                patient.phone_number,
                patient.residential_address,
                contact,
            ],
        )
        .map_err(|e| internal_error(format!("Failed to insert patient: {}", e)))?;

        tracing::debug!(patient_id = %id, "registered patient");
        Ok(id)
    }

    async fn list_patients(&self) -> StorageResult<Vec<PatientSummary>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare(
                "SELECT id, surname, other_names, gender, phone_number
                 FROM patients",
            )
            .map_err(|e| internal_error(format!("Failed to prepare roster query: {}", e)))?;

        let rows = stmt
            .query_map([], |row| {
                let id: String = row.get(0)?;
                Ok((
                    id,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, Option<String>>(4)?,
                ))
            })
            .map_err(|e| internal_error(format!("Failed to list patients: {}", e)))?;

        let mut patients = Vec::new();
        for row in rows {
            let (id, surname, other_names, gender, phone_number) =
                row.map_err(|e| internal_error(format!("Failed to read patient row: {}", e)))?;
            patients.push(PatientSummary {
                id: RecordId::parse(&id)?,
                surname,
                other_names,
                gender,
                phone_number,
            });
        }

        Ok(patients)
    }

    async fn get_patient(&self, id: &RecordId) -> StorageResult<Option<Patient>> {
        let conn = self.get_connection()?;

        let result = conn.query_row(
            "SELECT id, surname, other_names, gender, phone_number,
                    residential_address, emergency_contact
             FROM patients WHERE id = ?1",
            params![id.as_str()],
            patient_from_row,
        );

        match result {
            Ok((id, mut fields, contact)) => {
                fields.emergency_contact = parse_contact(contact)?;
                Ok(Some(Patient {
                    id: RecordId::parse(&id)?,
                    surname: fields.surname,
                    other_names: fields.other_names,
                    gender: fields.gender,
                    phone_number: fields.phone_number,
                    residential_address: fields.residential_address,
                    emergency_contact: fields.emergency_contact,
                }))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(internal_error(format!("Failed to read patient: {}", e))),
        }
    }
}

#[async_trait]
impl EncounterStore for SqliteBackend {
    async fn start_encounter(&self, encounter: NewEncounter) -> StorageResult<RecordId> {
        let conn = self.get_connection()?;
        let id = RecordId::generate();

        // Assigned once here, not re-derived on later reads
        let date_and_time = encounter.date_and_time.unwrap_or_else(Utc::now);

        conn.execute(
            "INSERT INTO encounters (id, patient_id, date_and_time, encounter_type)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                id.as_str(),
                encounter.patient_id.as_str(),
                date_and_time.to_rfc3339(),
                encounter.encounter_type,
            ],
        )
        .map_err(|e| internal_error(format!("Failed to insert encounter: {}", e)))?;

        tracing::debug!(encounter_id = %id, patient_id = %encounter.patient_id, "started encounter");
        Ok(id)
    }

    async fn encounters_for_patient(
        &self,
        patient_id: &RecordId,
    ) -> StorageResult<Vec<Encounter>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare(
                "SELECT id, patient_id, date_and_time, encounter_type
                 FROM encounters WHERE patient_id = ?1",
            )
            .map_err(|e| internal_error(format!("Failed to prepare encounter query: {}", e)))?;

        let rows = stmt
            .query_map(params![patient_id.as_str()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<String>>(3)?,
                ))
            })
            .map_err(|e| internal_error(format!("Failed to query encounters: {}", e)))?;

        let mut encounters = Vec::new();
        for row in rows {
            let (id, patient_id, date_and_time, encounter_type) =
                row.map_err(|e| internal_error(format!("Failed to read encounter row: {}", e)))?;
            encounters.push(Encounter {
                id: RecordId::parse(&id)?,
                patient_id: RecordId::parse(&patient_id)?,
                date_and_time: parse_timestamp(&date_and_time)?,
                encounter_type,
            });
        }

        Ok(encounters)
    }
}

#[async_trait]
impl VitalsStore for SqliteBackend {
    async fn submit_vitals(&self, vitals: NewVitals) -> StorageResult<RecordId> {
        let conn = self.get_connection()?;
        let id = RecordId::generate();

        conn.execute(
            "INSERT INTO vitals
                (id, encounter_id, blood_pressure, temperature, pulse, sp_o2)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id.as_str(),
                vitals.encounter_id.as_str(),
                vitals.blood_pressure,
                vitals.temperature,
                vitals.pulse,
                vitals.sp_o2,
            ],
        )
        .map_err(|e| internal_error(format!("Failed to insert vitals: {}", e)))?;

        tracing::debug!(vitals_id = %id, encounter_id = %vitals.encounter_id, "submitted vitals");
        Ok(id)
    }

    async fn vitals_for_encounter(&self, encounter_id: &RecordId) -> StorageResult<Vec<Vitals>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare(
                "SELECT id, encounter_id, blood_pressure, temperature, pulse, sp_o2
                 FROM vitals WHERE encounter_id = ?1",
            )
            .map_err(|e| internal_error(format!("Failed to prepare vitals query: {}", e)))?;

        let rows = stmt
            .query_map(params![encounter_id.as_str()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<f64>>(3)?,
                    row.get::<_, Option<f64>>(4)?,
                    row.get::<_, Option<f64>>(5)?,
                ))
            })
            .map_err(|e| internal_error(format!("Failed to query vitals: {}", e)))?;

        let mut all = Vec::new();
        for row in rows {
            let (id, encounter_id, blood_pressure, temperature, pulse, sp_o2) =
                row.map_err(|e| internal_error(format!("Failed to read vitals row: {}", e)))?;
            all.push(Vitals {
                id: RecordId::parse(&id)?,
                encounter_id: RecordId::parse(&encounter_id)?,
                blood_pressure,
                temperature,
                pulse,
                sp_o2,
            });
        }

        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EmergencyContact;

    fn backend() -> SqliteBackend {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.init_schema().unwrap();
        backend
    }

    #[tokio::test]
    async fn test_register_and_get_patient() {
        let backend = backend();

        let id = backend
            .register(NewPatient {
                surname: Some("Mensah".into()),
                other_names: Some("Ama".into()),
                gender: Some("F".into()),
                phone_number: Some("0551234567".into()),
                residential_address: Some("12 Osu Lane, Accra".into()),
                emergency_contact: Some(EmergencyContact {
                    name: Some("Kofi Mensah".into()),
                    phone: Some("0241112222".into()),
                    relationship: Some("brother".into()),
                }),
            })
            .await
            .unwrap();

        let patient = backend.get_patient(&id).await.unwrap().unwrap();
        assert_eq!(patient.id, id);
        assert_eq!(patient.surname.as_deref(), Some("Mensah"));
        assert_eq!(patient.residential_address.as_deref(), Some("12 Osu Lane, Accra"));
        let contact = patient.emergency_contact.unwrap();
        assert_eq!(contact.name.as_deref(), Some("Kofi Mensah"));
        assert_eq!(contact.relationship.as_deref(), Some("brother"));
    }

    #[tokio::test]
    async fn test_register_partial_patient() {
        let backend = backend();

        let id = backend.register(NewPatient::default()).await.unwrap();

        let patient = backend.get_patient(&id).await.unwrap().unwrap();
        assert!(patient.surname.is_none());
        assert!(patient.emergency_contact.is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_patient_is_none() {
        let backend = backend();
        let unassigned = RecordId::parse("ffffffffffffffffffffffff").unwrap();
        assert!(backend.get_patient(&unassigned).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_patients_projection() {
        let backend = backend();
        assert!(backend.list_patients().await.unwrap().is_empty());

        backend
            .register(NewPatient {
                surname: Some("Mensah".into()),
                residential_address: Some("12 Osu Lane".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        backend
            .register(NewPatient {
                surname: Some("Owusu".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let roster = backend.list_patients().await.unwrap();
        assert_eq!(roster.len(), 2);
        let surnames: Vec<_> = roster.iter().filter_map(|p| p.surname.as_deref()).collect();
        assert!(surnames.contains(&"Mensah"));
        assert!(surnames.contains(&"Owusu"));
    }

    #[tokio::test]
    async fn test_encounter_default_timestamp() {
        let backend = backend();
        let patient_id = backend.register(NewPatient::default()).await.unwrap();

        let before = Utc::now();
        backend
            .start_encounter(NewEncounter {
                patient_id: patient_id.clone(),
                encounter_type: Some("OPD".into()),
                date_and_time: None,
            })
            .await
            .unwrap();
        let after = Utc::now();

        let encounters = backend.encounters_for_patient(&patient_id).await.unwrap();
        assert_eq!(encounters.len(), 1);
        assert!(encounters[0].date_and_time >= before);
        assert!(encounters[0].date_and_time <= after);
    }

    #[tokio::test]
    async fn test_encounter_explicit_timestamp_preserved() {
        let backend = backend();
        let patient_id = backend.register(NewPatient::default()).await.unwrap();

        let when = DateTime::parse_from_rfc3339("2026-03-15T08:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        backend
            .start_encounter(NewEncounter {
                patient_id: patient_id.clone(),
                encounter_type: None,
                date_and_time: Some(when),
            })
            .await
            .unwrap();

        let encounters = backend.encounters_for_patient(&patient_id).await.unwrap();
        assert_eq!(encounters[0].date_and_time, when);
        assert!(encounters[0].encounter_type.is_none());
    }

    #[tokio::test]
    async fn test_encounter_dangling_patient_reference_accepted() {
        let backend = backend();
        let nobody = RecordId::parse("0123456789abcdef01234567").unwrap();

        // References are weak: no existence check on the patient
        backend
            .start_encounter(NewEncounter {
                patient_id: nobody.clone(),
                encounter_type: Some("OPD".into()),
                date_and_time: None,
            })
            .await
            .unwrap();

        assert_eq!(backend.encounters_for_patient(&nobody).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_vitals_round_trip() {
        let backend = backend();
        let patient_id = backend.register(NewPatient::default()).await.unwrap();
        let encounter_id = backend
            .start_encounter(NewEncounter {
                patient_id,
                encounter_type: None,
                date_and_time: None,
            })
            .await
            .unwrap();

        backend
            .submit_vitals(NewVitals {
                encounter_id: encounter_id.clone(),
                blood_pressure: Some("120/80".into()),
                temperature: Some(36.6),
                pulse: Some(72.0),
                sp_o2: Some(98.0),
            })
            .await
            .unwrap();

        let vitals = backend.vitals_for_encounter(&encounter_id).await.unwrap();
        assert_eq!(vitals.len(), 1);
        assert_eq!(vitals[0].blood_pressure.as_deref(), Some("120/80"));
        assert_eq!(vitals[0].temperature, Some(36.6));
        assert_eq!(vitals[0].sp_o2, Some(98.0));
    }

    #[tokio::test]
    async fn test_vitals_partial_measurements() {
        let backend = backend();
        let patient_id = backend.register(NewPatient::default()).await.unwrap();
        let encounter_id = backend
            .start_encounter(NewEncounter {
                patient_id,
                encounter_type: None,
                date_and_time: None,
            })
            .await
            .unwrap();

        backend
            .submit_vitals(NewVitals {
                encounter_id: encounter_id.clone(),
                blood_pressure: None,
                temperature: Some(38.2),
                pulse: None,
                sp_o2: None,
            })
            .await
            .unwrap();

        let vitals = backend.vitals_for_encounter(&encounter_id).await.unwrap();
        assert_eq!(vitals[0].temperature, Some(38.2));
        assert!(vitals[0].blood_pressure.is_none());
        assert!(vitals[0].pulse.is_none());
    }

    #[tokio::test]
    async fn test_multiple_vitals_per_encounter() {
        let backend = backend();
        let patient_id = backend.register(NewPatient::default()).await.unwrap();
        let encounter_id = backend
            .start_encounter(NewEncounter {
                patient_id,
                encounter_type: None,
                date_and_time: None,
            })
            .await
            .unwrap();

        for pulse in [70.0, 75.0, 80.0] {
            backend
                .submit_vitals(NewVitals {
                    encounter_id: encounter_id.clone(),
                    blood_pressure: None,
                    temperature: None,
                    pulse: Some(pulse),
                    sp_o2: None,
                })
                .await
                .unwrap();
        }

        assert_eq!(backend.vitals_for_encounter(&encounter_id).await.unwrap().len(), 3);
    }
}
