//! Patient registration and read-back handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_store::detail;
use intake_store::error::RecordKind;
use intake_store::id::RecordId;
use intake_store::model::NewPatient;
use intake_store::store::{EncounterStore, PatientStore, VitalsStore};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for patient registration.
///
/// Accepts a partial demographic payload; no field is required.
///
/// # HTTP Request
///
/// `POST /api/patients`
///
/// # Response
///
/// - `201 Created` - `{"patientId": "...", "message": "Patient registered successfully"}`
pub async fn register_patient_handler<S>(
    State(state): State<AppState<S>>,
    Json(patient): Json<NewPatient>,
) -> RestResult<Response>
where
    S: PatientStore + Send + Sync,
{
    debug!("Processing patient registration");

    let id = state.storage().register(patient).await?;

    let body = serde_json::json!({
        "patientId": id,
        "message": "Patient registered successfully",
    });

    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// Handler for the patient roster.
///
/// Returns every patient projected to the summary fields; residential
/// address and emergency contact never appear here.
///
/// # HTTP Request
///
/// `GET /api/patients`
///
/// # Response
///
/// - `200 OK` - `{"patients": [...]}`
pub async fn list_patients_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: PatientStore + Send + Sync,
{
    debug!("Processing patient roster request");

    let patients = detail::patient_list(state.storage()).await?;

    let body = serde_json::json!({ "patients": patients });
    Ok((StatusCode::OK, Json(body)).into_response())
}

/// Handler for the patient detail read-back.
///
/// Resolves the full record: demographics, every encounter referencing the
/// patient, and every vitals record under each encounter.
///
/// # HTTP Request
///
/// `GET /api/patients/{id}`
///
/// # Response
///
/// - `200 OK` - The nested patient detail object
/// - `400 Bad Request` - Malformed identifier
/// - `404 Not Found` - Well-formed identifier that was never issued
pub async fn get_patient_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: PatientStore + EncounterStore + VitalsStore + Send + Sync,
{
    let id = RecordId::parse(&id)?;

    debug!(patient_id = %id, "Processing patient detail request");

    let detail = detail::patient_detail(state.storage(), &id)
        .await?
        .ok_or_else(|| RestError::NotFound {
            kind: RecordKind::Patient,
            id: id.to_string(),
        })?;

    Ok((StatusCode::OK, Json(detail)).into_response())
}
