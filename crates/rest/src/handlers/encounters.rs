//! Encounter handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_store::model::NewEncounter;
use intake_store::store::EncounterStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for starting an encounter.
///
/// The patient reference is stored as given; it is not checked against the
/// patient collection. A missing `dateAndTime` defaults to the time of the
/// write.
///
/// # HTTP Request
///
/// `POST /api/encounters`
///
/// # Response
///
/// - `201 Created` - `{"encounterId": "...", "message": "Encounter started successfully"}`
/// - `422 Unprocessable Entity` - Missing or malformed `patientId`
pub async fn start_encounter_handler<S>(
    State(state): State<AppState<S>>,
    Json(encounter): Json<NewEncounter>,
) -> RestResult<Response>
where
    S: EncounterStore + Send + Sync,
{
    debug!(patient_id = %encounter.patient_id, "Processing encounter start");

    let id = state.storage().start_encounter(encounter).await?;

    let body = serde_json::json!({
        "encounterId": id,
        "message": "Encounter started successfully",
    });

    Ok((StatusCode::CREATED, Json(body)).into_response())
}
