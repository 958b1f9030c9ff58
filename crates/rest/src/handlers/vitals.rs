//! Vitals handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_store::model::NewVitals;
use intake_store::store::VitalsStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for submitting vitals against an encounter.
///
/// The encounter reference is stored as given; it is not checked against
/// the encounter collection. All measurements are optional and unvalidated.
///
/// # HTTP Request
///
/// `POST /api/vitals`
///
/// # Response
///
/// - `201 Created` - `{"message": "Vitals submitted successfully"}`
/// - `422 Unprocessable Entity` - Missing or malformed `encounterId`
pub async fn submit_vitals_handler<S>(
    State(state): State<AppState<S>>,
    Json(vitals): Json<NewVitals>,
) -> RestResult<Response>
where
    S: VitalsStore + Send + Sync,
{
    debug!(encounter_id = %vitals.encounter_id, "Processing vitals submission");

    let id = state.storage().submit_vitals(vitals).await?;
    debug!(vitals_id = %id, "Vitals stored");

    let body = serde_json::json!({
        "message": "Vitals submitted successfully",
    });

    Ok((StatusCode::CREATED, Json(body)).into_response())
}
