//! Intake API route configuration.
//!
//! Defines all routes for the intake HTTP API.

use axum::{
    Router,
    routing::{get, post},
};
use intake_store::store::{EncounterStore, PatientStore, VitalsStore};

use crate::handlers;
use crate::state::AppState;

/// Creates all intake API routes.
///
/// # Routes
///
/// ## Operational
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe (queries the store)
///
/// ## Intake
/// - `POST /api/patients` - Register a patient
/// - `GET /api/patients` - Patient roster
/// - `GET /api/patients/{id}` - Patient detail with encounters and vitals
/// - `POST /api/encounters` - Start an encounter
/// - `POST /api/vitals` - Submit vitals for an encounter
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: PatientStore + EncounterStore + VitalsStore + Send + Sync + 'static,
{
    Router::new()
        // Operational routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        // Intake routes
        .route(
            "/api/patients",
            post(handlers::register_patient_handler::<S>).get(handlers::list_patients_handler::<S>),
        )
        .route("/api/patients/{id}", get(handlers::get_patient_handler::<S>))
        .route(
            "/api/encounters",
            post(handlers::start_encounter_handler::<S>),
        )
        .route("/api/vitals", post(handlers::submit_vitals_handler::<S>))
        // State
        .with_state(state)
}
