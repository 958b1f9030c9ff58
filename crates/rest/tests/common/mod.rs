//! Shared test infrastructure for the intake API tests.

use axum_test::TestServer;
use serde_json::{Value, json};

use intake_rest::{ServerConfig, create_app_with_config};
use intake_store::sqlite::SqliteBackend;

/// Builds a test server over a fresh in-memory backend.
pub fn setup() -> TestServer {
    let backend = SqliteBackend::in_memory().expect("Failed to create backend");
    backend.init_schema().expect("Failed to initialize schema");

    let app = create_app_with_config(backend, ServerConfig::for_testing());
    TestServer::new(app).expect("Failed to create test server")
}

/// A complete registration payload.
pub fn full_patient() -> Value {
    json!({
        "surname": "Mensah",
        "otherNames": "Ama",
        "gender": "F",
        "phoneNumber": "0551234567",
        "residentialAddress": "12 Osu Lane, Accra",
        "emergencyContact": {
            "name": "Kofi Mensah",
            "phone": "0241112222",
            "relationship": "brother"
        }
    })
}

/// Registers a patient and returns the assigned identifier.
pub async fn register_patient(server: &TestServer, payload: &Value) -> String {
    let response = server.post("/api/patients").json(payload).await;
    response.assert_status(http::StatusCode::CREATED);
    let body: Value = response.json();
    body["patientId"]
        .as_str()
        .expect("patientId missing from registration response")
        .to_string()
}

/// Starts an encounter and returns the assigned identifier.
pub async fn start_encounter(server: &TestServer, payload: &Value) -> String {
    let response = server.post("/api/encounters").json(payload).await;
    response.assert_status(http::StatusCode::CREATED);
    let body: Value = response.json();
    body["encounterId"]
        .as_str()
        .expect("encounterId missing from encounter response")
        .to_string()
}
