//! Integration tests for the intake HTTP API.

mod common;

use http::StatusCode;
use serde_json::{Value, json};

use common::{full_patient, register_patient, setup, start_encounter};

#[tokio::test]
async fn test_register_patient_returns_id_and_message() {
    let server = setup();

    let response = server.post("/api/patients").json(&full_patient()).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["message"], "Patient registered successfully");

    let id = body["patientId"].as_str().expect("patientId missing");
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_register_partial_patient() {
    let server = setup();

    let response = server
        .post("/api/patients")
        .json(&json!({"surname": "Owusu"}))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_empty_patient() {
    let server = setup();

    // No field is required
    let response = server.post("/api/patients").json(&json!({})).await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_roster_empty() {
    let server = setup();

    let response = server.get("/api/patients").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["patients"], json!([]));
}

#[tokio::test]
async fn test_roster_projection_hides_sensitive_fields() {
    let server = setup();
    register_patient(&server, &full_patient()).await;

    let response = server.get("/api/patients").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    let patients = body["patients"].as_array().expect("patients not an array");
    assert_eq!(patients.len(), 1);

    let entry = &patients[0];
    assert_eq!(entry["surname"], "Mensah");
    assert_eq!(entry["otherNames"], "Ama");
    assert_eq!(entry["gender"], "F");
    assert_eq!(entry["phoneNumber"], "0551234567");
    // Projection must not leak the full record
    assert!(entry.get("residentialAddress").is_none());
    assert!(entry.get("emergencyContact").is_none());
}

#[tokio::test]
async fn test_patient_detail_has_full_record() {
    let server = setup();
    let id = register_patient(&server, &full_patient()).await;

    let response = server.get(&format!("/api/patients/{}", id)).await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["surname"], "Mensah");
    assert_eq!(body["residentialAddress"], "12 Osu Lane, Accra");
    assert_eq!(body["emergencyContact"]["name"], "Kofi Mensah");
    assert_eq!(body["encounters"], json!([]));
}

#[tokio::test]
async fn test_patient_detail_unknown_id_is_404() {
    let server = setup();

    // Well-formed identifier that was never issued
    let response = server.get("/api/patients/000000000000000000000000").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not-found");
}

#[tokio::test]
async fn test_patient_detail_malformed_id_is_400() {
    let server = setup();

    let response = server.get("/api/patients/not-an-id-format").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid-id");
}

#[tokio::test]
async fn test_start_encounter() {
    let server = setup();
    let patient_id = register_patient(&server, &full_patient()).await;

    let response = server
        .post("/api/encounters")
        .json(&json!({
            "patientId": patient_id,
            "encounterType": "OPD"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["message"], "Encounter started successfully");
    assert!(body["encounterId"].is_string());
}

#[tokio::test]
async fn test_start_encounter_missing_patient_id_rejected() {
    let server = setup();

    let response = server
        .post("/api/encounters")
        .json(&json!({"encounterType": "OPD"}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_start_encounter_dangling_reference_accepted() {
    let server = setup();

    // References are weak; the patient need not exist
    let response = server
        .post("/api/encounters")
        .json(&json!({"patientId": "0123456789abcdef01234567"}))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_submit_vitals() {
    let server = setup();
    let patient_id = register_patient(&server, &full_patient()).await;
    let encounter_id = start_encounter(
        &server,
        &json!({"patientId": patient_id, "encounterType": "OPD"}),
    )
    .await;

    let response = server
        .post("/api/vitals")
        .json(&json!({
            "encounterId": encounter_id,
            "bloodPressure": "120/80",
            "temperature": 36.6,
            "pulse": 72,
            "spO2": 98
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["message"], "Vitals submitted successfully");
}

#[tokio::test]
async fn test_submit_vitals_missing_encounter_id_rejected() {
    let server = setup();

    let response = server
        .post("/api/vitals")
        .json(&json!({"temperature": 36.6}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_full_intake_flow() {
    let server = setup();

    let patient_id = register_patient(&server, &full_patient()).await;
    let encounter_id = start_encounter(
        &server,
        &json!({"patientId": patient_id, "encounterType": "OPD"}),
    )
    .await;

    let response = server
        .post("/api/vitals")
        .json(&json!({
            "encounterId": encounter_id,
            "bloodPressure": "120/80",
            "temperature": 36.6,
            "pulse": 72,
            "spO2": 98
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = server.get(&format!("/api/patients/{}", patient_id)).await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["surname"], "Mensah");

    let encounters = body["encounters"].as_array().expect("encounters missing");
    assert_eq!(encounters.len(), 1);
    assert_eq!(encounters[0]["id"], encounter_id.as_str());
    assert_eq!(encounters[0]["encounterType"], "OPD");
    assert!(encounters[0]["dateAndTime"].is_string());

    let vitals = encounters[0]["vitals"].as_array().expect("vitals missing");
    assert_eq!(vitals.len(), 1);
    assert_eq!(vitals[0]["bloodPressure"], "120/80");
    assert_eq!(vitals[0]["temperature"], 36.6);
    assert_eq!(vitals[0]["pulse"], 72.0);
    assert_eq!(vitals[0]["spO2"], 98.0);
}

#[tokio::test]
async fn test_encounter_without_vitals_in_detail() {
    let server = setup();

    let patient_id = register_patient(&server, &full_patient()).await;
    start_encounter(&server, &json!({"patientId": patient_id})).await;

    let response = server.get(&format!("/api/patients/{}", patient_id)).await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    let encounters = body["encounters"].as_array().expect("encounters missing");
    assert_eq!(encounters.len(), 1);
    assert_eq!(encounters[0]["vitals"], json!([]));
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = setup();

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "sqlite");

    server.get("/_liveness").await.assert_status(StatusCode::OK);

    let response = server.get("/_readiness").await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}
