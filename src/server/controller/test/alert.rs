use super::*;

/// Expected: a nurse acknowledges an alert and is recorded as the acknowledger
#[tokio::test]
async fn nurse_acknowledges_alert() {
    let app = TestApp::new().await;
    let (nurse, token) = app.token_for("nurse").await;

    let patient = factory::create_patient(&app.db).await.unwrap();
    let alert = factory::create_alert(&app.db, patient.id).await.unwrap();

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/api/alerts/{}/acknowledge", alert.id),
            Some(&token),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["acknowledged"], true);
    assert_eq!(body["acknowledged_by"], nurse.id.to_string());
}

/// Expected: 201 for a reading posted by a nurse, then visible on the patient listing
#[tokio::test]
async fn nurse_records_biometric() {
    let app = TestApp::new().await;
    let (_, token) = app.token_for("nurse").await;

    let patient = factory::create_patient(&app.db).await.unwrap();

    let (status, created) = app
        .send(
            Method::POST,
            "/api/biometrics",
            Some(&token),
            Some(json!({
                "patient_id": patient.id,
                "heart_rate": 88,
                "oxygen_saturation": 95.5
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["heart_rate"], 88);

    let (status, readings) = app
        .send(
            Method::GET,
            &format!("/api/patients/{}/biometrics", patient.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(readings.as_array().map(Vec::len), Some(1));
}

/// Expected: 400 for an out-of-range vital
#[tokio::test]
async fn rejects_implausible_reading() {
    let app = TestApp::new().await;
    let (_, token) = app.token_for("doctor").await;

    let patient = factory::create_patient(&app.db).await.unwrap();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/biometrics",
            Some(&token),
            Some(json!({ "patient_id": patient.id, "oxygen_saturation": 140.0 })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("oxygen_saturation"));
}

/// Expected: 404 when acknowledging an unknown alert
#[tokio::test]
async fn acknowledge_unknown_alert_is_not_found() {
    let app = TestApp::new().await;
    let (_, token) = app.token_for("doctor").await;

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/alerts/{}/acknowledge", uuid::Uuid::new_v4()),
            Some(&token),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
