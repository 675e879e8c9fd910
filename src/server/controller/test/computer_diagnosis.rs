use super::*;

/// Expected: doctor records a diagnosis for a reading and revises its confidence
#[tokio::test]
async fn doctor_manages_diagnoses() {
    let app = TestApp::new().await;
    let (_, doctor) = app.token_for("doctor").await;
    let (patient, _, reading) = factory::helpers::create_reading_with_dependencies(&app.db)
        .await
        .unwrap();

    let (status, created) = app
        .send(
            Method::POST,
            "/api/computer-diagnoses",
            Some(&doctor),
            Some(json!({
                "patient_id": patient.id,
                "biometric_id": reading.id,
                "diagnosis": "Sinus tachycardia",
                "confidence": 0.82,
                "model_version": "ecg-2.1"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/computer-diagnoses/{}", id),
            Some(&doctor),
            Some(json!({ "confidence": 0.9 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["confidence"], 0.9);
    assert_eq!(updated["diagnosis"], "Sinus tachycardia");

    let (status, all) = app
        .send(Method::GET, "/api/computer-diagnoses", Some(&doctor), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/computer-diagnoses/{}", id),
            Some(&doctor),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

/// Expected: 400 when confidence falls outside 0..=1, on create and on update
#[tokio::test]
async fn rejects_confidence_out_of_range() {
    let app = TestApp::new().await;
    let (_, doctor) = app.token_for("doctor").await;
    let patient = factory::patient::create_patient(&app.db).await.unwrap();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/computer-diagnoses",
            Some(&doctor),
            Some(json!({
                "patient_id": patient.id,
                "diagnosis": "Atrial fibrillation",
                "confidence": 1.4
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("confidence"));

    let (status, created) = app
        .send(
            Method::POST,
            "/api/computer-diagnoses",
            Some(&doctor),
            Some(json!({
                "patient_id": patient.id,
                "diagnosis": "Atrial fibrillation",
                "confidence": 1.0
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/computer-diagnoses/{}", id),
            Some(&doctor),
            Some(json!({ "confidence": -0.1 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Expected: 400 for an unknown patient or reading
#[tokio::test]
async fn rejects_unknown_references() {
    let app = TestApp::new().await;
    let (_, doctor) = app.token_for("doctor").await;
    let patient = factory::patient::create_patient(&app.db).await.unwrap();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/computer-diagnoses",
            Some(&doctor),
            Some(json!({ "patient_id": Uuid::new_v4(), "diagnosis": "Bradycardia" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("patient"));

    let (status, body) = app
        .send(
            Method::POST,
            "/api/computer-diagnoses",
            Some(&doctor),
            Some(json!({
                "patient_id": patient.id,
                "biometric_id": Uuid::new_v4(),
                "diagnosis": "Bradycardia"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("biometric"));
}
