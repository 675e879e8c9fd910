use super::*;

/// Expected: nurse registers a device, which defaults to active, then moves it to maintenance
#[tokio::test]
async fn nurse_manages_devices() {
    let app = TestApp::new().await;
    let (_, nurse) = app.token_for("nurse").await;
    let patient = factory::patient::create_patient(&app.db).await.unwrap();

    let (status, created) = app
        .send(
            Method::POST,
            "/api/monitoring-devices",
            Some(&nurse),
            Some(json!({
                "serial_number": "SN-0001",
                "model": "PulseOx 3",
                "patient_id": patient.id
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "active");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/monitoring-devices/{}", id),
            Some(&nurse),
            Some(json!({ "status": "maintenance" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "maintenance");
    assert_eq!(updated["model"], "PulseOx 3");

    let (status, fetched) = app
        .send(
            Method::GET,
            &format!("/api/monitoring-devices/{}", id),
            Some(&nurse),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["status"], "maintenance");

    let (status, all) = app
        .send(Method::GET, "/api/monitoring-devices", Some(&nurse), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/monitoring-devices/{}", id),
            Some(&nurse),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

/// Expected: 400 for an unknown patient and for an unknown status
#[tokio::test]
async fn rejects_invalid_devices() {
    let app = TestApp::new().await;
    let (_, nurse) = app.token_for("nurse").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/monitoring-devices",
            Some(&nurse),
            Some(json!({
                "serial_number": "SN-0002",
                "model": "PulseOx 3",
                "patient_id": Uuid::new_v4()
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("patient"));

    let (status, _) = app
        .send(
            Method::POST,
            "/api/monitoring-devices",
            Some(&nurse),
            Some(json!({
                "serial_number": "SN-0003",
                "model": "PulseOx 3",
                "status": "broken"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
