use super::*;

/// Expected: doctor creates, reads, updates and deletes a medication
#[tokio::test]
async fn doctor_manages_medications() {
    let app = TestApp::new().await;
    let (_, doctor) = app.token_for("doctor").await;
    let (_, nurse) = app.token_for("nurse").await;

    let (status, created) = app
        .send(
            Method::POST,
            "/api/medications",
            Some(&doctor),
            Some(json!({ "name": "Metformin", "dosage": "850 mg", "frequency": "twice daily" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/medications/{}", id),
            Some(&doctor),
            Some(json!({ "dosage": "1000 mg" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["dosage"], "1000 mg");
    assert_eq!(updated["frequency"], "twice daily");

    let (status, fetched) = app
        .send(Method::GET, &format!("/api/medications/{}", id), Some(&nurse), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Metformin");

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/medications/{}", id),
            Some(&nurse),
            Some(json!({ "dosage": "500 mg" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/medications/{}", id),
            Some(&doctor),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .send(Method::GET, &format!("/api/medications/{}", id), Some(&nurse), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
