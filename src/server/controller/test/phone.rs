use super::*;

/// Expected: doctor registers a patient's phone and changes its kind
#[tokio::test]
async fn doctor_manages_phones() {
    let app = TestApp::new().await;
    let (_, doctor) = app.token_for("doctor").await;
    let patient = factory::patient::create_patient(&app.db).await.unwrap();

    let (status, created) = app
        .send(
            Method::POST,
            "/api/phones",
            Some(&doctor),
            Some(json!({
                "number": "+34 600 000 001",
                "kind": "mobile",
                "patient_id": patient.id
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["kind"], "mobile");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/phones/{}", id),
            Some(&doctor),
            Some(json!({ "kind": "home" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["kind"], "home");
    assert_eq!(updated["number"], "+34 600 000 001");

    let (status, fetched) = app
        .send(Method::GET, &format!("/api/phones/{}", id), Some(&doctor), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["kind"], "home");
    assert_eq!(fetched["patient_id"], patient.id.to_string());

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/phones/{}", id), Some(&doctor), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .send(Method::GET, &format!("/api/phones/{}", id), Some(&doctor), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expected: 400 for an unknown owner, a missing owner and an unknown kind
#[tokio::test]
async fn rejects_invalid_phones() {
    let app = TestApp::new().await;
    let (_, doctor) = app.token_for("doctor").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/phones",
            Some(&doctor),
            Some(json!({
                "number": "+34 600 000 002",
                "kind": "work",
                "doctor_id": Uuid::new_v4()
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("doctor"));

    let (status, _) = app
        .send(
            Method::POST,
            "/api/phones",
            Some(&doctor),
            Some(json!({ "number": "+34 600 000 003", "kind": "work" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let patient = factory::patient::create_patient(&app.db).await.unwrap();
    let (status, _) = app
        .send(
            Method::POST,
            "/api/phones",
            Some(&doctor),
            Some(json!({
                "number": "+34 600 000 004",
                "kind": "pager",
                "patient_id": patient.id
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
