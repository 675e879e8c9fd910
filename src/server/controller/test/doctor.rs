use super::*;

fn doctor_body(dni: &str, user_id: Option<String>) -> Value {
    json!({
        "dni": dni,
        "first_name": "Marta",
        "last_name": "Ibarra",
        "specialty": "Cardiology",
        "license_number": "CL-4471",
        "email": null,
        "user_id": user_id
    })
}

/// Expected: admins create, update and delete doctors; nurses read them
#[tokio::test]
async fn admin_manages_doctors() {
    let app = TestApp::new().await;
    let (_, admin) = app.token_for("admin").await;
    let (_, nurse) = app.token_for("nurse").await;

    let (status, created) = app
        .send(
            Method::POST,
            "/api/doctors",
            Some(&admin),
            Some(doctor_body("D0000001", None)),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/doctors/{}", id),
            Some(&admin),
            Some(json!({ "specialty": "Internal medicine" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["specialty"], "Internal medicine");
    assert_eq!(updated["license_number"], "CL-4471");

    let (status, fetched) = app
        .send(Method::GET, &format!("/api/doctors/{}", id), Some(&nurse), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["dni"], "D0000001");

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/doctors/{}", id), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, all) = app.send(Method::GET, "/api/doctors", Some(&nurse), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(0));
}

/// Expected: 403 for a doctor and 400 for an unknown linked user
#[tokio::test]
async fn rejects_non_admin_and_unknown_user() {
    let app = TestApp::new().await;
    let (_, admin) = app.token_for("admin").await;
    let (_, doctor) = app.token_for("doctor").await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/doctors",
            Some(&doctor),
            Some(doctor_body("D0000002", None)),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send(
            Method::POST,
            "/api/doctors",
            Some(&admin),
            Some(doctor_body("D0000002", Some(Uuid::new_v4().to_string()))),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("user"));
}

/// Expected: the DNI of a deleted doctor can be registered again
#[tokio::test]
async fn deleted_doctor_releases_dni() {
    let app = TestApp::new().await;
    let (_, admin) = app.token_for("admin").await;

    let (_, created) = app
        .send(
            Method::POST,
            "/api/doctors",
            Some(&admin),
            Some(doctor_body("D0000003", None)),
        )
        .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .send(
            Method::POST,
            "/api/doctors",
            Some(&admin),
            Some(doctor_body("D0000003", None)),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    app.send(Method::DELETE, &format!("/api/doctors/{}", id), Some(&admin), None)
        .await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/doctors",
            Some(&admin),
            Some(doctor_body("D0000003", None)),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}
