use super::*;

/// Expected: admins manage roles through the full create, read, update, delete cycle
#[tokio::test]
async fn admin_manages_roles() {
    let app = TestApp::new().await;
    let (_, token) = app.token_for("admin").await;

    let (status, created) = app
        .send(
            Method::POST,
            "/api/roles",
            Some(&token),
            Some(json!({ "name": "pharmacist", "description": "Dispensary staff" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = app
        .send(Method::GET, &format!("/api/roles/{}", id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "pharmacist");

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/roles/{}", id),
            Some(&token),
            Some(json!({ "description": "Pharmacy" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "pharmacist");
    assert_eq!(updated["description"], "Pharmacy");

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/roles/{}", id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .send(Method::GET, &format!("/api/roles/{}", id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send(Method::DELETE, &format!("/api/roles/{}", id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expected: 403 for a doctor on admin-only routes
#[tokio::test]
async fn doctor_cannot_manage_roles() {
    let app = TestApp::new().await;
    let (_, token) = app.token_for("doctor").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/roles",
            Some(&token),
            Some(json!({ "name": "intruder" })),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());

    let (status, _) = app.send(Method::GET, "/api/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

/// Expected: 409 for a duplicate role name
#[tokio::test]
async fn duplicate_role_is_conflict() {
    let app = TestApp::new().await;
    let (_, token) = app.token_for("admin").await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/roles",
            Some(&token),
            Some(json!({ "name": "admin" })),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

/// Expected: 409 when deleting a built-in role, which stays readable
#[tokio::test]
async fn built_in_role_cannot_be_deleted() {
    let app = TestApp::new().await;
    let (admin, token) = app.token_for("admin").await;

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/api/roles/{}", admin.role_id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("admin"));

    let (status, fetched) = app
        .send(
            Method::GET,
            &format!("/api/roles/{}", admin.role_id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "admin");
}

/// Expected: 403 for a nurse reading roles
#[tokio::test]
async fn nurse_cannot_read_roles() {
    let app = TestApp::new().await;
    let (nurse, token) = app.token_for("nurse").await;

    let (status, _) = app.send(Method::GET, "/api/roles", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(
            Method::GET,
            &format!("/api/roles/{}", nurse.role_id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
