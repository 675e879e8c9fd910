use super::*;

/// Expected: admins list and read users; password hashes never leave the server
#[tokio::test]
async fn admin_reads_users() {
    let app = TestApp::new().await;
    let (_, admin) = app.token_for("admin").await;
    let (nurse, _) = app.token_for("nurse").await;

    let (status, all) = app.send(Method::GET, "/api/users", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(2));

    let (status, fetched) = app
        .send(
            Method::GET,
            &format!("/api/users/{}", nurse.id),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["username"], nurse.username);
    assert!(fetched.get("password_hash").is_none());
    assert!(fetched.get("password").is_none());
}

/// Expected: 403 for clinical staff reading users, including their own record
#[tokio::test]
async fn clinical_staff_cannot_read_users() {
    let app = TestApp::new().await;
    let (nurse, nurse_token) = app.token_for("nurse").await;
    let (_, doctor_token) = app.token_for("doctor").await;

    for token in [&nurse_token, &doctor_token] {
        let (status, _) = app.send(Method::GET, "/api/users", Some(token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = app
            .send(
                Method::GET,
                &format!("/api/users/{}", nurse.id),
                Some(token),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
