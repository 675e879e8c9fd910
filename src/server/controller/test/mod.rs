use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use uuid::Uuid;

use crate::server::{
    cache::Cache, model::user::User, router, service::auth::token::TokenService,
    state::AppState,
};

mod alert;
mod computer_diagnosis;
mod doctor;
mod medication;
mod monitoring_device;
mod phone;
mod role;
mod user;

const SECRET: &str = "test-secret";

struct TestApp {
    // Keeps the in-memory database alive for the router's pool clone
    _context: TestContext,
    db: DatabaseConnection,
    router: Router,
    tokens: TokenService,
}

impl TestApp {
    async fn new() -> Self {
        let mut context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = context.database().await.unwrap().clone();
        let tokens = TokenService::new(SECRET, 1);
        let router = router::build(AppState::new(db.clone(), Cache::disabled(), tokens.clone()));

        Self {
            _context: context,
            db,
            router,
            tokens,
        }
    }

    /// Creates a user with the named role and returns a bearer token for them.
    async fn token_for(&self, role_name: &str) -> (User, String) {
        let (role, user) = factory::helpers::create_user_with_role(&self.db, role_name)
            .await
            .unwrap();
        let user = User::from_entity(user, Some(role));
        let issued = self.tokens.issue(&user).unwrap();

        (user, issued.token)
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }
}
