//! Router harness backed by the in-memory store

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use jobboard_infrastructure::MemoryStore;
use jobboard_shared::config::AppConfig;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::{create_router, AppState};

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    pub fn with_config(customize: impl FnOnce(&mut AppConfig)) -> Self {
        let upload_dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.upload.dir = upload_dir.path().to_string_lossy().into_owned();
        customize(&mut config);

        let state = AppState::new(config, MemoryStore::new().repositories());
        Self {
            router: create_router(state.clone()),
            state,
            upload_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    /// Register an account and return its token and id.
    pub async fn register(&self, email: &str, role: &str) -> (String, i64) {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({
                    "email": email,
                    "password": "secret123",
                    "name": email.split('@').next().unwrap_or("user"),
                    "role": role,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
        token_and_id(&body)
    }

    pub async fn admin(&self) -> (String, i64) {
        self.state
            .services
            .auth
            .ensure_admin("admin@jobboard.test", "admin-pass", "Admin")
            .await
            .unwrap();
        let (status, body) = self
            .call(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": "admin@jobboard.test", "password": "admin-pass" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        token_and_id(&body)
    }

    pub async fn company(&self, token: &str, name: &str) -> i64 {
        let (status, body) = self
            .call(Method::POST, "/api/companies", Some(token), Some(json!({ "name": name })))
            .await;
        assert_eq!(status, StatusCode::CREATED, "company failed: {}", body);
        body["id"].as_i64().unwrap()
    }

    pub async fn job(&self, token: &str, company_id: i64, title: &str) -> i64 {
        let (status, body) = self
            .call(
                Method::POST,
                "/api/jobs",
                Some(token),
                Some(json!({
                    "title": title,
                    "description": "Build things",
                    "location": "Remote",
                    "companyId": company_id,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "job failed: {}", body);
        body["id"].as_i64().unwrap()
    }
}

fn token_and_id(body: &Value) -> (String, i64) {
    (
        body["token"].as_str().unwrap().to_string(),
        body["user"]["id"].as_i64().unwrap(),
    )
}
