//! Helpers for driving the router in-process.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use roster::server::{model::app::AppState, router};
use roster_test_utils::prelude::*;
use serde_json::Value;
use tower::ServiceExt;

/// A router backed by a fresh in-memory database with every table created.
pub struct TestApp {
    pub test: TestSetup,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Result<Self, TestError> {
        let test = test_setup_with_all_tables!()?;
        let router = router::routes().with_state(test.state::<AppState>());

        Ok(Self { test, router })
    }

    /// Sends a request and returns the status with the decoded JSON body.
    ///
    /// An empty body decodes to [`Value::Null`].
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.raw(request.body(body).expect("request should build"))
            .await
    }

    pub async fn raw(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}
