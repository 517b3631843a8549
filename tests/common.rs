// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, in-memory backend fixtures and a mock hosted backend over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fittrack`

use std::collections::HashMap;
use std::sync::{Arc, Once};

use axum::{
    extract::Query,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use fittrack::{
    backend::InMemoryBackend,
    config::BackendConfig,
    models::{Identity, Role},
};
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Session token of the admin fixture
pub const ADMIN_TOKEN: &str = "admin-token";
/// User id of the admin fixture
pub const ADMIN_ID: &str = "7d1c1c5e-0000-4000-8000-000000000001";
/// Session token of the regular user fixture
pub const USER_TOKEN: &str = "user-token";
/// User id of the regular user fixture
pub const USER_ID: &str = "7d1c1c5e-0000-4000-8000-000000000002";
/// Session token of a user whose profile row is missing
pub const ORPHAN_TOKEN: &str = "orphan-token";
/// User id of the orphan fixture
pub const ORPHAN_ID: &str = "7d1c1c5e-0000-4000-8000-000000000003";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// In-memory backend with an admin, a regular user and a user without a profile
pub fn seeded_backend() -> InMemoryBackend {
    init_test_logging();
    InMemoryBackend::new()
        .with_session(ADMIN_TOKEN, Identity::new(ADMIN_ID, Some("admin@fittrack.test".into())))
        .with_session(USER_TOKEN, Identity::new(USER_ID, Some("anna@fittrack.test".into())))
        .with_session(ORPHAN_TOKEN, Identity::new(ORPHAN_ID, None))
        .with_profile(ADMIN_ID, Role::Admin)
        .with_profile(USER_ID, Role::User)
}

/// Routes imitating the hosted backend's auth and profiles endpoints
///
/// `users` maps bearer tokens to the user payload returned by the auth
/// service (unknown tokens get 401). `rows` maps user ids to the JSON array
/// returned by the profiles table (unknown ids get `[]`).
pub fn mock_routes(users: &[(&str, Value)], rows: &[(&str, Value)]) -> Router {
    let users: Arc<HashMap<String, Value>> = Arc::new(
        users
            .iter()
            .map(|(token, user)| ((*token).to_owned(), user.clone()))
            .collect(),
    );
    let rows: Arc<HashMap<String, Value>> = Arc::new(
        rows.iter()
            .map(|(id, body)| ((*id).to_owned(), body.clone()))
            .collect(),
    );

    Router::new()
        .route(
            "/auth/v1/user",
            get(move |headers: HeaderMap| {
                let users = users.clone();
                async move {
                    let token = bearer(&headers);
                    match users.get(&token) {
                        Some(user) if has_api_key(&headers) => {
                            (StatusCode::OK, Json(user.clone())).into_response()
                        }
                        _ => unauthorized(),
                    }
                }
            }),
        )
        .route(
            "/rest/v1/profiles",
            get(
                move |headers: HeaderMap, Query(params): Query<HashMap<String, String>>| {
                    let rows = rows.clone();
                    async move {
                        if !has_api_key(&headers) {
                            return unauthorized();
                        }
                        let id = params
                            .get("id")
                            .and_then(|filter| filter.strip_prefix("eq."))
                            .unwrap_or_default();
                        Json(rows.get(id).cloned().unwrap_or_else(|| json!([]))).into_response()
                    }
                },
            ),
        )
}

fn bearer(headers: &HeaderMap) -> String {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_owned()
}

fn has_api_key(headers: &HeaderMap) -> bool {
    headers.get("apikey").is_some()
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "msg": "invalid JWT" })),
    )
        .into_response()
}

/// Serve `router` on an ephemeral local port and return a config pointing at it
pub async fn spawn_mock_backend(router: Router) -> BackendConfig {
    init_test_logging();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    BackendConfig::new(&format!("http://{addr}"), "service-role-key").unwrap()
}

/// Config pointing at a local port with nothing listening
pub async fn unreachable_backend() -> BackendConfig {
    init_test_logging();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    BackendConfig::new(&format!("http://{addr}"), "service-role-key").unwrap()
}
