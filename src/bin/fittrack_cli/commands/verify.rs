// ABOUTME: verify-admin command for fittrack-cli
// ABOUTME: Runs the admin gate against the configured backend and prints the result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::sync::Arc;

use fittrack::{
    backend::{RestBackend, SessionHandle},
    config::BackendConfig,
    errors::AppResult,
    middleware::AdminGate,
};
use tracing::info;

/// Check the token and print `{"isAdmin": ..}`; returns whether admin access was granted
pub async fn verify_admin(token: &str) -> AppResult<bool> {
    let config = BackendConfig::from_env()?;
    let gate = AdminGate::from_backend(Arc::new(RestBackend::new(&config)?));

    let check = gate.verify(&SessionHandle::new(token)).await;
    info!(admin = check.is_admin, "Admin check complete");

    println!("{}", serde_json::to_string_pretty(&check)?);
    Ok(check.is_admin)
}
