// ABOUTME: Unit tests for backend configuration loaded from the environment
// ABOUTME: Required variables, timeout parsing, URL normalization and environment detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use fittrack::config::{BackendConfig, Environment};
use fittrack::errors::ErrorCode;
use serial_test::serial;

const VARS: [&str; 4] = [
    "FITTRACK_BACKEND_URL",
    "FITTRACK_BACKEND_KEY",
    "FITTRACK_BACKEND_TIMEOUT_SECS",
    "ENVIRONMENT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_env();
    env::set_var("FITTRACK_BACKEND_URL", "https://project.example.co");
    env::set_var("FITTRACK_BACKEND_KEY", "service-role-key");

    let config = BackendConfig::from_env().unwrap();
    assert_eq!(config.base_url.as_str(), "https://project.example.co/");
    assert_eq!(config.api_key, "service-role-key");
    assert_eq!(config.request_timeout, Duration::from_secs(10));
    assert_eq!(config.environment, Environment::Development);
    clear_env();
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("FITTRACK_BACKEND_URL", "https://project.example.co/");
    env::set_var("FITTRACK_BACKEND_KEY", "service-role-key");
    env::set_var("FITTRACK_BACKEND_TIMEOUT_SECS", " 3 ");
    env::set_var("ENVIRONMENT", "production");

    let config = BackendConfig::from_env().unwrap();
    assert_eq!(config.request_timeout, Duration::from_secs(3));
    assert!(config.environment.is_production());
    clear_env();
}

#[test]
#[serial]
fn test_missing_variables() {
    clear_env();
    let error = BackendConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert!(error.message.contains("FITTRACK_BACKEND_URL"));

    env::set_var("FITTRACK_BACKEND_URL", "https://project.example.co");
    let error = BackendConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert!(error.message.contains("FITTRACK_BACKEND_KEY"));
    clear_env();
}

#[test]
#[serial]
fn test_invalid_values() {
    clear_env();
    env::set_var("FITTRACK_BACKEND_URL", "https://project.example.co");
    env::set_var("FITTRACK_BACKEND_KEY", "key");

    env::set_var("FITTRACK_BACKEND_TIMEOUT_SECS", "soon");
    assert_eq!(
        BackendConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );

    env::set_var("FITTRACK_BACKEND_TIMEOUT_SECS", "0");
    assert_eq!(
        BackendConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );

    env::remove_var("FITTRACK_BACKEND_TIMEOUT_SECS");
    env::set_var("FITTRACK_BACKEND_URL", "not a url");
    assert_eq!(
        BackendConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    clear_env();
}

#[test]
fn test_explicit_config_with_timeout() {
    let config = BackendConfig::new("http://127.0.0.1:54321", "anon-key")
        .unwrap()
        .with_timeout(Duration::from_millis(250));
    assert_eq!(config.request_timeout, Duration::from_millis(250));
    assert!(config.validate().is_ok());
}
