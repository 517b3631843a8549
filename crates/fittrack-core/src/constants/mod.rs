// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field limits, role names, backend paths and authorization messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Role values as stored in the `profiles.role` column
pub mod roles {
    /// The only privileged role
    pub const ADMIN: &str = "admin";
    /// Default role for every registered user
    pub const USER: &str = "user";
}

/// Result messages produced by the admin authorization check
pub mod authorization {
    /// No identity could be resolved from the handle
    pub const UNAUTHORIZED: &str = "unauthorized";
    /// Identity resolved but no profile row exists
    pub const PROFILE_NOT_FOUND: &str = "profile not found";
    /// Profile exists but its role is not admin
    pub const FORBIDDEN: &str = "forbidden";
    /// Any unexpected failure while checking
    pub const CHECK_FAILED: &str = "authorization check failed";
}

/// Bounds for user-supplied fields
pub mod limits {
    /// Maximum length of display names, workout names, exercise names and goal titles
    pub const NAME_MAX_LENGTH: usize = 100;
    /// Maximum length of free-text descriptions and notes
    pub const TEXT_MAX_LENGTH: usize = 500;
    /// Maximum length of a goal unit label
    pub const UNIT_MAX_LENGTH: usize = 20;

    /// Upper bound for body weight in kilograms
    pub const WEIGHT_MAX_KG: f64 = 500.0;
    /// Upper bound for body height in centimeters
    pub const HEIGHT_MAX_CM: f64 = 300.0;

    /// Upper bound for a workout's duration (one day)
    pub const WORKOUT_DURATION_MAX_MINUTES: i64 = 1_440;
    /// Upper bound for calories burned in a single workout
    pub const CALORIES_MAX: i64 = 10_000;

    /// Upper bound for goal target and progress values
    pub const GOAL_VALUE_MAX: f64 = 1_000_000.0;

    /// Upper bound for sets and reps
    pub const EXERCISE_COUNT_MAX: i64 = 1_000;
    /// Upper bound for lifted weight in kilograms
    pub const EXERCISE_WEIGHT_MAX_KG: f64 = 1_000.0;
    /// Upper bound for covered distance in kilometers
    pub const EXERCISE_DISTANCE_MAX_KM: f64 = 1_000.0;
    /// Upper bound for an exercise's duration (one day)
    pub const EXERCISE_DURATION_MAX_SECONDS: i64 = 86_400;
}

/// Hosted backend REST surface
pub mod backend {
    /// Path of the "current user" endpoint of the auth service
    pub const AUTH_USER_PATH: &str = "auth/v1/user";
    /// Path prefix of the row-level REST interface
    pub const REST_PATH: &str = "rest/v1";
    /// Table holding profiles and roles
    pub const PROFILES_TABLE: &str = "profiles";
    /// Header carrying the project API key
    pub const API_KEY_HEADER: &str = "apikey";
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    /// Service name used in error messages and logs
    pub const SERVICE_NAME: &str = "backend";
}

/// Environment variable names
pub mod env_config {
    /// Base URL of the hosted backend
    pub const BACKEND_URL: &str = "FITTRACK_BACKEND_URL";
    /// Project API key of the hosted backend; must be allowed to read `profiles.role`
    pub const BACKEND_KEY: &str = "FITTRACK_BACKEND_KEY";
    /// Request timeout override, in seconds
    pub const BACKEND_TIMEOUT_SECS: &str = "FITTRACK_BACKEND_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service names for structured logging
pub mod service_names {
    /// Default service name
    pub const FITTRACK: &str = "fittrack";
}
