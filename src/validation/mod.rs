// ABOUTME: Request validation for profile, workout, exercise and goal payloads
// ABOUTME: Pure functions from untyped JSON to normalized DTOs or a full list of violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Request Validation
//!
//! Every validator takes the raw JSON body of a request and returns either
//! the normalized DTO or a [`ValidationFailure`] listing every violated field.
//! Validators perform no I/O and hold no state, so they can be called
//! concurrently from any number of handlers.
//!
//! ```rust
//! use fittrack::validation::validate_profile_update;
//! use serde_json::json;
//!
//! let update = validate_profile_update(&json!({
//!     "name": "  Anna  ",
//!     "weight": 70,
//!     "height": 170
//! }))
//! .unwrap();
//! assert_eq!(update.name, "Anna");
//! ```

/// Typed field readers over JSON objects
pub mod fields;

mod exercise;
mod goal;
mod profile;
mod workout;

pub use exercise::validate_create_exercise;
pub use goal::validate_create_goal;
pub use profile::validate_profile_update;
pub use workout::validate_create_workout;

pub use crate::errors::{FieldViolation, ValidationFailure};
