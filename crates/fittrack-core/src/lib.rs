// ABOUTME: Core types and constants for the FitTrack access layer
// ABOUTME: Foundation crate with domain models, roles, error taxonomy and field limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack Core
//!
//! Foundation crate providing shared types for the FitTrack access layer.
//! It performs no I/O and is designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and per-field `ValidationFailure`
//! - **constants**: Field limits, role names, backend paths
//! - **models**: Identity, Profile, Workout, Exercise, Goal and their DTOs
//! - **permissions**: The `Role` enumeration

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;

/// Role enumeration used for authorization
pub mod permissions;
