// ABOUTME: Configuration management module for backend connection settings
// ABOUTME: Environment-only configuration passed explicitly into backend clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Configuration module
//!
//! - **Environment**: Backend connection settings from environment variables

/// Environment and backend configuration
pub mod environment;

pub use environment::{BackendConfig, Environment};
