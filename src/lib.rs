// ABOUTME: Main library entry point for the FitTrack access layer
// ABOUTME: Admin authorization gate, request validation and hosted backend capabilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack
//!
//! Server-side access layer of the FitTrack fitness tracker. It answers two
//! questions for every incoming request:
//!
//! - **Is the caller an admin?** [`middleware::AdminGate`] resolves the
//!   caller's identity through the hosted backend, reads the role stored on
//!   their profile and reports an advisory [`middleware::AdminCheck`].
//! - **Is the body well formed?** The [`validation`] functions turn untyped
//!   JSON into normalized DTOs, or report every violated field at once.
//!
//! ## Architecture
//!
//! - **backend**: Narrow capabilities consumed from the hosted backend
//! - **middleware**: The admin authorization gate
//! - **validation**: Pure request validators
//! - **config**: Environment-driven backend configuration
//! - **logging**: Structured logging setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fittrack::backend::{RestBackend, SessionHandle};
//! use fittrack::config::BackendConfig;
//! use fittrack::errors::AppResult;
//! use fittrack::middleware::AdminGate;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = BackendConfig::from_env()?;
//!     let gate = AdminGate::from_backend(Arc::new(RestBackend::new(&config)?));
//!
//!     let check = gate.verify(&SessionHandle::new("access-token")).await;
//!     println!("admin: {}", check.is_admin);
//!     Ok(())
//! }
//! ```

/// Capabilities consumed from the hosted backend
pub mod backend;

/// Environment-driven configuration
pub mod config;

/// Application constants, re-exported from `fittrack-core`
pub mod constants;

/// Error types, re-exported from `fittrack-core`
pub mod errors;

/// Structured logging setup and event helpers
pub mod logging;

/// Request guards
pub mod middleware;

/// Domain models, re-exported from `fittrack-core`
pub mod models;

/// Request body validation
pub mod validation;
