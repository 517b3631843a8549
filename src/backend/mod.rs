// ABOUTME: Narrow capabilities consumed from the hosted backend-as-a-service
// ABOUTME: Identity resolution and profile-role lookup, with REST and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Backend Capabilities
//!
//! The authorization gate depends on two capabilities of the hosted backend
//! rather than on a concrete client:
//!
//! - [`IdentityResolver`]: session handle to caller identity
//! - [`ProfileRoleStore`]: user id to profile role (at most one row)
//!
//! [`RestBackend`] talks to the hosted REST surface; [`InMemoryBackend`] is a
//! map-backed substitute for tests and offline use.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::constants::backend::SERVICE_NAME;
use crate::errors::{AppError, ErrorCode};
use crate::models::{Identity, Role};

/// Map-backed implementation for tests and offline use
pub mod memory;
/// `reqwest` implementation against the hosted REST surface
pub mod rest;

pub use memory::InMemoryBackend;
pub use rest::RestBackend;

/// Opaque session handle presented by a caller (an access token)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionHandle(String);

impl SessionHandle {
    /// Wrap an access token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token, for building the outgoing request
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the token is empty or whitespace only
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionHandle(<redacted>)")
    }
}

impl From<&str> for SessionHandle {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for SessionHandle {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Failure reported by a backend capability
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The backend answered and refused the request
    #[error("backend rejected the request with status {status}: {message}")]
    Rejected {
        /// HTTP status returned by the backend
        status: u16,
        /// Body or reason returned by the backend
        message: String,
    },
    /// The backend could not be reached or the exchange was interrupted
    #[error("backend transport failure: {0}")]
    Transport(String),
    /// The backend answered with something that could not be understood
    #[error("malformed backend response: {0}")]
    Malformed(String),
}

impl BackendError {
    /// Create a rejection
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Whether this is an unexpected failure rather than a refusal
    #[must_use]
    pub const fn is_unexpected(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Malformed(_))
    }
}

impl From<BackendError> for AppError {
    fn from(error: BackendError) -> Self {
        let code = match error {
            BackendError::Transport(_) => ErrorCode::ExternalServiceUnavailable,
            BackendError::Rejected { .. } | BackendError::Malformed(_) => {
                ErrorCode::ExternalServiceError
            }
        };
        Self::new(code, format!("{SERVICE_NAME}: {error}")).with_source(error)
    }
}

/// Resolves a session handle to the caller's identity
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve the identity behind `handle`
    ///
    /// Returns `Ok(None)` when the handle carries no valid session.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the backend refuses the request, cannot
    /// be reached, or answers with an undecodable body
    async fn resolve(&self, handle: &SessionHandle) -> Result<Option<Identity>, BackendError>;
}

/// Looks up the role stored on a user's profile
#[async_trait]
pub trait ProfileRoleStore: Send + Sync {
    /// Find the role of the profile keyed by `user_id`
    ///
    /// Returns `Ok(None)` when no profile row exists.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the lookup is refused (including more
    /// than one matching row), cannot be performed, or returns an
    /// undecodable body
    async fn find_profile_role(&self, user_id: &str) -> Result<Option<Role>, BackendError>;
}
