// ABOUTME: Identity of an authenticated caller as resolved by the auth service
// ABOUTME: Read-only input to the authorization gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use serde::{Deserialize, Serialize};

/// Resolved representation of an authenticated caller
///
/// Produced by the identity resolver and never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque user identifier
    pub id: String,
    /// Email address, when the auth service exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Identity {
    /// Create an identity
    #[must_use]
    pub fn new(id: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: id.into(),
            email,
        }
    }
}
