// ABOUTME: Central admin authorization gate for operations requiring admin privileges
// ABOUTME: Resolves the caller, looks up the profile role and returns an advisory result value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Admin Authorization Gate
//!
//! Answers "is the current caller an admin?" for a single request. Every call
//! re-resolves the identity and re-reads the role: nothing is cached between
//! calls, so a role change is visible on the next request.
//!
//! The check never fails: every outcome, including backend failures, is
//! reported in the returned [`AdminCheck`]. Handlers that prefer early
//! return can use [`AdminCheck::into_result`] or [`AdminGate::require_admin`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use fittrack::backend::SessionHandle;
//! use fittrack::errors::AppResult;
//! use fittrack::middleware::admin_guard::AdminGate;
//!
//! async fn admin_handler(gate: &AdminGate, token: &str) -> AppResult<String> {
//!     let user_id = gate.require_admin(&SessionHandle::new(token)).await?;
//!     Ok(format!("Welcome admin: {user_id}"))
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::backend::{BackendError, IdentityResolver, ProfileRoleStore, SessionHandle};
use crate::constants::authorization;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;

/// Reason an admin check did not grant access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorizationFailure {
    /// No identity could be resolved from the handle
    #[serde(rename = "unauthorized")]
    Unauthorized,
    /// Identity resolved but no profile row exists
    #[serde(rename = "profile not found")]
    ProfileNotFound,
    /// Profile exists but its role is not admin
    #[serde(rename = "forbidden")]
    Forbidden,
    /// Unexpected failure while checking (transport error, malformed response)
    #[serde(rename = "authorization check failed")]
    CheckFailed,
}

impl AuthorizationFailure {
    /// Message carried in the result's `error` field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => authorization::UNAUTHORIZED,
            Self::ProfileNotFound => authorization::PROFILE_NOT_FOUND,
            Self::Forbidden => authorization::FORBIDDEN,
            Self::CheckFailed => authorization::CHECK_FAILED,
        }
    }

    /// Error code used when the failure is turned into an `AppError`
    #[must_use]
    pub const fn error_code(self) -> ErrorCode {
        match self {
            Self::Unauthorized => ErrorCode::AuthRequired,
            Self::ProfileNotFound => ErrorCode::ResourceNotFound,
            Self::Forbidden => ErrorCode::PermissionDenied,
            Self::CheckFailed => ErrorCode::ExternalServiceError,
        }
    }
}

impl fmt::Display for AuthorizationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an admin check
///
/// Serializes as `{"isAdmin": bool, "userId"?: string, "error"?: string}`.
/// `user_id` is set whenever the identity was resolved, so callers can audit
/// denials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCheck {
    /// Whether the caller holds the admin role
    pub is_admin: bool,
    /// Resolved caller id, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Why access was not granted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<AuthorizationFailure>,
}

impl AdminCheck {
    /// Access granted to `user_id`
    #[must_use]
    pub const fn granted(user_id: String) -> Self {
        Self {
            is_admin: true,
            user_id: Some(user_id),
            error: None,
        }
    }

    /// Access denied for `reason`
    #[must_use]
    pub const fn denied(reason: AuthorizationFailure, user_id: Option<String>) -> Self {
        Self {
            is_admin: false,
            user_id,
            error: Some(reason),
        }
    }

    /// Convert the advisory result into a `Result` for early return
    ///
    /// # Errors
    ///
    /// Returns an `AppError` whose code reflects the failure: 401 for
    /// unauthorized, 404 for a missing profile, 403 for a non-admin role and
    /// 502 for a failed check. The user id is attached when known.
    pub fn into_result(self) -> AppResult<String> {
        match (self.is_admin, self.user_id, self.error) {
            (true, Some(user_id), _) => Ok(user_id),
            (_, user_id, reason) => {
                let reason = reason.unwrap_or(AuthorizationFailure::CheckFailed);
                let error = AppError::new(reason.error_code(), reason.as_str());
                Err(match user_id {
                    Some(user_id) => error.with_user_id(user_id),
                    None => error,
                })
            }
        }
    }
}

/// Check whether the caller behind `handle` holds the admin role
///
/// Performs at most two sequential lookups: identity, then role. Refusals
/// map to `unauthorized`, `profile not found` or `forbidden`. Transport and
/// decoding failures map to `authorization check failed`, carrying the user
/// id when the identity had already been resolved.
pub async fn verify_admin_role(
    identities: &dyn IdentityResolver,
    profiles: &dyn ProfileRoleStore,
    handle: &SessionHandle,
) -> AdminCheck {
    let check = match check_admin_role(identities, profiles, handle).await {
        Ok(check) => check,
        Err((user_id, error)) => {
            warn!(
                error = %error,
                user.id = user_id.as_deref().unwrap_or("unknown"),
                "admin authorization check failed"
            );
            AdminCheck::denied(AuthorizationFailure::CheckFailed, user_id)
        }
    };

    AppLogger::log_authorization_decision(
        check.user_id.as_deref(),
        check.is_admin,
        check.error.map(AuthorizationFailure::as_str),
    );
    check
}

/// Unexpected failure, with the caller's id when it was already resolved
type CheckError = (Option<String>, BackendError);

async fn check_admin_role(
    identities: &dyn IdentityResolver,
    profiles: &dyn ProfileRoleStore,
    handle: &SessionHandle,
) -> Result<AdminCheck, CheckError> {
    let identity = match identities.resolve(handle).await {
        Ok(Some(identity)) => identity,
        Ok(None) => {
            return Ok(AdminCheck::denied(AuthorizationFailure::Unauthorized, None));
        }
        Err(error) if !error.is_unexpected() => {
            debug!(error = %error, "identity resolution refused");
            return Ok(AdminCheck::denied(AuthorizationFailure::Unauthorized, None));
        }
        Err(error) => return Err((None, error)),
    };

    let role = match profiles.find_profile_role(&identity.id).await {
        Ok(Some(role)) => role,
        Ok(None) => {
            return Ok(AdminCheck::denied(
                AuthorizationFailure::ProfileNotFound,
                Some(identity.id),
            ));
        }
        Err(error) if !error.is_unexpected() => {
            debug!(error = %error, user.id = %identity.id, "profile lookup refused");
            return Ok(AdminCheck::denied(
                AuthorizationFailure::ProfileNotFound,
                Some(identity.id),
            ));
        }
        Err(error) => return Err((Some(identity.id), error)),
    };

    if !role.is_admin() {
        return Ok(AdminCheck::denied(
            AuthorizationFailure::Forbidden,
            Some(identity.id),
        ));
    }

    Ok(AdminCheck::granted(identity.id))
}

/// Shareable admin gate bound to a pair of backend capabilities
#[derive(Clone)]
pub struct AdminGate {
    identities: Arc<dyn IdentityResolver>,
    profiles: Arc<dyn ProfileRoleStore>,
}

impl AdminGate {
    /// Create a gate over separate capabilities
    #[must_use]
    pub fn new(
        identities: Arc<dyn IdentityResolver>,
        profiles: Arc<dyn ProfileRoleStore>,
    ) -> Self {
        Self {
            identities,
            profiles,
        }
    }

    /// Create a gate over a backend providing both capabilities
    #[must_use]
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: IdentityResolver + ProfileRoleStore + 'static,
    {
        Self {
            identities: backend.clone(),
            profiles: backend,
        }
    }

    /// Check whether the caller behind `handle` holds the admin role
    pub async fn verify(&self, handle: &SessionHandle) -> AdminCheck {
        verify_admin_role(self.identities.as_ref(), self.profiles.as_ref(), handle).await
    }

    /// Require admin privileges, returning the caller's id
    ///
    /// # Errors
    ///
    /// Returns an `AppError` describing why access was not granted
    pub async fn require_admin(&self, handle: &SessionHandle) -> AppResult<String> {
        self.verify(handle).await.into_result()
    }
}

impl fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminGate").finish_non_exhaustive()
    }
}
