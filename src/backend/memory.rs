// ABOUTME: In-memory substitute for the hosted backend capabilities
// ABOUTME: Map-backed sessions and profile roles with injectable failures and call counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{BackendError, IdentityResolver, ProfileRoleStore, SessionHandle};
use crate::models::{Identity, Role};

/// Map-backed identity resolver and profile store
///
/// Sessions and roles can be changed after construction; failures are fixed
/// at construction time through the builder methods.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    sessions: DashMap<String, Identity>,
    roles: DashMap<String, Role>,
    identity_failure: Option<BackendError>,
    profile_failure: Option<BackendError>,
    resolve_calls: AtomicUsize,
    lookup_calls: AtomicUsize,
}

impl InMemoryBackend {
    /// Create an empty backend: every handle is unauthenticated
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session token for `identity`
    #[must_use]
    pub fn with_session(self, token: impl Into<String>, identity: Identity) -> Self {
        self.sessions.insert(token.into(), identity);
        self
    }

    /// Register a profile row for `user_id`
    #[must_use]
    pub fn with_profile(self, user_id: impl Into<String>, role: Role) -> Self {
        self.roles.insert(user_id.into(), role);
        self
    }

    /// Make every identity resolution fail with `error`
    #[must_use]
    pub fn failing_identity(mut self, error: BackendError) -> Self {
        self.identity_failure = Some(error);
        self
    }

    /// Make every role lookup fail with `error`
    #[must_use]
    pub fn failing_profiles(mut self, error: BackendError) -> Self {
        self.profile_failure = Some(error);
        self
    }

    /// Insert or replace the role on a profile
    pub fn set_role(&self, user_id: impl Into<String>, role: Role) {
        self.roles.insert(user_id.into(), role);
    }

    /// Delete a profile row
    pub fn remove_profile(&self, user_id: &str) {
        self.roles.remove(user_id);
    }

    /// Number of identity resolutions performed so far
    #[must_use]
    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    /// Number of role lookups performed so far
    #[must_use]
    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityResolver for InMemoryBackend {
    async fn resolve(&self, handle: &SessionHandle) -> Result<Option<Identity>, BackendError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.identity_failure {
            return Err(error.clone());
        }
        Ok(self
            .sessions
            .get(handle.expose())
            .map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl ProfileRoleStore for InMemoryBackend {
    async fn find_profile_role(&self, user_id: &str) -> Result<Option<Role>, BackendError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.profile_failure {
            return Err(error.clone());
        }
        Ok(self.roles.get(user_id).map(|entry| *entry.value()))
    }
}
