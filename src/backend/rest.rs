// ABOUTME: REST client for the hosted backend's auth and row-level endpoints
// ABOUTME: Implements identity resolution and profile-role lookup over reqwest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{BackendError, IdentityResolver, ProfileRoleStore, SessionHandle};
use crate::config::BackendConfig;
use crate::constants::backend::{API_KEY_HEADER, AUTH_USER_PATH, PROFILES_TABLE, REST_PATH};
use crate::errors::{AppError, AppResult};
use crate::models::{Identity, Role};

/// Longest backend error body kept in a [`BackendError::Rejected`] message
const MAX_ERROR_BODY_CHARS: usize = 200;

/// One row of `select=role` on the profiles table
#[derive(Debug, Deserialize)]
struct RoleRow {
    role: Option<String>,
}

/// Client for the hosted backend
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Clone)]
pub struct RestBackend {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl RestBackend {
    /// Build a client from explicit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// URL of the "current user" endpoint
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Malformed`] if the URL cannot be joined
    pub fn user_url(&self) -> Result<Url, BackendError> {
        self.base_url
            .join(AUTH_USER_PATH)
            .map_err(|e| BackendError::Malformed(format!("invalid auth URL: {e}")))
    }

    /// URL selecting the role column of the profile keyed by `user_id`
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Malformed`] if the URL cannot be joined
    pub fn profile_role_url(&self, user_id: &str) -> Result<Url, BackendError> {
        let mut url = self
            .base_url
            .join(&format!("{REST_PATH}/{PROFILES_TABLE}"))
            .map_err(|e| BackendError::Malformed(format!("invalid profiles URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("select", "role")
            .append_pair("id", &format!("eq.{user_id}"));
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder, bearer: &str) -> RequestBuilder {
        request
            .header(API_KEY_HEADER, &self.api_key)
            .bearer_auth(bearer)
    }

    async fn send(request: RequestBuilder) -> Result<Response, BackendError> {
        request
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))
    }

    async fn body(response: Response) -> Result<Vec<u8>, BackendError> {
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| BackendError::Transport(e.to_string()))
    }

    async fn rejection(status: StatusCode, response: Response) -> BackendError {
        let text = response.text().await.unwrap_or_default();
        let message: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
        BackendError::rejected(status.as_u16(), message)
    }
}

#[async_trait]
impl IdentityResolver for RestBackend {
    async fn resolve(&self, handle: &SessionHandle) -> Result<Option<Identity>, BackendError> {
        if handle.is_blank() {
            return Ok(None);
        }

        let request = self.authorized(self.client.get(self.user_url()?), handle.expose());
        let response = Self::send(request).await?;
        let status = response.status();

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            debug!(status = status.as_u16(), "session rejected by auth service");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }

        let body = Self::body(response).await?;
        let identity: Identity = serde_json::from_slice(&body)
            .map_err(|e| BackendError::Malformed(format!("user payload: {e}")))?;
        if identity.id.is_empty() {
            return Ok(None);
        }
        Ok(Some(identity))
    }
}

#[async_trait]
impl ProfileRoleStore for RestBackend {
    async fn find_profile_role(&self, user_id: &str) -> Result<Option<Role>, BackendError> {
        let request = self.authorized(
            self.client.get(self.profile_role_url(user_id)?),
            &self.api_key,
        );
        let response = Self::send(request).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }

        let body = Self::body(response).await?;
        let rows: Vec<RoleRow> = serde_json::from_slice(&body)
            .map_err(|e| BackendError::Malformed(format!("profile rows: {e}")))?;

        match rows.as_slice() {
            [] => Ok(None),
            [row] => Ok(Some(
                row.role.as_deref().map_or(Role::User, Role::from_stored),
            )),
            _ => Err(BackendError::rejected(
                StatusCode::NOT_ACCEPTABLE.as_u16(),
                format!("expected at most one profile row, got {}", rows.len()),
            )),
        }
    }
}
