// ABOUTME: Profile record holding the role and physical stats of a user
// ABOUTME: ProfileUpdate is the validated DTO accepted by the profile-update path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use serde::{Deserialize, Serialize};

use crate::permissions::Role;

/// Extended user record
///
/// `role` is authoritative for authorization; `name`, `weight` and `height`
/// are what the profile-update path writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Owning user (foreign key to the identity)
    #[serde(rename = "id")]
    pub user_id: String,
    /// Role, exactly one per profile
    #[serde(default)]
    pub role: Role,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Body height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Validated, normalized profile update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Display name, trimmed, 1 to 100 characters
    pub name: String,
    /// Body weight in kilograms, in `(0, 500]`
    pub weight: f64,
    /// Body height in centimeters, in `(0, 300]`
    pub height: f64,
}
