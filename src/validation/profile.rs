// ABOUTME: Validation rules for profile updates (display name, weight, height)
// ABOUTME: Trims the name and bounds both physical measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use serde_json::Value;

use super::fields::{Fields, Range};
use crate::constants::limits::{HEIGHT_MAX_CM, NAME_MAX_LENGTH, WEIGHT_MAX_KG};
use crate::errors::ValidationFailure;
use crate::models::ProfileUpdate;

/// Validate a profile update body `{name, weight, height}`
///
/// - `name`: string, 1 to 100 characters after trimming; the trimmed value is kept
/// - `weight`: number in `(0, 500]`
/// - `height`: number in `(0, 300]`
///
/// # Errors
///
/// Returns every violated field with its reason
pub fn validate_profile_update(input: &Value) -> Result<ProfileUpdate, ValidationFailure> {
    let mut fields = Fields::of(input)?;

    let name = fields.required_text("name", NAME_MAX_LENGTH);
    let weight = fields.required_number("weight", Range::positive(WEIGHT_MAX_KG));
    let height = fields.required_number("height", Range::positive(HEIGHT_MAX_CM));

    fields.finish(|| {
        Some(ProfileUpdate {
            name: name?,
            weight: weight?,
            height: height?,
        })
    })
}
