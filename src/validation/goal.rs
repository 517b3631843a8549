// ABOUTME: Validation rules for goal creation payloads
// ABOUTME: Defaults status to active and current value to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use serde_json::Value;

use super::fields::{Fields, Range};
use crate::constants::limits::{GOAL_VALUE_MAX, NAME_MAX_LENGTH, TEXT_MAX_LENGTH, UNIT_MAX_LENGTH};
use crate::errors::ValidationFailure;
use crate::models::{CreateGoal, GoalStatus};

/// Validate a goal creation body
///
/// `title` and `unit` are trimmed and required, `targetValue` must be
/// positive, `currentValue` defaults to 0, `targetDate` is `YYYY-MM-DD`, and
/// `status` defaults to `active`.
///
/// # Errors
///
/// Returns every violated field with its reason
pub fn validate_create_goal(input: &Value) -> Result<CreateGoal, ValidationFailure> {
    let mut fields = Fields::of(input)?;
    let allowed_statuses = GoalStatus::ALL.map(GoalStatus::as_str);

    let title = fields.required_text("title", NAME_MAX_LENGTH);
    let description = fields.optional_text("description", TEXT_MAX_LENGTH);
    let target_value = fields.required_number("targetValue", Range::positive(GOAL_VALUE_MAX));
    let current_value =
        fields.optional_number("currentValue", Range::non_negative(GOAL_VALUE_MAX));
    let unit = fields.required_text("unit", UNIT_MAX_LENGTH);
    let target_date = fields.required_date("targetDate");
    let status = fields.optional_choice::<GoalStatus>("status", &allowed_statuses);

    fields.finish(|| {
        Some(CreateGoal {
            title: title?,
            description: description?,
            target_value: target_value?,
            current_value: current_value?.unwrap_or(0.0),
            unit: unit?,
            target_date: target_date?,
            status: status?.unwrap_or_default(),
        })
    })
}
