// ABOUTME: Validation rules for workout creation payloads
// ABOUTME: Bounds duration and calories, checks workout type and calendar date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use serde_json::Value;

use super::fields::{Fields, Range};
use crate::constants::limits::{
    CALORIES_MAX, NAME_MAX_LENGTH, TEXT_MAX_LENGTH, WORKOUT_DURATION_MAX_MINUTES,
};
use crate::errors::ValidationFailure;
use crate::models::{CreateWorkout, WorkoutType};

/// Validate a workout creation body
///
/// - `name`: string, 1 to 100 characters after trimming
/// - `description`: optional string, at most 500 characters; empty is dropped
/// - `durationMinutes`: whole number in `(0, 1440]`
/// - `caloriesBurned`: optional whole number in `[0, 10000]`
/// - `workoutType`: one of `cardio`, `strength`, `flexibility`, `sports`, `other`
/// - `date`: `YYYY-MM-DD`
///
/// # Errors
///
/// Returns every violated field with its reason
pub fn validate_create_workout(input: &Value) -> Result<CreateWorkout, ValidationFailure> {
    let mut fields = Fields::of(input)?;
    let allowed_types = WorkoutType::ALL.map(WorkoutType::as_str);

    let name = fields.required_text("name", NAME_MAX_LENGTH);
    let description = fields.optional_text("description", TEXT_MAX_LENGTH);
    let duration_minutes = fields.required_count(
        "durationMinutes",
        Range::positive(WORKOUT_DURATION_MAX_MINUTES as f64),
    );
    let calories_burned =
        fields.optional_count("caloriesBurned", Range::non_negative(CALORIES_MAX as f64));
    let workout_type = fields.required_choice::<WorkoutType>("workoutType", &allowed_types);
    let date = fields.required_date("date");

    fields.finish(|| {
        Some(CreateWorkout {
            name: name?,
            description: description?,
            duration_minutes: duration_minutes?,
            calories_burned: calories_burned?,
            workout_type: workout_type?,
            date: date?,
        })
    })
}
