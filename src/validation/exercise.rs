// ABOUTME: Validation rules for exercise creation payloads
// ABOUTME: All measurements are optional but must be non-negative and bounded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use serde_json::Value;

use super::fields::{Fields, Range};
use crate::constants::limits::{
    EXERCISE_COUNT_MAX, EXERCISE_DISTANCE_MAX_KM, EXERCISE_DURATION_MAX_SECONDS,
    EXERCISE_WEIGHT_MAX_KG, NAME_MAX_LENGTH, TEXT_MAX_LENGTH,
};
use crate::errors::ValidationFailure;
use crate::models::CreateExercise;

/// Validate an exercise creation body
///
/// `workoutId` must be a UUID; `sets`, `reps` and `durationSeconds` are
/// optional whole numbers and `weightKg`, `distanceKm` optional numbers, all
/// non-negative.
///
/// # Errors
///
/// Returns every violated field with its reason
pub fn validate_create_exercise(input: &Value) -> Result<CreateExercise, ValidationFailure> {
    let mut fields = Fields::of(input)?;
    let counts = Range::non_negative(EXERCISE_COUNT_MAX as f64);

    let workout_id = fields.required_uuid("workoutId");
    let name = fields.required_text("name", NAME_MAX_LENGTH);
    let sets = fields.optional_count("sets", counts);
    let reps = fields.optional_count("reps", counts);
    let weight_kg = fields.optional_number("weightKg", Range::non_negative(EXERCISE_WEIGHT_MAX_KG));
    let distance_km =
        fields.optional_number("distanceKm", Range::non_negative(EXERCISE_DISTANCE_MAX_KM));
    let duration_seconds = fields.optional_count(
        "durationSeconds",
        Range::non_negative(EXERCISE_DURATION_MAX_SECONDS as f64),
    );
    let notes = fields.optional_text("notes", TEXT_MAX_LENGTH);

    fields.finish(|| {
        Some(CreateExercise {
            workout_id: workout_id?,
            name: name?,
            sets: sets?,
            reps: reps?,
            weight_kg: weight_kg?,
            distance_km: distance_km?,
            duration_seconds: duration_seconds?,
            notes: notes?,
        })
    })
}
