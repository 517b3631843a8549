// ABOUTME: Integration tests for workout, exercise and goal creation validation
// ABOUTME: Bounds, closed value sets, dates, defaults and collected violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use fittrack::models::{GoalStatus, WorkoutType};
use fittrack::validation::{
    validate_create_exercise, validate_create_goal, validate_create_workout,
};
use serde_json::json;
use uuid::Uuid;

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

// ============================================================================
// Workouts
// ============================================================================

#[test]
fn test_valid_workout_is_normalized() {
    let workout = validate_create_workout(&json!({
        "name": "  Morning run ",
        "description": "   ",
        "durationMinutes": 45,
        "caloriesBurned": 420,
        "workoutType": "cardio",
        "date": "2025-03-01"
    }))
    .unwrap();

    assert_eq!(workout.name, "Morning run");
    assert_eq!(workout.description, None);
    assert_eq!(workout.duration_minutes, 45);
    assert_eq!(workout.calories_burned, Some(420));
    assert_eq!(workout.workout_type, WorkoutType::Cardio);
    assert_eq!(workout.date, date("2025-03-01"));
}

#[test]
fn test_workout_optional_fields_may_be_absent() {
    let workout = validate_create_workout(&json!({
        "name": "Yoga",
        "durationMinutes": 1440,
        "workoutType": "flexibility",
        "date": "2024-02-29"
    }))
    .unwrap();

    assert_eq!(workout.calories_burned, None);
    assert_eq!(workout.description, None);
}

#[test]
fn test_workout_violations_are_collected() {
    let failure = validate_create_workout(&json!({
        "name": "Swim",
        "durationMinutes": 0,
        "caloriesBurned": -10,
        "workoutType": "swimming",
        "date": "2025-02-30"
    }))
    .unwrap_err();

    assert_eq!(failure.len(), 4);
    assert_eq!(
        failure.reasons_for("durationMinutes").collect::<Vec<_>>(),
        ["must be greater than 0"]
    );
    assert_eq!(
        failure.reasons_for("caloriesBurned").collect::<Vec<_>>(),
        ["must not be negative"]
    );
    assert_eq!(
        failure.reasons_for("workoutType").collect::<Vec<_>>(),
        ["must be one of: cardio, strength, flexibility, sports, other"]
    );
    assert_eq!(
        failure.reasons_for("date").collect::<Vec<_>>(),
        ["must be a date in YYYY-MM-DD format"]
    );
}

#[test]
fn test_workout_duration_limits() {
    let body = |minutes: serde_json::Value| {
        json!({
            "name": "Ride",
            "durationMinutes": minutes,
            "workoutType": "cardio",
            "date": "2025-03-01"
        })
    };

    assert!(validate_create_workout(&body(json!(1441))).is_err());
    assert!(validate_create_workout(&body(json!(30.5))).is_err());
    assert!(validate_create_workout(&body(json!(30.0))).is_ok());
    assert!(validate_create_workout(&body(json!("30"))).is_err());
}

#[test]
fn test_workout_type_is_case_sensitive() {
    let failure = validate_create_workout(&json!({
        "name": "Lift",
        "durationMinutes": 60,
        "workoutType": "Strength",
        "date": "2025-03-01"
    }))
    .unwrap_err();
    assert!(failure.has_field("workoutType"));
}

#[test]
fn test_workout_date_must_be_zero_padded_iso() {
    for raw in ["2024-5-1", "+2024-05-01", "2024-05-01T00:00:00", "20240501"] {
        let failure = validate_create_workout(&json!({
            "name": "Row",
            "durationMinutes": 20,
            "workoutType": "cardio",
            "date": raw
        }))
        .unwrap_err();
        assert_eq!(
            failure.reasons_for("date").collect::<Vec<_>>(),
            ["must be a date in YYYY-MM-DD format"],
            "date {raw}"
        );
    }
}

#[test]
fn test_goal_target_date_must_be_zero_padded_iso() {
    let failure = validate_create_goal(&json!({
        "title": "Run 100 km",
        "targetValue": 100,
        "unit": "km",
        "targetDate": "2025-12-1"
    }))
    .unwrap_err();
    assert!(failure.has_field("targetDate"));
}

// ============================================================================
// Exercises
// ============================================================================

#[test]
fn test_valid_exercise() {
    let workout_id = Uuid::new_v4();
    let exercise = validate_create_exercise(&json!({
        "workoutId": workout_id.to_string(),
        "name": "Squat",
        "sets": 5,
        "reps": 5,
        "weightKg": 102.5,
        "notes": ""
    }))
    .unwrap();

    assert_eq!(exercise.workout_id, workout_id);
    assert_eq!(exercise.sets, Some(5));
    assert_eq!(exercise.weight_kg, Some(102.5));
    assert_eq!(exercise.distance_km, None);
    assert_eq!(exercise.notes, None);
}

#[test]
fn test_exercise_violations_are_collected() {
    let failure = validate_create_exercise(&json!({
        "workoutId": "not-a-uuid",
        "name": "",
        "sets": 2.5,
        "distanceKm": -1,
        "durationSeconds": 86_401
    }))
    .unwrap_err();

    assert_eq!(failure.len(), 5);
    assert_eq!(
        failure.reasons_for("workoutId").collect::<Vec<_>>(),
        ["must be a valid UUID"]
    );
    assert_eq!(
        failure.reasons_for("sets").collect::<Vec<_>>(),
        ["must be a whole number"]
    );
    assert!(failure.has_field("name"));
    assert!(failure.has_field("distanceKm"));
    assert!(failure.has_field("durationSeconds"));
}

// ============================================================================
// Goals
// ============================================================================

#[test]
fn test_goal_defaults() {
    let goal = validate_create_goal(&json!({
        "title": " Run 100 km ",
        "targetValue": 100,
        "unit": "km",
        "targetDate": "2025-12-31"
    }))
    .unwrap();

    assert_eq!(goal.title, "Run 100 km");
    assert_eq!(goal.status, GoalStatus::Active);
    assert!(goal.current_value.abs() < f64::EPSILON);
    assert_eq!(goal.target_date, date("2025-12-31"));
}

#[test]
fn test_goal_explicit_status_and_progress() {
    let goal = validate_create_goal(&json!({
        "title": "Bench 100",
        "targetValue": 100,
        "currentValue": 80,
        "unit": "kg",
        "targetDate": "2025-06-30",
        "status": "paused"
    }))
    .unwrap();

    assert_eq!(goal.status, GoalStatus::Paused);
    assert!((goal.current_value - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_goal_violations_are_collected() {
    let failure = validate_create_goal(&json!({
        "title": "",
        "targetValue": 0,
        "currentValue": -1,
        "unit": "kilometers per week!!",
        "targetDate": "31/12/2025",
        "status": "done"
    }))
    .unwrap_err();

    for field in [
        "title",
        "targetValue",
        "currentValue",
        "unit",
        "targetDate",
        "status",
    ] {
        assert!(failure.has_field(field), "missing violation for {field}");
    }
    assert_eq!(failure.len(), 6);
}
