// ABOUTME: Workout record, closed workout-type enumeration and creation DTO
// ABOUTME: Mirrors the workouts table owned by the hosted backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Kind of workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    /// Endurance work: running, cycling, rowing
    Cardio,
    /// Resistance training
    Strength,
    /// Stretching, yoga, mobility
    Flexibility,
    /// Team and racquet sports
    Sports,
    /// Anything else
    Other,
}

impl WorkoutType {
    /// Every accepted value, in display order
    pub const ALL: [Self; 5] = [
        Self::Cardio,
        Self::Strength,
        Self::Flexibility,
        Self::Sports,
        Self::Other,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Flexibility => "flexibility",
            Self::Sports => "sports",
            Self::Other => "other",
        }
    }
}

impl Display for WorkoutType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid workout type: {s}")))
    }
}

/// A recorded workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Row identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: String,
    /// Workout name
    pub name: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Estimated calories burned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
    /// Kind of workout
    pub workout_type: WorkoutType,
    /// Calendar day the workout took place
    pub date: NaiveDate,
    /// Set by the backend on insert
    pub created_at: DateTime<Utc>,
    /// Set by the backend on every update
    pub updated_at: DateTime<Utc>,
}

/// Validated workout creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkout {
    /// Trimmed name
    pub name: String,
    /// Trimmed description; absent when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in minutes, `1..=1440`
    pub duration_minutes: u32,
    /// Calories burned, `0..=10000`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
    /// Kind of workout
    pub workout_type: WorkoutType,
    /// Calendar day the workout took place
    pub date: NaiveDate,
}
