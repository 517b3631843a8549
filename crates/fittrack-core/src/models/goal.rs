// ABOUTME: Goal record, closed goal-status enumeration and creation DTO
// ABOUTME: Goals track progress of a numeric value toward a target by a date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Lifecycle state of a goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Being worked on
    #[default]
    Active,
    /// Target reached
    Completed,
    /// Temporarily suspended
    Paused,
}

impl GoalStatus {
    /// Every accepted value
    pub const ALL: [Self; 3] = [Self::Active, Self::Completed, Self::Paused];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }
}

impl Display for GoalStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid goal status: {s}")))
    }
}

/// A user's goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Row identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: String,
    /// Short title
    pub title: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value to reach
    pub target_value: f64,
    /// Progress so far
    pub current_value: f64,
    /// Unit label for both values (e.g. `km`, `kg`, `sessions`)
    pub unit: String,
    /// Day by which the target should be reached
    pub target_date: NaiveDate,
    /// Lifecycle state
    pub status: GoalStatus,
    /// Set by the backend on insert
    pub created_at: DateTime<Utc>,
    /// Set by the backend on every update
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Fraction of the target reached, clamped to `[0, 1]`
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target_value <= 0.0 {
            return 0.0;
        }
        (self.current_value / self.target_value).clamp(0.0, 1.0)
    }
}

/// Validated goal creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoal {
    /// Trimmed title
    pub title: String,
    /// Trimmed description; absent when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value to reach, strictly positive
    pub target_value: f64,
    /// Progress so far, defaults to 0
    pub current_value: f64,
    /// Trimmed unit label
    pub unit: String,
    /// Day by which the target should be reached
    pub target_date: NaiveDate,
    /// Lifecycle state, defaults to active
    pub status: GoalStatus,
}
