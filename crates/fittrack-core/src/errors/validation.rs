// ABOUTME: Structured validation failure carrying one reason per violated field
// ABOUTME: Converts into AppError with a machine-readable per-field details payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Validation Failures
//!
//! Request validators collect every violated field instead of stopping at the
//! first problem, so a caller can surface all of them in one round trip.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AppError, ErrorCode};

/// A single violated field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Wire name of the offending field (e.g. `weight`, `workoutType`)
    pub field: String,
    /// Human-readable reason, phrased to follow the field name
    pub reason: String,
}

impl FieldViolation {
    /// Create a violation for `field`
    #[must_use]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// One or more field constraints were violated
///
/// Violations keep the order in which fields were checked, which is the
/// declaration order of the target DTO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub struct ValidationFailure {
    /// Every violated field with its reason
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    /// Create an empty failure to accumulate into
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Record a violation
    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, reason));
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violated fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether `field` has at least one violation
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Reasons recorded against `field`
    pub fn reasons_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.violations
            .iter()
            .filter(move |v| v.field == field)
            .map(|v| v.reason.as_str())
    }

    /// Finish accumulation: `Ok(value)` when nothing was recorded
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one violation was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        let details = serde_json::json!({ "fields": &failure.violations });
        Self::new(ErrorCode::InvalidInput, failure.to_string()).with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_violation() {
        let mut failure = ValidationFailure::new();
        failure.push("name", "must not be empty");
        failure.push("weight", "must be greater than 0");

        assert_eq!(
            failure.to_string(),
            "validation failed: name must not be empty; weight must be greater than 0"
        );
    }

    #[test]
    fn test_into_app_error_carries_fields() {
        let mut failure = ValidationFailure::new();
        failure.push("height", "must be at most 300");

        let error = AppError::from(failure);
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.context.details["fields"][0]["field"], "height");
        assert_eq!(
            error.context.details["fields"][0]["reason"],
            "must be at most 300"
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationFailure::new().into_result(7), Ok(7));

        let mut failure = ValidationFailure::new();
        failure.push("date", "must be a date in YYYY-MM-DD format");
        assert!(failure.into_result(7).is_err());
    }
}
