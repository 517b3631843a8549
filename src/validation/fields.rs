// ABOUTME: Field readers that extract typed values from untyped JSON request bodies
// ABOUTME: Record every violation into a shared ValidationFailure instead of failing fast
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::str::FromStr;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::ValidationFailure;

/// Field name used when the body itself is not a JSON object
pub const BODY_FIELD: &str = "body";

/// Accepted range for a numeric field, bounded below by zero
#[derive(Debug, Clone, Copy)]
pub struct Range {
    /// Whether zero itself is rejected (`> 0`) rather than accepted (`>= 0`)
    pub exclusive_min: bool,
    /// Inclusive upper bound
    pub max: f64,
}

impl Range {
    /// `(0, max]`
    #[must_use]
    pub const fn positive(max: f64) -> Self {
        Self {
            exclusive_min: true,
            max,
        }
    }

    /// `[0, max]`
    #[must_use]
    pub const fn non_negative(max: f64) -> Self {
        Self {
            exclusive_min: false,
            max,
        }
    }

    fn violation(self, value: f64) -> Option<String> {
        if self.exclusive_min && value <= 0.0 {
            return Some("must be greater than 0".to_owned());
        }
        if value < 0.0 {
            return Some("must not be negative".to_owned());
        }
        if value > self.max {
            return Some(format!("must be at most {}", self.max));
        }
        None
    }
}

/// Reader over a JSON object that accumulates violations
///
/// Required readers return `None` when a violation was recorded. Optional
/// readers return `Some(None)` when the field is absent or `null`, and `None`
/// when a violation was recorded.
pub struct Fields<'a> {
    body: &'a Map<String, Value>,
    failure: ValidationFailure,
}

impl<'a> Fields<'a> {
    /// Start reading `input`
    ///
    /// # Errors
    ///
    /// Returns a single `body` violation if `input` is not a JSON object
    pub fn of(input: &'a Value) -> Result<Self, ValidationFailure> {
        match input {
            Value::Object(body) => Ok(Self {
                body,
                failure: ValidationFailure::new(),
            }),
            _ => {
                let mut failure = ValidationFailure::new();
                failure.push(BODY_FIELD, "must be a JSON object");
                Err(failure)
            }
        }
    }

    /// Finish reading: `Ok` with the built value when nothing was recorded
    ///
    /// `build` returns `None` only if a required reader failed, which always
    /// records a violation first.
    ///
    /// # Errors
    ///
    /// Returns every violation recorded while reading
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationFailure> {
        if !self.failure.is_empty() {
            return Err(self.failure);
        }
        match build() {
            Some(value) => Ok(value),
            None => {
                let mut failure = self.failure;
                failure.push(BODY_FIELD, "is incomplete");
                Err(failure)
            }
        }
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        self.body.get(field).filter(|value| !value.is_null())
    }

    fn reject(&mut self, field: &str, reason: impl Into<String>) {
        self.failure.push(field, reason);
    }

    fn required(&mut self, field: &str) -> Option<&'a Value> {
        let value = self.present(field);
        if value.is_none() {
            self.reject(field, "is required");
        }
        value
    }

    /// Required string, trimmed, `1..=max_chars` characters
    pub fn required_text(&mut self, field: &str, max_chars: usize) -> Option<String> {
        let value = self.required(field)?;
        let text = self.text(field, value, max_chars)?;
        if text.is_empty() {
            self.reject(field, "must be at least 1 character");
            return None;
        }
        Some(text)
    }

    /// Optional string, trimmed, at most `max_chars` characters; empty becomes absent
    pub fn optional_text(&mut self, field: &str, max_chars: usize) -> Option<Option<String>> {
        let Some(value) = self.present(field) else {
            return Some(None);
        };
        let text = self.text(field, value, max_chars)?;
        Some(Some(text).filter(|t| !t.is_empty()))
    }

    fn text(&mut self, field: &str, value: &Value, max_chars: usize) -> Option<String> {
        let Some(raw) = value.as_str() else {
            self.reject(field, "must be a string");
            return None;
        };
        let trimmed = raw.trim();
        if trimmed.chars().count() > max_chars {
            self.reject(field, format!("must be at most {max_chars} characters"));
            return None;
        }
        Some(trimmed.to_owned())
    }

    /// Required number within `range`
    pub fn required_number(&mut self, field: &str, range: Range) -> Option<f64> {
        let value = self.required(field)?;
        self.number(field, value, range)
    }

    /// Optional number within `range`
    pub fn optional_number(&mut self, field: &str, range: Range) -> Option<Option<f64>> {
        match self.present(field) {
            Some(value) => self.number(field, value, range).map(Some),
            None => Some(None),
        }
    }

    fn number(&mut self, field: &str, value: &Value, range: Range) -> Option<f64> {
        let Some(number) = value.as_f64().filter(|n| n.is_finite()) else {
            self.reject(field, "must be a number");
            return None;
        };
        if let Some(reason) = range.violation(number) {
            self.reject(field, reason);
            return None;
        }
        Some(number)
    }

    /// Required whole number within `range`
    pub fn required_count(&mut self, field: &str, range: Range) -> Option<u32> {
        let value = self.required(field)?;
        self.count(field, value, range)
    }

    /// Optional whole number within `range`
    pub fn optional_count(&mut self, field: &str, range: Range) -> Option<Option<u32>> {
        match self.present(field) {
            Some(value) => self.count(field, value, range).map(Some),
            None => Some(None),
        }
    }

    fn count(&mut self, field: &str, value: &Value, range: Range) -> Option<u32> {
        let number = self.number(field, value, range)?;
        if number.fract().abs() > 0.0 {
            self.reject(field, "must be a whole number");
            return None;
        }
        Some(number as u32)
    }

    /// Required calendar date in `YYYY-MM-DD` form
    pub fn required_date(&mut self, field: &str) -> Option<NaiveDate> {
        let value = self.required(field)?;
        let parsed = value.as_str().and_then(|raw| parse_calendar_date(raw.trim()));
        if parsed.is_none() {
            self.reject(field, "must be a date in YYYY-MM-DD format");
        }
        parsed
    }

    /// Required UUID string
    pub fn required_uuid(&mut self, field: &str) -> Option<Uuid> {
        let value = self.required(field)?;
        let parsed = value
            .as_str()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok());
        if parsed.is_none() {
            self.reject(field, "must be a valid UUID");
        }
        parsed
    }

    /// Required member of a closed set of string values
    pub fn required_choice<T: FromStr>(&mut self, field: &str, allowed: &[&str]) -> Option<T> {
        let value = self.required(field)?;
        self.choice(field, value, allowed)
    }

    /// Optional member of a closed set of string values
    pub fn optional_choice<T: FromStr>(
        &mut self,
        field: &str,
        allowed: &[&str],
    ) -> Option<Option<T>> {
        match self.present(field) {
            Some(value) => self.choice(field, value, allowed).map(Some),
            None => Some(None),
        }
    }

    fn choice<T: FromStr>(&mut self, field: &str, value: &Value, allowed: &[&str]) -> Option<T> {
        let parsed = value.as_str().and_then(|raw| raw.parse::<T>().ok());
        if parsed.is_none() {
            self.reject(field, format!("must be one of: {}", allowed.join(", ")));
        }
        parsed
    }
}

/// Parse a strict `YYYY-MM-DD` date: ten ASCII characters, digits except `-` at 4 and 7
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
