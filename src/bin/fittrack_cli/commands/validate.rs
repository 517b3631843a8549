// ABOUTME: validate command for fittrack-cli
// ABOUTME: Reads a JSON payload, runs the matching validator and prints the DTO or the violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::path::PathBuf;

use clap::ValueEnum;
use fittrack::{
    errors::{AppError, AppResult},
    logging::AppLogger,
    validation::{
        validate_create_exercise, validate_create_goal, validate_create_workout,
        validate_profile_update, ValidationFailure,
    },
};
use serde::Serialize;
use serde_json::Value;
use tokio::io::AsyncReadExt;

/// Payload kinds accepted by `validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    /// Profile update `{name, weight, height}`
    Profile,
    /// Workout creation
    Workout,
    /// Exercise creation
    Exercise,
    /// Goal creation
    Goal,
}

impl PayloadKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Workout => "workout",
            Self::Exercise => "exercise",
            Self::Goal => "goal",
        }
    }
}

/// Validate the payload in `file` (or stdin); returns whether it was valid
pub async fn validate(kind: PayloadKind, file: Option<PathBuf>) -> AppResult<bool> {
    let raw = read_input(file).await?;
    let body: Value = serde_json::from_str(&raw)?;

    let outcome = match kind {
        PayloadKind::Profile => render(validate_profile_update(&body))?,
        PayloadKind::Workout => render(validate_create_workout(&body))?,
        PayloadKind::Exercise => render(validate_create_exercise(&body))?,
        PayloadKind::Goal => render(validate_create_goal(&body))?,
    };

    match outcome {
        Ok(normalized) => {
            println!("{}", serde_json::to_string_pretty(&normalized)?);
            Ok(true)
        }
        Err(failure) => {
            AppLogger::log_validation_rejected(kind.as_str(), &failure);
            println!("{}", serde_json::to_string_pretty(&failure)?);
            Ok(false)
        }
    }
}

/// Serialize the normalized DTO, keeping a validation failure as is
fn render<T: Serialize>(
    result: Result<T, ValidationFailure>,
) -> AppResult<Result<Value, ValidationFailure>> {
    match result {
        Ok(dto) => Ok(Ok(serde_json::to_value(dto)?)),
        Err(failure) => Ok(Err(failure)),
    }
}

async fn read_input(file: Option<PathBuf>) -> AppResult<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(&path).await.map_err(|e| {
            AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
        }),
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .map_err(|e| AppError::invalid_input(format!("Cannot read stdin: {e}")))?;
            Ok(raw)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use fittrack::errors::ErrorCode;
    use tempfile::NamedTempFile;

    use super::*;

    fn payload_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_valid_profile_file_succeeds() {
        let file = payload_file(r#"{"name": "  Anna  ", "weight": 70, "height": 170}"#);
        let valid = validate(PayloadKind::Profile, Some(file.path().to_path_buf())).await;
        assert_eq!(valid.ok(), Some(true));
    }

    #[tokio::test]
    async fn test_invalid_workout_file_fails() {
        let file = payload_file(
            r#"{"name": "Swim", "durationMinutes": 0, "workoutType": "swimming", "date": "2024-5-1"}"#,
        );
        let valid = validate(PayloadKind::Workout, Some(file.path().to_path_buf())).await;
        assert_eq!(valid.ok(), Some(false));
    }

    #[tokio::test]
    async fn test_unparseable_file_is_an_error() {
        let file = payload_file("{not json");
        let error = validate(PayloadKind::Goal, Some(file.path().to_path_buf()))
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = validate(PayloadKind::Exercise, Some(dir.path().join("absent.json")))
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}
