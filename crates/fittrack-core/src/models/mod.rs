// ABOUTME: Core data models for the FitTrack access layer
// ABOUTME: Re-exports Identity, Profile, Workout, Exercise and Goal definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Data Models
//!
//! Data shapes exchanged with the hosted backend and the web front end.
//! Persistence and lifecycle (ids, timestamps) are owned by the backend; the
//! `Create*`/`*Update` types are the validated DTOs accepted at the boundary.
//!
//! All models serialize with camelCase keys to match the front end.

mod exercise;
mod goal;
mod identity;
mod profile;
mod workout;

pub use exercise::{CreateExercise, Exercise};
pub use goal::{CreateGoal, Goal, GoalStatus};
pub use identity::Identity;
pub use profile::{Profile, ProfileUpdate};
pub use workout::{CreateWorkout, Workout, WorkoutType};

pub use crate::permissions::Role;
