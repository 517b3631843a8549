// ABOUTME: Re-exports domain models from fittrack-core
// ABOUTME: Identity, profile, workout, exercise and goal types plus the Role enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

pub use fittrack_core::models::*;
