// ABOUTME: Re-exports the unified error types from fittrack-core
// ABOUTME: Keeps crate::errors paths stable for the backend, gate and validators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

pub use fittrack_core::errors::*;
