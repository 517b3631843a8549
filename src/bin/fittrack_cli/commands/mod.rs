// ABOUTME: Re-exports command modules for fittrack-cli
// ABOUTME: Provides the verify-admin and validate commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

pub mod validate;
pub mod verify;
