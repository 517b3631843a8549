// ABOUTME: Re-exports application constants from fittrack-core
// ABOUTME: Field limits, role names, backend paths and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

pub use fittrack_core::constants::*;
