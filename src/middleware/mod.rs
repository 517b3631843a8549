// ABOUTME: Request guards invoked by endpoint handlers before they touch persistence
// ABOUTME: Hosts the admin authorization gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Request guards

/// Admin role authorization gate
pub mod admin_guard;

pub use admin_guard::{verify_admin_role, AdminCheck, AdminGate, AuthorizationFailure};
