// ABOUTME: Role enumeration used as the sole authorization signal
// ABOUTME: Lenient parsing from storage so unknown roles never grant privileges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::roles;
use crate::errors::AppError;

/// Role held by a profile
///
/// There is no hierarchy and no permission list: `Admin` is the only
/// privileged value and everything else is treated as `User`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator
    Admin,
    /// Regular user
    #[default]
    User,
}

impl Role {
    /// Map a stored role value onto a role
    ///
    /// Only the exact value `admin` is privileged; unknown or differently
    /// cased values map to `User`.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == roles::ADMIN {
            Self::Admin
        } else {
            Self::User
        }
    }

    /// Whether this role grants admin privileges
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => roles::ADMIN,
            Self::User => roles::USER,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            roles::ADMIN => Ok(Self::Admin),
            roles::USER => Ok(Self::User),
            _ => Err(AppError::invalid_input(format!("Invalid role: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_admin_is_privileged() {
        assert!(Role::from_stored("admin").is_admin());
        assert!(!Role::from_stored("Admin").is_admin());
        assert!(!Role::from_stored("super_admin").is_admin());
        assert!(!Role::from_stored("").is_admin());
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!("user".parse::<Role>().ok(), Some(Role::User));
        assert!("coach".parse::<Role>().is_err());
    }
}
