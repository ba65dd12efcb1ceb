//! Authentication and access capabilities.
//!
//! This module provides:
//! - Password hashing and credential checks
//! - User types and what each may do

mod credentials;

pub use credentials::{PasswordError, check_credentials, hash_password, verify_password};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Back-office staff with access to fleet data and reports.
    Admin,
    /// Passenger account.
    Customer,
}

impl UserType {
    /// Returns the stored name of the user type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }

    /// Returns true if this user type may generate reports.
    #[must_use]
    pub const fn can_view_reports(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            other => Err(format!("unknown user type: {other}")),
        }
    }
}
