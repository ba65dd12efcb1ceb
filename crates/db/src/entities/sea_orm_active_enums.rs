//! Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use aerodesk_core::auth::UserType as DomainUserType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_type")]
pub enum UserType {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "customer")]
    Customer,
}

impl From<UserType> for DomainUserType {
    fn from(value: UserType) -> Self {
        match value {
            UserType::Admin => Self::Admin,
            UserType::Customer => Self::Customer,
        }
    }
}

impl From<DomainUserType> for UserType {
    fn from(value: DomainUserType) -> Self {
        match value {
            DomainUserType::Admin => Self::Admin,
            DomainUserType::Customer => Self::Customer,
        }
    }
}

/// Lifecycle of a booking. Reports count every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "booking_status")]
pub enum BookingStatus {
    #[sea_orm(string_value = "booked")]
    Booked,
    #[sea_orm(string_value = "checked-in")]
    CheckedIn,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "completed")]
    Completed,
}
