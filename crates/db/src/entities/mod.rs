//! `SeaORM` entity definitions.

pub mod prelude;

pub mod aircraft_types;
pub mod bookings;
pub mod flight_types;
pub mod flights;
pub mod sea_orm_active_enums;
pub mod users;
