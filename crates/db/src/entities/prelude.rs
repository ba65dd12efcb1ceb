//! Entity re-exports.

pub use super::aircraft_types::Entity as AircraftTypes;
pub use super::bookings::Entity as Bookings;
pub use super::flight_types::Entity as FlightTypes;
pub use super::flights::Entity as Flights;
pub use super::users::Entity as Users;
