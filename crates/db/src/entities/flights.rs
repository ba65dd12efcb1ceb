//! `SeaORM` Entity for flights table.
//!
//! One row per flight number per departure date.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "flights")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub flight_number: String,
    pub flight_type_id: i32,
    pub aircraft_type_id: i32,
    pub departure_date: Date,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight_types::Entity",
        from = "Column::FlightTypeId",
        to = "super::flight_types::Column::Id"
    )]
    FlightTypes,
    #[sea_orm(
        belongs_to = "super::aircraft_types::Entity",
        from = "Column::AircraftTypeId",
        to = "super::aircraft_types::Column::Id"
    )]
    AircraftTypes,
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
}

impl Related<super::flight_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightTypes.def()
    }
}

impl Related<super::aircraft_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AircraftTypes.def()
    }
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
