//! Shared fixtures for database integration tests.
//!
//! Tests run against `DATABASE_URL` and are skipped when it is not set.

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use sea_orm_migration::MigratorTrait;
use tokio::sync::OnceCell;
use uuid::Uuid;

use aerodesk_core::auth::UserType;
use aerodesk_db::UserRepository;
use aerodesk_db::entities::{
    aircraft_types, bookings, flight_types, flights, sea_orm_active_enums::BookingStatus, users,
};
use aerodesk_db::migration::Migrator;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connects and migrates, or returns `None` when no database is configured.
pub async fn connect() -> Option<DatabaseConnection> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database test");
        return None;
    };

    let db = aerodesk_db::connect(&url)
        .await
        .expect("Failed to connect to database");

    MIGRATED
        .get_or_init(|| async {
            Migrator::up(&db, None)
                .await
                .expect("Failed to run migrations");
        })
        .await;

    Some(db)
}

/// Short unique suffix so parallel tests never share rows.
pub fn unique(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}{}", &id[..8]).to_uppercase()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub async fn flight_type(db: &DatabaseConnection) -> flight_types::Model {
    flight_types::ActiveModel {
        name: Set(unique("Route ")),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create flight type")
}

pub async fn aircraft_type(db: &DatabaseConnection, seats: i32) -> aircraft_types::Model {
    aircraft_types::ActiveModel {
        type_name: Set(unique("A3")),
        seats: Set(seats),
        description: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create aircraft type")
}

pub async fn flight(
    db: &DatabaseConnection,
    number: &str,
    flight_type: &flight_types::Model,
    aircraft: &aircraft_types::Model,
    departure: &str,
) -> flights::Model {
    flights::ActiveModel {
        flight_number: Set(number.to_string()),
        flight_type_id: Set(flight_type.id),
        aircraft_type_id: Set(aircraft.id),
        departure_date: Set(date(departure)),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create flight")
}

pub async fn customer(db: &DatabaseConnection) -> users::Model {
    let email = format!("{}@example.com", unique("passenger-").to_lowercase());
    UserRepository::new(db.clone())
        .create("Test Passenger", &email, "$argon2id$test_hash", UserType::Customer)
        .await
        .expect("Failed to create user")
}

/// Inserts one booking per price on `flight`.
pub async fn book(
    db: &DatabaseConnection,
    user: &users::Model,
    flight: &flights::Model,
    prices: &[Decimal],
) {
    if prices.is_empty() {
        return;
    }

    let rows = prices.iter().map(|price| bookings::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        flight_id: Set(flight.id),
        seat_number: Set(None),
        status: Set(BookingStatus::Booked),
        price: Set(*price),
        created_at: Set(chrono::Utc::now().into()),
    });

    bookings::Entity::insert_many(rows)
        .exec(db)
        .await
        .expect("Failed to create bookings");
}
