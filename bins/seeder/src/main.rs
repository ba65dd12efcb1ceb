//! Database seeder for Aerodesk development and testing.
//!
//! Seeds flight types, aircraft types, a month of January 2025 flights with
//! bookings, and one admin and one customer account. Each table is skipped
//! when it already has rows.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use uuid::Uuid;

use aerodesk_core::auth::{UserType, hash_password};
use aerodesk_db::UserRepository;
use aerodesk_db::entities::{
    aircraft_types, bookings, flight_types, flights, sea_orm_active_enums::BookingStatus, users,
};

const SEAT_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Daily routes: flight number, flight type name, aircraft type name, base fare.
const ROUTES: &[(&str, &str, &str, i64)] = &[
    ("AA101", "Domestic", "Airbus A320", 350),
    ("AA205", "Domestic", "Boeing 737-800", 280),
    ("AA900", "International", "Boeing 777-300ER", 1200),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = aerodesk_db::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    println!("Seeding flight types...");
    seed_flight_types(&db).await?;

    println!("Seeding aircraft types...");
    seed_aircraft_types(&db).await?;

    println!("Seeding users...");
    seed_users(&db).await?;

    println!("Seeding flights...");
    seed_flights(&db).await?;

    println!("Seeding bookings...");
    seed_bookings(&db).await?;

    println!("Seeding complete!");
    Ok(())
}

async fn seed_flight_types(db: &DatabaseConnection) -> anyhow::Result<()> {
    if flight_types::Entity::find().count(db).await? > 0 {
        println!("  Flight types already exist, skipping...");
        return Ok(());
    }

    for name in ["Domestic", "International"] {
        flight_types::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        println!("  Created flight type: {name}");
    }
    Ok(())
}

async fn seed_aircraft_types(db: &DatabaseConnection) -> anyhow::Result<()> {
    if aircraft_types::Entity::find().count(db).await? > 0 {
        println!("  Aircraft types already exist, skipping...");
        return Ok(());
    }

    let fleet = [
        ("Airbus A320", 180, "Single-aisle, short and medium haul"),
        ("Boeing 737-800", 189, "Single-aisle, short and medium haul"),
        ("Boeing 777-300ER", 396, "Wide-body, long haul"),
    ];
    for (type_name, seats, description) in fleet {
        aircraft_types::ActiveModel {
            type_name: Set(type_name.to_string()),
            seats: Set(seats),
            description: Set(Some(description.to_string())),
            ..Default::default()
        }
        .insert(db)
        .await?;
        println!("  Created aircraft type: {type_name} ({seats} seats)");
    }
    Ok(())
}

async fn seed_users(db: &DatabaseConnection) -> anyhow::Result<()> {
    if users::Entity::find().count(db).await? > 0 {
        println!("  Users already exist, skipping...");
        return Ok(());
    }

    let repo = UserRepository::new(db.clone());
    let accounts = [
        ("Operations Admin", "admin@aerodesk.dev", "admin123", UserType::Admin),
        ("Test Passenger", "passenger@aerodesk.dev", "passenger123", UserType::Customer),
    ];
    for (name, email, password, user_type) in accounts {
        let hash = hash_password(password)?;
        repo.create(name, email, &hash, user_type).await?;
        println!("  Created {} user: {email} / {password}", user_type.as_str());
    }
    Ok(())
}

async fn seed_flights(db: &DatabaseConnection) -> anyhow::Result<()> {
    if flights::Entity::find().count(db).await? > 0 {
        println!("  Flights already exist, skipping...");
        return Ok(());
    }

    let types = flight_types::Entity::find().all(db).await?;
    let fleet = aircraft_types::Entity::find().all(db).await?;
    let first_day = NaiveDate::from_ymd_opt(2025, 1, 1).context("invalid seed date")?;

    let mut created = 0;
    for (number, type_name, aircraft_name, _) in ROUTES {
        let flight_type = types
            .iter()
            .find(|t| t.name == *type_name)
            .with_context(|| format!("missing flight type {type_name}"))?;
        let aircraft = fleet
            .iter()
            .find(|a| a.type_name == *aircraft_name)
            .with_context(|| format!("missing aircraft type {aircraft_name}"))?;

        for day in 0..31 {
            flights::ActiveModel {
                flight_number: Set((*number).to_string()),
                flight_type_id: Set(flight_type.id),
                aircraft_type_id: Set(aircraft.id),
                departure_date: Set(first_day + Duration::days(day)),
                created_at: Set(Utc::now().into()),
                ..Default::default()
            }
            .insert(db)
            .await?;
            created += 1;
        }
    }
    println!("  Created {created} flights");
    Ok(())
}

async fn seed_bookings(db: &DatabaseConnection) -> anyhow::Result<()> {
    if bookings::Entity::find().count(db).await? > 0 {
        println!("  Bookings already exist, skipping...");
        return Ok(());
    }

    let passenger = UserRepository::new(db.clone())
        .find_by_email("passenger@aerodesk.dev")
        .await?
        .context("passenger user not seeded")?;

    let schedule = flights::Entity::find()
        .order_by_asc(flights::Column::Id)
        .all(db)
        .await?;

    let mut created = 0;
    for (index, flight) in schedule.iter().enumerate() {
        let fare = ROUTES
            .iter()
            .find(|(number, ..)| *number == flight.flight_number)
            .map_or(300, |(.., fare)| *fare);

        // Deterministic load: between 40 and 100 bookings per flight
        let load = 40 + (index * 37) % 61;
        let rows = (0..load).map(|seat| bookings::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(passenger.id),
            flight_id: Set(flight.id),
            seat_number: Set(Some(seat_label(seat))),
            status: Set(if seat % 25 == 0 {
                BookingStatus::Cancelled
            } else {
                BookingStatus::Booked
            }),
            price: Set(Decimal::new(fare, 0)),
            created_at: Set(Utc::now().into()),
        });

        bookings::Entity::insert_many(rows).exec(db).await?;
        created += load;
    }
    println!("  Created {created} bookings");
    Ok(())
}

/// Row-major seat label, e.g. `1A`, `1B`, ... `2A`.
fn seat_label(seat: usize) -> String {
    format!("{}{}", seat / SEAT_LETTERS.len() + 1, SEAT_LETTERS[seat % SEAT_LETTERS.len()])
}
