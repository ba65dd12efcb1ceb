//! Initial database migration.
//!
//! Creates the fleet, flight, user and booking tables with their enums and
//! the indexes the report queries filter on.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: REFERENCE DATA
        // ============================================================
        db.execute_unprepared(FLIGHT_TYPES_SQL).await?;
        db.execute_unprepared(AIRCRAFT_TYPES_SQL).await?;

        // ============================================================
        // PART 3: SCHEDULE, USERS, BOOKINGS
        // ============================================================
        db.execute_unprepared(FLIGHTS_SQL).await?;
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(BOOKINGS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE user_type AS ENUM ('admin', 'customer');
CREATE TYPE booking_status AS ENUM ('booked', 'checked-in', 'cancelled', 'completed');
";

const FLIGHT_TYPES_SQL: &str = r"
CREATE TABLE flight_types (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL UNIQUE
);
";

const AIRCRAFT_TYPES_SQL: &str = r"
CREATE TABLE aircraft_types (
    id SERIAL PRIMARY KEY,
    type_name VARCHAR(100) NOT NULL,
    seats INTEGER NOT NULL,
    description TEXT,
    CONSTRAINT chk_seats_non_negative CHECK (seats >= 0)
);
";

const FLIGHTS_SQL: &str = r"
CREATE TABLE flights (
    id SERIAL PRIMARY KEY,
    flight_number VARCHAR(20) NOT NULL,
    flight_type_id INTEGER NOT NULL REFERENCES flight_types(id),
    aircraft_type_id INTEGER NOT NULL REFERENCES aircraft_types(id),
    departure_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_flight_number_departure UNIQUE (flight_number, departure_date)
);

CREATE INDEX idx_flights_departure_date ON flights(departure_date);
CREATE INDEX idx_flights_flight_type ON flights(flight_type_id);
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    user_type user_type NOT NULL DEFAULT 'customer',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const BOOKINGS_SQL: &str = r"
CREATE TABLE bookings (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    flight_id INTEGER NOT NULL REFERENCES flights(id) ON DELETE CASCADE,
    seat_number VARCHAR(10),
    status booking_status NOT NULL DEFAULT 'booked',
    price NUMERIC(12, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_price_non_negative CHECK (price >= 0)
);

CREATE INDEX idx_bookings_flight ON bookings(flight_id);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS bookings CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP TABLE IF EXISTS flights CASCADE;
DROP TABLE IF EXISTS aircraft_types CASCADE;
DROP TABLE IF EXISTS flight_types CASCADE;
DROP TYPE IF EXISTS booking_status;
DROP TYPE IF EXISTS user_type;
";
