//! Core business logic for Aerodesk.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `reports` - Tickets sold, seat occupation, and sales aggregates over flights and bookings
//! - `auth` - User types and password hashing

pub mod auth;
pub mod reports;
