//! Shared types, errors, and configuration for Aerodesk.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Session claims and the token service that signs them
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::Claims;
pub use config::{AppConfig, SessionConfig};
pub use error::AppError;
pub use jwt::{JwtError, JwtService};

#[cfg(test)]
mod error_tests;
