//! Airline report generation.
//!
//! A report request is turned into an immutable [`ReportPredicate`] over flights,
//! which a [`ReportDataSource`] evaluates for one of three aggregates:
//! - Tickets sold
//! - Seat occupation
//! - Sum of sales

pub mod error;
pub mod predicate;
pub mod service;
pub mod source;
pub mod types;


pub use error::ReportError;
pub use predicate::{FlightClause, ReportPredicate};
pub use service::{ReportService, occupation_rate};
pub use source::ReportDataSource;
pub use types::*;
