//! Flight predicate shared by every report query.
//!
//! The predicate is built once per request and never mutated, so the two
//! queries behind an occupation report always see the same clauses.

use chrono::NaiveDate;

use aerodesk_shared::types::FlightTypeId;

use super::types::{FlightRecord, ReportFilter, ReportRequest};

/// One condition on a flight row. Clauses are ANDed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightClause {
    /// `departure_date BETWEEN start AND end`, both ends included.
    DepartureBetween {
        /// First date included.
        start: NaiveDate,
        /// Last date included.
        end: NaiveDate,
    },
    /// `flight_number = value`.
    FlightNumberEquals(String),
    /// `flight_type_id = value`.
    FlightTypeEquals(FlightTypeId),
}

impl FlightClause {
    /// Evaluates the clause against one flight.
    #[must_use]
    pub fn matches(&self, flight: &FlightRecord) -> bool {
        match self {
            Self::DepartureBetween { start, end } => {
                *start <= flight.departure_date && flight.departure_date <= *end
            }
            Self::FlightNumberEquals(number) => flight.flight_number == *number,
            Self::FlightTypeEquals(type_id) => flight.flight_type_id == *type_id,
        }
    }
}

/// Conjunction of flight clauses for one report request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPredicate {
    clauses: Vec<FlightClause>,
}

impl ReportPredicate {
    /// Builds the predicate: the departure date range, plus at most one filter clause.
    #[must_use]
    pub fn for_request(request: &ReportRequest) -> Self {
        let mut clauses = vec![FlightClause::DepartureBetween {
            start: request.period.start,
            end: request.period.end,
        }];

        match &request.filter {
            Some(ReportFilter::FlightNumber(number)) => {
                clauses.push(FlightClause::FlightNumberEquals(number.clone()));
            }
            Some(ReportFilter::FlightType(type_id)) => {
                clauses.push(FlightClause::FlightTypeEquals(*type_id));
            }
            None => {}
        }

        Self { clauses }
    }

    /// Returns the clauses in the order they were added.
    #[must_use]
    pub fn clauses(&self) -> &[FlightClause] {
        &self.clauses
    }

    /// Returns true if every clause holds for `flight`.
    #[must_use]
    pub fn matches(&self, flight: &FlightRecord) -> bool {
        self.clauses.iter().all(|clause| clause.matches(flight))
    }
}
