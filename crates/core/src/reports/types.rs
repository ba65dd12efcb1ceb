//! Report data types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use aerodesk_shared::types::{FlightId, FlightTypeId};

use super::error::ReportError;

// ============================================================================
// Request
// ============================================================================

/// Report category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportCategory {
    /// Count of bookings.
    TicketsSold,
    /// Bookings against seats offered.
    Occupation,
    /// Sum of booking prices.
    Sales,
}

impl ReportCategory {
    /// Returns the wire code used in requests.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TicketsSold => "tickets",
            Self::Occupation => "occupation",
            Self::Sales => "sales",
        }
    }

    /// Returns the human-readable label used in responses.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TicketsSold => "Tickets Sold",
            Self::Occupation => "Seats Occupation",
            Self::Sales => "Sum of Sales",
        }
    }
}

impl FromStr for ReportCategory {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tickets" => Ok(Self::TicketsSold),
            "occupation" => Ok(Self::Occupation),
            "sales" => Ok(Self::Sales),
            other => Err(ReportError::InvalidCategory(other.to_string())),
        }
    }
}

/// Inclusive date range on flight departure dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First departure date included.
    pub start: NaiveDate,
    /// Last departure date included.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a date range, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Dimension filter narrowing the flights a report covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFilter {
    /// Flights of one flight type, matched on the flight type id.
    FlightType(FlightTypeId),
    /// Flights with exactly this flight number.
    FlightNumber(String),
}

impl ReportFilter {
    /// Builds a filter from its wire form (`type` or `number` plus a value).
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilterType` for an unknown kind and `InvalidFilterValue`
    /// for an empty value or a flight type value that is not an integer id.
    pub fn from_parts(kind: &str, value: &str) -> Result<Self, ReportError> {
        if value.is_empty() {
            return Err(ReportError::InvalidFilterValue(
                "filter value must not be empty".to_string(),
            ));
        }

        match kind {
            // Compared verbatim: " AA101 " is not AA101.
            "number" => Ok(Self::FlightNumber(value.to_string())),
            "type" => value.parse().map(Self::FlightType).map_err(|_| {
                ReportError::InvalidFilterValue(format!(
                    "flight type filter expects a flight type id, got {value:?}"
                ))
            }),
            other => Err(ReportError::InvalidFilterType(other.to_string())),
        }
    }

    /// Returns the wire kind of the filter.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FlightType(_) => "type",
            Self::FlightNumber(_) => "number",
        }
    }

    /// Returns the filter description shown on reports, e.g. `number: AA101`.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::FlightType(id) => format!("{}: {id}", self.kind()),
            Self::FlightNumber(number) => format!("{}: {number}", self.kind()),
        }
    }
}

/// Raw filter as received in a report request body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterInput {
    /// `type` or `number`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Flight type id or flight number.
    pub value: String,
}

/// Raw report request as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    /// `tickets`, `occupation`, or `sales`.
    pub category: String,
    /// Inclusive lower bound on departure date.
    pub start_date: NaiveDate,
    /// Inclusive upper bound on departure date.
    pub end_date: NaiveDate,
    /// Optional dimension filter.
    #[serde(default)]
    pub filter: Option<FilterInput>,
}

/// Validated report request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Report category.
    pub category: ReportCategory,
    /// Departure date range.
    pub period: DateRange,
    /// Optional dimension filter.
    pub filter: Option<ReportFilter>,
}

impl ReportRequest {
    /// Creates a request for all flights in a period.
    #[must_use]
    pub const fn new(category: ReportCategory, period: DateRange) -> Self {
        Self {
            category,
            period,
            filter: None,
        }
    }

    /// Narrows the request to one dimension.
    #[must_use]
    pub fn with_filter(mut self, filter: ReportFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Returns the filter description, or `All Flights` when unfiltered.
    #[must_use]
    pub fn filter_description(&self) -> String {
        self.filter
            .as_ref()
            .map_or_else(|| "All Flights".to_string(), ReportFilter::description)
    }
}

impl TryFrom<ReportInput> for ReportRequest {
    type Error = ReportError;

    fn try_from(input: ReportInput) -> Result<Self, Self::Error> {
        // Category first: an unknown category fails before anything else is looked at.
        let category = input.category.parse()?;
        let period = DateRange::new(input.start_date, input.end_date)?;
        let filter = input
            .filter
            .map(|f| ReportFilter::from_parts(&f.kind, &f.value))
            .transpose()?;

        Ok(Self {
            category,
            period,
            filter,
        })
    }
}

// ============================================================================
// Records read by the generator
// ============================================================================

/// A scheduled flight instance as seen by reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    /// Flight ID.
    pub id: FlightId,
    /// Flight number, e.g. `AA101`.
    pub flight_number: String,
    /// Flight type foreign key.
    pub flight_type_id: FlightTypeId,
    /// Departure date.
    pub departure_date: NaiveDate,
    /// Seats offered by the flight's aircraft type.
    pub seats: u32,
}

/// A sold seat on one flight instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    /// Booking ID.
    pub id: Uuid,
    /// Booked flight.
    pub flight_id: FlightId,
    /// Price paid.
    pub price: Decimal,
}

// ============================================================================
// Results
// ============================================================================

/// Tickets sold report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketsSoldReport {
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// `<type>: <value>` or `All Flights`.
    pub filter_description: String,
    /// Number of bookings.
    pub tickets_sold: u64,
}

/// Seat occupation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupationReport {
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// Number of bookings.
    pub tickets_sold: u64,
    /// Seats offered across all qualifying flight instances.
    pub total_seats_available: u64,
    /// Occupation percentage, one decimal place.
    pub occupation_rate: Decimal,
}

impl OccupationReport {
    /// Formats the occupation rate as `<n.n>%`.
    #[must_use]
    pub fn occupation_rate_display(&self) -> String {
        format!("{:.1}%", self.occupation_rate)
    }
}

/// Sales report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesReport {
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// Sum of booking prices.
    pub total_sales: Decimal,
}

/// Generated report, one variant per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportResult {
    /// Tickets sold.
    TicketsSold(TicketsSoldReport),
    /// Seat occupation.
    Occupation(OccupationReport),
    /// Sum of sales.
    Sales(SalesReport),
}

impl ReportResult {
    /// Returns the category this report answers.
    #[must_use]
    pub const fn category(&self) -> ReportCategory {
        match self {
            Self::TicketsSold(_) => ReportCategory::TicketsSold,
            Self::Occupation(_) => ReportCategory::Occupation,
            Self::Sales(_) => ReportCategory::Sales,
        }
    }

    /// Returns the period as `<start> to <end>`.
    #[must_use]
    pub fn period_label(&self) -> String {
        let (start, end) = match self {
            Self::TicketsSold(r) => (r.period_start, r.period_end),
            Self::Occupation(r) => (r.period_start, r.period_end),
            Self::Sales(r) => (r.period_start, r.period_end),
        };
        format!("{start} to {end}")
    }
}
