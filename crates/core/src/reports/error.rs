//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Boxed error from the data-access collaborator.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Category is not one of `tickets`, `occupation`, `sales`.
    #[error("Invalid report category: {0}")]
    InvalidCategory(String),

    /// Filter type is not one of `type`, `number`.
    #[error("Invalid filter type: {0}")]
    InvalidFilterType(String),

    /// Filter value cannot be used with its filter type.
    #[error("Invalid filter value: {0}")]
    InvalidFilterValue(String),

    /// Start date is after end date.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// The data source failed.
    #[error("Data access failed: {0}")]
    DataAccess(#[source] SourceError),
}

impl ReportError {
    /// Wraps a data source error.
    pub fn data_access(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::DataAccess(Box::new(err))
    }

    /// Returns true when the request itself was at fault.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::DataAccess(_))
    }
}
