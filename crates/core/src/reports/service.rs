//! Report generation service.

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::error::ReportError;
use super::predicate::ReportPredicate;
use super::source::ReportDataSource;
use super::types::{
    OccupationReport, ReportCategory, ReportInput, ReportRequest, ReportResult, SalesReport,
    TicketsSoldReport,
};

/// Service for generating airline reports.
pub struct ReportService<S: ReportDataSource> {
    source: Arc<S>,
}

impl<S: ReportDataSource> ReportService<S> {
    /// Creates a new report service over a data source.
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Validates a raw request and generates the report.
    ///
    /// Validation happens before any query is issued.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad category, filter, or date range,
    /// or `DataAccess` if the data source fails.
    pub async fn generate_from_input(&self, input: ReportInput) -> Result<ReportResult, ReportError> {
        let request = ReportRequest::try_from(input)?;
        self.generate(&request).await
    }

    /// Generates the report for a validated request.
    ///
    /// # Errors
    ///
    /// Returns `DataAccess` if the data source fails.
    pub async fn generate(&self, request: &ReportRequest) -> Result<ReportResult, ReportError> {
        let predicate = ReportPredicate::for_request(request);

        let report = match request.category {
            ReportCategory::TicketsSold => {
                ReportResult::TicketsSold(self.tickets_sold(request, &predicate).await?)
            }
            ReportCategory::Occupation => {
                ReportResult::Occupation(self.occupation(request, &predicate).await?)
            }
            ReportCategory::Sales => ReportResult::Sales(self.sales(request, &predicate).await?),
        };

        debug!(
            category = request.category.code(),
            period = %request.period,
            filter = %request.filter_description(),
            "Generated report"
        );

        Ok(report)
    }

    async fn tickets_sold(
        &self,
        request: &ReportRequest,
        predicate: &ReportPredicate,
    ) -> Result<TicketsSoldReport, ReportError> {
        let tickets_sold = self.source.count_bookings(predicate).await?;

        Ok(TicketsSoldReport {
            period_start: request.period.start,
            period_end: request.period.end,
            filter_description: request.filter_description(),
            tickets_sold,
        })
    }

    async fn occupation(
        &self,
        request: &ReportRequest,
        predicate: &ReportPredicate,
    ) -> Result<OccupationReport, ReportError> {
        let tickets_sold = self.source.count_bookings(predicate).await?;
        let total_seats_available = self.source.sum_seats(predicate).await?;

        Ok(OccupationReport {
            period_start: request.period.start,
            period_end: request.period.end,
            tickets_sold,
            total_seats_available,
            occupation_rate: occupation_rate(tickets_sold, total_seats_available),
        })
    }

    async fn sales(
        &self,
        request: &ReportRequest,
        predicate: &ReportPredicate,
    ) -> Result<SalesReport, ReportError> {
        let total_sales = self.source.sum_booking_prices(predicate).await?;

        Ok(SalesReport {
            period_start: request.period.start,
            period_end: request.period.end,
            total_sales,
        })
    }
}

/// Computes `tickets_sold / total_seats * 100`, rounded to one decimal place.
///
/// Returns zero when no seats were offered. Bookings may exceed seats, so the
/// rate is not capped at 100.
#[must_use]
pub fn occupation_rate(tickets_sold: u64, total_seats: u64) -> Decimal {
    if total_seats == 0 {
        return Decimal::ZERO;
    }

    (Decimal::from(tickets_sold) * Decimal::ONE_HUNDRED / Decimal::from(total_seats))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
