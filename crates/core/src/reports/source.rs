//! Data-access seam for report generation.

use rust_decimal::Decimal;

use super::error::ReportError;
use super::predicate::ReportPredicate;

/// Read-only aggregate queries over flights and bookings.
///
/// This trait is implemented by the db crate to provide actual database queries.
/// Every method applies the predicate to flight attributes; bookings are reached
/// through their flight.
pub trait ReportDataSource: Send + Sync {
    /// Counts bookings whose flight satisfies the predicate.
    fn count_bookings(
        &self,
        predicate: &ReportPredicate,
    ) -> impl std::future::Future<Output = Result<u64, ReportError>> + Send;

    /// Sums aircraft seats over flights satisfying the predicate, once per flight row.
    fn sum_seats(
        &self,
        predicate: &ReportPredicate,
    ) -> impl std::future::Future<Output = Result<u64, ReportError>> + Send;

    /// Sums booking prices for bookings whose flight satisfies the predicate.
    fn sum_booking_prices(
        &self,
        predicate: &ReportPredicate,
    ) -> impl std::future::Future<Output = Result<Decimal, ReportError>> + Send;
}
