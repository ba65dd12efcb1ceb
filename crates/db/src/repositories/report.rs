//! Report repository: aggregate queries over flights and bookings.

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QuerySelect, RelationTrait, Select, sea_query::Expr,
};
use tracing::error;

use aerodesk_core::reports::{FlightClause, ReportDataSource, ReportError, ReportPredicate};

use crate::entities::{aircraft_types, bookings, flights};

/// Report repository backed by Postgres.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReportDataSource for ReportRepository {
    async fn count_bookings(&self, predicate: &ReportPredicate) -> Result<u64, ReportError> {
        bookings_on_matching_flights(predicate)
            .count(&self.db)
            .await
            .map_err(query_failed)
    }

    async fn sum_seats(&self, predicate: &ReportPredicate) -> Result<u64, ReportError> {
        let total: Option<i64> = seats_on_matching_flights(predicate)
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(query_failed)?
            .flatten();

        u64::try_from(total.unwrap_or(0)).map_err(ReportError::data_access)
    }

    async fn sum_booking_prices(&self, predicate: &ReportPredicate) -> Result<Decimal, ReportError> {
        let total: Option<Decimal> = prices_on_matching_flights(predicate)
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(query_failed)?
            .flatten();

        Ok(total.unwrap_or(Decimal::ZERO))
    }
}

/// Translates the predicate into a condition on `flights` columns.
pub(crate) fn flight_condition(predicate: &ReportPredicate) -> Condition {
    predicate
        .clauses()
        .iter()
        .fold(Condition::all(), |condition, clause| match clause {
            FlightClause::DepartureBetween { start, end } => {
                condition.add(flights::Column::DepartureDate.between(*start, *end))
            }
            FlightClause::FlightNumberEquals(number) => {
                condition.add(flights::Column::FlightNumber.eq(number.as_str()))
            }
            FlightClause::FlightTypeEquals(type_id) => {
                condition.add(flights::Column::FlightTypeId.eq(type_id.into_inner()))
            }
        })
}

/// Bookings joined to their flight, restricted by the predicate.
pub(crate) fn bookings_on_matching_flights(predicate: &ReportPredicate) -> Select<bookings::Entity> {
    bookings::Entity::find()
        .join(JoinType::InnerJoin, bookings::Relation::Flights.def())
        .filter(flight_condition(predicate))
}

/// `SUM(aircraft_types.seats)` over matching flight rows.
pub(crate) fn seats_on_matching_flights(predicate: &ReportPredicate) -> Select<flights::Entity> {
    flights::Entity::find()
        .join(JoinType::InnerJoin, flights::Relation::AircraftTypes.def())
        .filter(flight_condition(predicate))
        .select_only()
        .column_as(
            Expr::col((aircraft_types::Entity, aircraft_types::Column::Seats)).sum(),
            "total_seats",
        )
}

/// `SUM(bookings.price)` over bookings on matching flights.
pub(crate) fn prices_on_matching_flights(predicate: &ReportPredicate) -> Select<bookings::Entity> {
    bookings_on_matching_flights(predicate)
        .select_only()
        .column_as(
            Expr::col((bookings::Entity, bookings::Column::Price)).sum(),
            "total_sales",
        )
}

fn query_failed(e: DbErr) -> ReportError {
    error!(error = %e, "Report query failed");
    ReportError::data_access(e)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
