//! SQL translation tests for report queries.

use chrono::NaiveDate;
use rstest::rstest;
use sea_orm::{DbBackend, QueryTrait};

use aerodesk_core::reports::{
    DateRange, ReportCategory, ReportFilter, ReportPredicate, ReportRequest,
};
use aerodesk_shared::types::FlightTypeId;

use super::*;

fn predicate(filter: Option<ReportFilter>) -> ReportPredicate {
    let period = DateRange::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    )
    .unwrap();
    let mut request = ReportRequest::new(ReportCategory::TicketsSold, period);
    if let Some(filter) = filter {
        request = request.with_filter(filter);
    }
    ReportPredicate::for_request(&request)
}

fn sql(select: impl QueryTrait) -> String {
    select.build(DbBackend::Postgres).to_string()
}

#[test]
fn test_unfiltered_condition_is_date_range_only() {
    let sql = sql(bookings_on_matching_flights(&predicate(None)));

    assert!(sql.contains(r#""flights"."departure_date" BETWEEN '2025-01-01' AND '2025-01-31'"#));
    assert!(!sql.contains("flight_number"));
    assert!(!sql.contains("flight_type_id\" ="));
}

#[rstest]
#[case::by_number(
    ReportFilter::FlightNumber("AA101".to_string()),
    r#""flights"."flight_number" = 'AA101'"#,
    "flight_type_id\" ="
)]
#[case::by_type(
    ReportFilter::FlightType(FlightTypeId::new(5)),
    r#""flights"."flight_type_id" = 5"#,
    "flight_number\" ="
)]
fn test_filter_adds_exactly_one_clause(
    #[case] filter: ReportFilter,
    #[case] expected: &str,
    #[case] absent: &str,
) {
    let sql = sql(bookings_on_matching_flights(&predicate(Some(filter))));

    assert!(sql.contains("BETWEEN '2025-01-01' AND '2025-01-31'"));
    assert!(sql.contains(expected), "missing {expected} in {sql}");
    assert!(!sql.contains(absent), "unexpected {absent} in {sql}");
    assert_eq!(sql.matches(" AND ").count(), 2);
}

#[test]
fn test_bookings_reach_flights_through_inner_join() {
    let sql = sql(bookings_on_matching_flights(&predicate(None)));

    assert!(sql.contains(r#"INNER JOIN "flights" ON "bookings"."flight_id" = "flights"."id""#));
}

#[test]
fn test_seat_sum_counts_each_flight_row() {
    let sql = sql(seats_on_matching_flights(&predicate(None)));

    assert!(sql.starts_with(r#"SELECT SUM("aircraft_types"."seats") AS "total_seats" FROM "flights""#));
    assert!(sql.contains(
        r#"INNER JOIN "aircraft_types" ON "flights"."aircraft_type_id" = "aircraft_types"."id""#
    ));
    assert!(!sql.contains("bookings"));
}

#[test]
fn test_price_sum_uses_same_condition() {
    let filter = ReportFilter::FlightNumber("AA101".to_string());
    let sql = sql(prices_on_matching_flights(&predicate(Some(filter))));

    assert!(sql.starts_with(r#"SELECT SUM("bookings"."price") AS "total_sales" FROM "bookings""#));
    assert!(sql.contains(r#""flights"."flight_number" = 'AA101'"#));
}
