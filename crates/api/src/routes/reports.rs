//! Report routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::{AppState, error::ApiError, middleware::AuthUser};
use aerodesk_core::reports::{ReportInput, ReportResult, ReportService};
use aerodesk_db::ReportRepository;

/// Creates the report routes (session and admin middleware applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports", post(generate_report))
}

// ============================================================================
// Response Types
// ============================================================================

/// Report response body, shaped per category.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportResponse {
    /// Tickets sold.
    #[serde(rename_all = "camelCase")]
    TicketsSold {
        /// `Tickets Sold`.
        category: &'static str,
        /// `<start> to <end>`.
        period: String,
        /// Number of bookings.
        tickets_sold: u64,
        /// Filter description or `All Flights`.
        filter: String,
    },
    /// Seat occupation.
    #[serde(rename_all = "camelCase")]
    Occupation {
        /// `Seats Occupation`.
        category: &'static str,
        /// `<start> to <end>`.
        period: String,
        /// Number of bookings.
        tickets_sold: u64,
        /// Seats offered.
        total_seats_available: u64,
        /// `<n.n>%`.
        occupation_rate: String,
    },
    /// Sum of sales.
    #[serde(rename_all = "camelCase")]
    Sales {
        /// `Sum of Sales`.
        category: &'static str,
        /// `<start> to <end>`.
        period: String,
        /// Sum of booking prices, as a JSON number.
        #[serde(with = "rust_decimal::serde::float")]
        total_sales: Decimal,
    },
}

impl From<ReportResult> for ReportResponse {
    fn from(result: ReportResult) -> Self {
        let category = result.category().label();
        let period = result.period_label();

        match result {
            ReportResult::TicketsSold(r) => Self::TicketsSold {
                category,
                period,
                tickets_sold: r.tickets_sold,
                filter: r.filter_description,
            },
            ReportResult::Occupation(r) => Self::Occupation {
                category,
                period,
                tickets_sold: r.tickets_sold,
                total_seats_available: r.total_seats_available,
                occupation_rate: r.occupation_rate_display(),
            },
            ReportResult::Sales(r) => Self::Sales {
                category,
                period,
                total_sales: r.total_sales,
            },
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /reports - Generate a report.
async fn generate_report(
    State(state): State<AppState>,
    auth_user: AuthUser,
    payload: Result<Json<ReportInput>, JsonRejection>,
) -> Result<Json<ReportResponse>, ApiError> {
    let Json(input) = payload?;

    info!(
        user_id = %auth_user.user_id(),
        category = %input.category,
        "Report requested"
    );

    let service = ReportService::new(Arc::new(ReportRepository::new((*state.db).clone())));
    let report = service.generate_from_input(input).await?;

    Ok(Json(report.into()))
}
