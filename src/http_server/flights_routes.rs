//! Flights HTTP Routes
//!
//! Listing, catalog and quote endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};

use super::errors::{ApiError, ApiResult};
use super::response::{DataResponse, ListResponse};
use crate::catalog::{self, Aircraft, Airport};
use crate::generator::{Flight, FlightGenerator, GeneratorConfig};
use crate::quote::{self, Quote, QuoteRequest};
use crate::search::{self, FlightQuery};

// ==================
// Shared State
// ==================

/// Flights state shared across handlers. Read-only.
#[derive(Debug, Default)]
pub struct FlightsState {
    pub generator: FlightGenerator,
}

impl FlightsState {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            generator: FlightGenerator::new(config),
        }
    }
}

// ==================
// Flights Routes
// ==================

/// Create flights routes. Wrong methods on known paths fall through to
/// the 404 handler.
pub fn flights_routes(state: Arc<FlightsState>) -> Router {
    Router::new()
        .route(
            "/flights",
            get(list_flights_handler).fallback(not_found_handler),
        )
        .route(
            "/airports",
            get(list_airports_handler).fallback(not_found_handler),
        )
        .route(
            "/aircraft",
            get(list_aircraft_handler).fallback(not_found_handler),
        )
        .route("/quote", post(quote_handler).fallback(not_found_handler))
        .with_state(state)
}

/// Fallback for unknown paths and methods
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

// ==================
// Handlers
// ==================

async fn list_flights_handler(
    State(state): State<Arc<FlightsState>>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<ListResponse<Flight>>> {
    let Query(params) = params.map_err(|e| ApiError::InvalidQueryParam(e.body_text()))?;
    let query = FlightQuery::parse(&params);

    let mut rng = state.generator.rng();
    let flights = state.generator.generate(&mut rng, Utc::now().date_naive());
    let generated = flights.len();

    let flights = search::apply(flights, &query);
    info!(generated, listed = flights.len(), "listed flights");

    Ok(Json(ListResponse::new(flights)))
}

async fn list_airports_handler() -> Json<DataResponse<&'static [Airport]>> {
    Json(DataResponse::new(catalog::airports()))
}

async fn list_aircraft_handler() -> Json<DataResponse<&'static [Aircraft]>> {
    Json(DataResponse::new(catalog::aircraft()))
}

async fn quote_handler(body: Bytes) -> ApiResult<Json<DataResponse<Quote>>> {
    let request: QuoteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "unreadable quote body");
        ApiError::Internal(e.to_string())
    })?;

    let quote = quote::compute(&request).map_err(|e| {
        warn!(error = %e, "rejected quote request");
        ApiError::from(e)
    })?;

    info!(
        origin = quote.origin.id,
        destination = quote.destination.id,
        aircraft = quote.aircraft.id,
        total_price = quote.total_price,
        "quoted charter"
    );
    Ok(Json(DataResponse::new(quote)))
}
