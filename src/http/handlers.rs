//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    CreateSessionResponse, FleetSearchRequest, HealthResponse, QuoteRequest, RewardsQuery,
    RewardsResponse, SaveSessionRequest, SessionListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{AircraftId, AircraftProfile, CheckoutOrder, CheckoutReceipt, RouteItinerary, SessionId};
use crate::db::services as db_services;
use crate::routes::fleet::{build_fleet_data, FleetData};
use crate::routes::quote::{build_quote_breakdown, QuoteBreakdown};
use crate::services::rates::RateSource;
use crate::services::rewards::reward_tokens;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the session
/// store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match db_services::health_check(state.store.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
        fleet_size: state.catalog.len(),
    }))
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /v1/fleet
///
/// List the full selectable aircraft catalog.
pub async fn list_fleet(State(state): State<AppState>) -> HandlerResult<Vec<AircraftProfile>> {
    Ok(Json(state.catalog.entries().to_vec()))
}

/// GET /v1/fleet/{aircraft_id}
///
/// Fetch a single catalog entry.
pub async fn get_aircraft(
    State(state): State<AppState>,
    Path(aircraft_id): Path<String>,
) -> HandlerResult<AircraftProfile> {
    let id = AircraftId::new(aircraft_id);
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("unknown aircraft '{}'", id)))
}

// =============================================================================
// Quote & Fleet Search
// =============================================================================

/// POST /v1/quotes
///
/// Compute a full quote for an itinerary and a chosen aircraft.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> HandlerResult<QuoteBreakdown> {
    let itinerary = RouteItinerary::new(request.waypoints, request.round_trip);
    let currency = request.currency.as_deref().unwrap_or("USD");

    let breakdown = build_quote_breakdown(
        &state.catalog,
        state.rates.as_ref(),
        &itinerary,
        &request.aircraft_id,
        currency,
    )?;

    Ok(Json(breakdown))
}

/// POST /v1/fleet/search
///
/// Rank the catalog against an itinerary and the user's filters.
pub async fn search_fleet(
    State(state): State<AppState>,
    Json(request): Json<FleetSearchRequest>,
) -> HandlerResult<FleetData> {
    let itinerary = RouteItinerary::new(request.waypoints, request.round_trip);

    let data = build_fleet_data(
        &state.catalog,
        &itinerary,
        request.min_capacity,
        &request.filters,
    )?;

    Ok(Json(data))
}

/// GET /v1/rewards?distance_km=...
///
/// Preview the loyalty tokens earned for a quoted distance.
pub async fn rewards_preview(
    Query(query): Query<RewardsQuery>,
) -> HandlerResult<RewardsResponse> {
    if query.distance_km < 0.0 || !query.distance_km.is_finite() {
        return Err(AppError::BadRequest(format!(
            "distance_km must be a non-negative number, got {}",
            query.distance_km
        )));
    }

    Ok(Json(RewardsResponse {
        distance_km: query.distance_km,
        reward_tokens: reward_tokens(query.distance_km),
    }))
}

// =============================================================================
// Session CRUD
// =============================================================================

/// GET /v1/sessions
///
/// List known booking sessions.
pub async fn list_sessions(State(state): State<AppState>) -> HandlerResult<SessionListResponse> {
    let sessions = db_services::list_sessions(state.store.as_ref()).await?;
    let total = sessions.len();

    Ok(Json(SessionListResponse { sessions, total }))
}

/// POST /v1/sessions
///
/// Create a new booking session with an initial selection.
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<SaveSessionRequest>,
) -> Result<(axum::http::StatusCode, Json<CreateSessionResponse>), AppError> {
    let session_id = SessionId::new(uuid::Uuid::new_v4().to_string());

    let snapshot =
        db_services::save_selection(state.store.as_ref(), &session_id, &request.selection).await?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id: session_id.as_str().to_string(),
            snapshot,
        }),
    ))
}

/// GET /v1/sessions/{session_id}
///
/// Load a session's last saved selection.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<crate::db::models::SessionSnapshot> {
    let id = SessionId::new(session_id);
    let snapshot = db_services::load_selection(state.store.as_ref(), &id).await?;
    Ok(Json(snapshot))
}

/// PUT /v1/sessions/{session_id}
///
/// Save (upsert) a session's selection.
pub async fn put_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<SaveSessionRequest>,
) -> HandlerResult<crate::db::models::SessionSnapshot> {
    let id = SessionId::new(session_id);
    let snapshot =
        db_services::save_selection(state.store.as_ref(), &id, &request.selection).await?;
    Ok(Json(snapshot))
}

/// DELETE /v1/sessions/{session_id}
///
/// Clear a session's selection.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<axum::http::StatusCode, AppError> {
    let id = SessionId::new(session_id);
    db_services::clear_selection(state.store.as_ref(), &id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

// =============================================================================
// Checkout
// =============================================================================

/// POST /v1/checkout
///
/// Hand the final order to the payment collaborator.
pub async fn submit_checkout(
    State(state): State<AppState>,
    Json(order): Json<CheckoutOrder>,
) -> HandlerResult<CheckoutReceipt> {
    // The settlement currency must be one the rate table can display.
    if state.rates.rate(&order.currency).is_none() {
        return Err(AppError::BadRequest(format!(
            "unsupported settlement currency '{}'",
            order.currency
        )));
    }

    let receipt = state.gateway.submit(&order).await?;
    Ok(Json(receipt))
}
