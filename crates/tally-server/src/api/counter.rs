//! Counter route handlers.
//!
//! All four delegate to the injected store; the floor check in decrement is
//! atomic on the store side, so a rejected decrement never changes the value.

use axum::extract::State;
use axum::Json;

use tally_core::api::CounterValue;

use crate::api::ApiError;
use crate::state::AppState;

/// GET /api/counter
pub async fn read(State(state): State<AppState>) -> Result<Json<CounterValue>, ApiError> {
    let value = state.store().get().await?;
    Ok(Json(CounterValue { value }))
}

/// POST /api/counter/increment
pub async fn increment(State(state): State<AppState>) -> Result<Json<CounterValue>, ApiError> {
    let value = state.store().increment().await?;
    Ok(Json(CounterValue { value }))
}

/// POST /api/counter/decrement
///
/// 400 with "Counter cannot be negative" when the counter is already 0.
pub async fn decrement(State(state): State<AppState>) -> Result<Json<CounterValue>, ApiError> {
    let value = state.store().decrement().await?;
    Ok(Json(CounterValue { value }))
}

/// POST /api/counter/reset
pub async fn reset(State(state): State<AppState>) -> Result<Json<CounterValue>, ApiError> {
    let value = state.store().reset().await?;
    Ok(Json(CounterValue { value }))
}
