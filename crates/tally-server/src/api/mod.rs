//! HTTP surface of the counter API.
//!
//! - `ApiError`: maps `TallyError` to an HTTP status plus the JSON error body.
//! - `ensure_counter`: router-wide layer initializing the counter key before
//!   any request is handled (the axum analog of a before-request hook).

pub mod author;
pub mod counter;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use tally_core::api::ErrorBody;
use tally_core::error::{ClientCode, TallyError};

use crate::state::AppState;

/// `TallyError` carried out of a handler.
#[derive(Debug)]
pub struct ApiError(pub TallyError);

impl From<TallyError> for ApiError {
    fn from(e: TallyError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.client_code() {
            ClientCode::NegativeCounter | ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::Store | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            warn!(code = self.0.client_code().as_str(), error = %self.0, "request failed");
        }
        let body = ErrorBody { error: self.0.client_message() };
        (status, Json(body)).into_response()
    }
}

/// Initialize the counter key to 0 if absent, on every incoming request.
pub async fn ensure_counter(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state.store().ensure_exists().await?;
    Ok(next.run(req).await)
}
