//! `/api/author/` handler.

use axum::Json;

use tally_core::api::AuthorInfo;

const AUTHOR: &str = "tally maintainers";

/// GET /api/author/
pub async fn author() -> Json<AuthorInfo> {
    Json(AuthorInfo { author: AUTHOR.to_string() })
}
