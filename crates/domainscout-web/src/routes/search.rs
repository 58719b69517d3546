use axum::{
    extract::{
        rejection::JsonRejection,
        State,
    },
    routing::post,
    Json,
    Router,
};
use domainscout_core::domain::{
    SearchQuery,
    SearchResult,
};

use crate::error::{
    ApiResponse,
    ApiResult,
    AppError,
};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/search", post(search).get(search_get))
}

async fn search(
    State(state): State<AppState>, payload: Result<Json<SearchQuery>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<SearchResult>>> {
    let Json(query) = payload?;
    let result = state.core.search.search(query).await?;
    Ok(ApiResponse::ok(result))
}

async fn search_get() -> AppError {
    AppError::method_not_allowed("Method not allowed. Use POST to search for domains.")
}
