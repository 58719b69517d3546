use axum::{
    extract::State,
    routing::{
        delete,
        get,
    },
    Json,
    Router,
};
use serde::Serialize;

use crate::error::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub entries: usize,
    pub default_ttl_secs: u64,
}

#[derive(Debug, Serialize)]
pub struct CacheClearResponse {
    pub cleared: usize,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cache/stats", get(get_cache_stats))
        .route("/cache", delete(clear_cache))
}

async fn get_cache_stats(State(state): State<AppState>) -> Json<ApiResponse<CacheStats>> {
    let cache = &state.core.cache;
    ApiResponse::ok(CacheStats {
        entries: cache.len(),
        default_ttl_secs: cache.default_ttl().as_secs(),
    })
}

async fn clear_cache(State(state): State<AppState>) -> Json<ApiResponse<CacheClearResponse>> {
    let cleared = state.core.cache.clear();
    tracing::info!(cleared, "Cleared result cache");
    ApiResponse::ok(CacheClearResponse { cleared })
}
