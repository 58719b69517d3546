use axum::{
    extract::State,
    Json,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub registrars: usize,
    pub enabled_registrars: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let registry = &state.core.registry;

    ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        registrars: registry.len(),
        enabled_registrars: registry.enabled_count(),
    })
}
