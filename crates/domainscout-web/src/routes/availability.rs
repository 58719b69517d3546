use axum::{
    extract::{
        Path,
        State,
    },
    routing::get,
    Json,
    Router,
};
use domainscout_core::domain::{
    AggregatedResult,
    DomainError,
};
use domainscout_registrar_api::DomainName;

use crate::error::{
    ApiResponse,
    ApiResult,
};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/availability/{domain}", get(check_availability))
}

async fn check_availability(
    State(state): State<AppState>, Path(domain): Path<String>,
) -> ApiResult<Json<ApiResponse<AggregatedResult>>> {
    let domain = DomainName::parse(&domain).map_err(DomainError::from)?;
    let result = state.core.aggregator.compare_prices(&domain).await;
    Ok(ApiResponse::ok(result))
}
