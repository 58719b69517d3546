use axum::{
    extract::{
        Path,
        State,
    },
    routing::get,
    Json,
    Router,
};
use domainscout_core::adapters::get_all_adapter_metadata;
use domainscout_registrar_api::{
    AdapterMetadata,
    RegistrarAdapter,
    SettingField,
};
use serde::Serialize;

use crate::error::{
    ApiResponse,
    ApiResult,
    AppError,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// False when credentials are missing or settings failed validation
    pub enabled: bool,
    pub settings: Vec<SettingField>,
}

impl RegistrarInfo {
    fn from_adapter(adapter: &dyn RegistrarAdapter) -> Self {
        let metadata = adapter.metadata();
        Self {
            id: metadata.registrar_id.clone(),
            name: metadata.name.clone(),
            description: metadata.description.clone(),
            website: metadata.website.clone(),
            enabled: adapter.enabled(),
            settings: metadata.settings_schema.fields.clone(),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/registrars", get(list_registrars))
        .route("/registrars/types", get(list_registrar_types))
        .route("/registrars/{id}", get(get_registrar))
}

async fn list_registrars(State(state): State<AppState>) -> Json<ApiResponse<Vec<RegistrarInfo>>> {
    let registrars = state
        .core
        .registry
        .all()
        .iter()
        .map(|adapter| RegistrarInfo::from_adapter(adapter.as_ref()))
        .collect();

    ApiResponse::ok(registrars)
}

async fn get_registrar(
    State(state): State<AppState>, Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<RegistrarInfo>>> {
    let adapter = state
        .core
        .registry
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("Registrar '{id}' is not configured")))?;

    Ok(ApiResponse::ok(RegistrarInfo::from_adapter(adapter.as_ref())))
}

/// Every registrar type the server can build, configured or not
async fn list_registrar_types() -> Json<ApiResponse<Vec<AdapterMetadata>>> {
    ApiResponse::ok(get_all_adapter_metadata())
}
