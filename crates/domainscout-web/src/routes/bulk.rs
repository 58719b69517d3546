use axum::{
    extract::{
        DefaultBodyLimit,
        FromRequest,
        Multipart,
        Request,
        State,
    },
    http::header::CONTENT_TYPE,
    routing::post,
    Json,
    Router,
};
use domainscout_core::domain::{
    BulkInput,
    BulkReport,
};
use serde::Deserialize;

use crate::error::{
    ApiResponse,
    ApiResult,
    AppError,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct BulkRequest {
    #[serde(default)]
    domains: Option<Vec<String>>,
    #[serde(default)]
    text: Option<String>,
}

impl BulkRequest {
    fn into_input(self) -> BulkInput {
        match (self.domains, self.text) {
            (Some(domains), _) => BulkInput::Domains(domains),
            (None, Some(text)) => BulkInput::Text(text),
            (None, None) => BulkInput::Domains(Vec::new()),
        }
    }
}

pub fn router(upload_limit: usize) -> Router<AppState> {
    Router::new().route(
        "/availability/bulk",
        post(bulk_availability).layer(DefaultBodyLimit::max(upload_limit)),
    )
}

async fn bulk_availability(
    State(state): State<AppState>, request: Request,
) -> ApiResult<Json<ApiResponse<BulkReport>>> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let input = if content_type.contains("application/json") {
        let Json(body) = Json::<BulkRequest>::from_request(request, &state).await?;
        body.into_input()
    } else if content_type.contains("multipart/form-data") {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        read_multipart(multipart).await?
    } else if content_type.contains("text/plain") {
        let text = String::from_request(request, &state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        BulkInput::Text(text)
    } else {
        return Err(AppError::bad_request("Unsupported content type"));
    };

    let report = state.core.bulk.process(input).await?;
    Ok(ApiResponse::ok(report))
}

/// Reads the `file` and `text` parts; the file wins when both are present
async fn read_multipart(mut multipart: Multipart) -> ApiResult<BulkInput> {
    let mut file = None;
    let mut text = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name != "file" && name != "text" {
            continue;
        }

        let content = field
            .text()
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        if name == "file" {
            file = Some(content);
        } else {
            text = Some(content);
        }
    }

    Ok(BulkInput::Text(file.or(text).unwrap_or_default()))
}
