mod availability;
mod bulk;
mod cache;
pub mod health;
mod registrars;
mod search;

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{
    Any,
    CorsLayer,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn api_router(upload_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(bulk::router(upload_limit))
        .merge(availability::router())
        .merge(search::router())
        .merge(registrars::router())
        .merge(cache::router())
}

/// Full application: `/api/v1` routes plus tracing and CORS layers
pub fn app_router(state: AppState) -> Router {
    let server = &state.core.config.server;

    Router::new()
        .nest("/api/v1", api_router(server.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(if server.cors_allow_all {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
        })
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::to_bytes;
    use axum::response::Response;
    use axum::Router;
    use domainscout_core::{
        CoreContext,
        DomainScoutConfig,
    };
    use domainscout_registrar_api::{
        AdapterMetadata,
        AdapterRegistry,
        AdapterResult,
        DomainName,
        RegistrarAdapter,
        RegistrarQuote,
        SettingsSchema,
    };

    use super::app_router;
    use crate::state::AppState;

    /// Registrar that always answers with the same quote
    pub struct Fixed {
        metadata: AdapterMetadata,
        available: bool,
        price: f64,
        enabled: bool,
    }

    impl Fixed {
        pub fn new(name: &str, available: bool, price: f64) -> Self {
            Self {
                metadata: AdapterMetadata {
                    name: name.to_string(),
                    registrar_id: name.to_lowercase(),
                    version: "0.0.0".to_string(),
                    description: format!("{name} fixed quotes"),
                    website: None,
                    settings_schema: SettingsSchema::new(),
                },
                available,
                price,
                enabled: true,
            }
        }

        pub fn disabled(mut self) -> Self {
            self.enabled = false;
            self
        }
    }

    #[async_trait]
    impl RegistrarAdapter for Fixed {
        fn metadata(&self) -> &AdapterMetadata {
            &self.metadata
        }

        fn initialize(&mut self, _settings: HashMap<String, String>) -> AdapterResult<()> {
            Ok(())
        }

        fn enabled(&self) -> bool {
            self.enabled
        }

        async fn lookup(&self, _domain: &DomainName) -> AdapterResult<RegistrarQuote> {
            Ok(RegistrarQuote::priced(
                self.name(),
                self.available,
                self.price,
                "USD",
            ))
        }
    }

    pub fn app(adapters: Vec<Fixed>) -> Router {
        let mut registry = AdapterRegistry::new();
        for adapter in adapters {
            registry.register(Box::new(adapter));
        }

        let core = CoreContext::with_registry(Arc::new(registry), DomainScoutConfig::default());
        app_router(AppState::new(core))
    }

    pub async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
