use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

pub const DEFAULT_LOG_FILTER: &str =
    "domainscout=info,domainscout_core=info,domainscout_web=info,tower_http=info";

pub fn init() {
    init_with_default(DEFAULT_LOG_FILTER);
}

/// `RUST_LOG` takes precedence over `default_filter`
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
