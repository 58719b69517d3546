pub mod adapter;
pub mod domain;
pub mod error;
pub mod registry;
pub mod schema;
pub mod types;
pub mod utils;

pub use adapter::{
    AdapterMetadata,
    CachePolicy,
    RegistrarAdapter,
};
pub use domain::{
    DomainName,
    DomainNameError,
    MAX_DOMAIN_LENGTH,
};
pub use error::{
    AdapterError,
    AdapterResult,
};
pub use registry::AdapterRegistry;
pub use schema::{
    SettingField,
    SettingFieldType,
    SettingsSchema,
};
pub use types::{
    QuoteErrorKind,
    RegistrarQuote,
    DEFAULT_CURRENCY,
};
pub use utils::{
    ensure_crypto_provider,
    RetryPolicy,
};
