pub mod config;
pub mod suggestion_client;

pub use config::{
    ConfigLoadError,
    ConfigLoader,
    DomainScoutConfig,
};
pub use suggestion_client::OpenAiSuggestionProvider;
