pub mod aggregator;
pub mod bulk;
pub mod cache;
pub mod search;
pub mod suggestions;

pub use aggregator::PriceAggregator;
pub use bulk::{
    extract_domains,
    normalize_domains,
    BulkPipeline,
    ExtractedDomains,
};
pub use cache::{
    ResultCache,
    DEFAULT_CACHE_TTL,
};
pub use search::SearchService;
pub use suggestions::{
    fallback_suggestions,
    SuggestionError,
    SuggestionProvider,
    SuggestionService,
};
