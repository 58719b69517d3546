pub mod bulk;
pub mod comparison;
pub mod error;
pub mod search;

pub use bulk::{
    BulkInput,
    BulkReport,
};
pub use comparison::{
    rank_quotes,
    AggregatedResult,
    BestOffer,
};
pub use error::{
    DomainError,
    DomainResult,
};
pub use search::{
    DomainSuggestion,
    PricingInfo,
    SearchQuery,
    SearchResult,
    SuggestionCategory,
};
