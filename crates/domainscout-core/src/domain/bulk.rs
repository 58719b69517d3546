use serde::{
    Deserialize,
    Serialize,
};

use super::comparison::AggregatedResult;

/// Raw bulk input before extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkInput {
    /// Explicit list; each entry is normalized like a text token
    Domains(Vec<String>),
    /// Free text scanned for domain-shaped tokens
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReport {
    /// Domains sent to fan-out after extraction, dedup and cap
    pub total: usize,
    pub processed: usize,
    pub duration_ms: u64,
    /// Whether the cap dropped any domains
    pub truncated: bool,
    pub results: Vec<AggregatedResult>,
}
