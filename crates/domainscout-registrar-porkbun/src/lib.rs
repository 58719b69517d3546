//! Porkbun adapter for DomainScout
//!
//! Checks availability and pricing through Porkbun's JSON API v3:
//! - `domain/checkDomain/{domain}` for availability and first-year price
//! - `pricing/get` for TLD list prices when the check carries none
//!
//! # Architecture
//!
//! - `adapter` - `RegistrarAdapter` implementation
//! - `client` - HTTP client and API methods
//! - `types` - API response types
//! - `mapper` - Response to quote mapping
//! - `config` - Settings parsing
//! - `metadata` - Adapter metadata and settings schema
//!
//! # Example Usage
//!
//! ```no_run
//! use domainscout_registrar_api::AdapterRegistry;
//! use domainscout_registrar_porkbun::PorkbunAdapter;
//!
//! let mut registry = AdapterRegistry::new();
//! registry.register(Box::new(PorkbunAdapter::new()));
//! ```

mod adapter;
mod client;
mod config;
mod mapper;
mod metadata;
mod types;

pub use adapter::PorkbunAdapter;
