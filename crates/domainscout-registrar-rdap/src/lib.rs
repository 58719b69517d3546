//! RDAP-backed registrar adapters for DomainScout
//!
//! Namecheap, GoDaddy, Cloudflare and Upflare share one backend family:
//! availability comes from a public RDAP server (`GET /domain/{domain}`,
//! `404` meaning unregistered) and prices come from configured list prices.
//! Each registrar still requires its own credentials to be enabled.
//!
//! # Architecture
//!
//! - `adapter` - `RegistrarAdapter` implementation
//! - `client` - RDAP HTTP client
//! - `config` - Settings parsing and list pricing
//! - `metadata` - Per-registrar profiles and settings schemas
//!
//! # Example Usage
//!
//! ```no_run
//! use domainscout_registrar_api::AdapterRegistry;
//! use domainscout_registrar_rdap::ListPriceAdapter;
//!
//! let mut registry = AdapterRegistry::new();
//! registry.register(Box::new(ListPriceAdapter::namecheap()));
//! registry.register(Box::new(ListPriceAdapter::cloudflare()));
//! ```

mod adapter;
mod client;
mod config;
mod metadata;

pub use adapter::ListPriceAdapter;
