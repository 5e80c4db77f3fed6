//! Keyed registry of pooled SQL connections with row-scanning helpers.
//!
//! The registry caches one Postgres pool per logical key, created lazily and
//! kept for the life of the process. Query helpers look the handle up and
//! delegate to the driver, converting rows through caller-supplied mappers.

// Re-export core modules
pub mod binder;
pub mod client;
pub mod config;
pub mod error;
pub mod registry;
pub mod value;

// Re-export common types and helpers
pub use binder::{bind_columns, required, ColumnBinder};
pub use client::Client;
pub use config::{ClientConfig, Driver, DEFAULT_MAX_CONN_LIFE, MAX_CONN_LIFE_ENV};
pub use error::{Error, Result};
pub use registry::{execute, get, init, query, query_row};
pub use value::Value;
