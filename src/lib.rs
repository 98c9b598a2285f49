//! Artifact registry metadata - response mapping layer.
//!
//! Converts storage-layer records (artifacts, tags, manifests, file nodes)
//! into the JSON response shapes served by the registry HTTP API: paginated
//! list envelopes, pull/download commands, checksums, and size/time display
//! strings. Persistence and transport live in the surrounding services; every
//! function here is a pure transformation over its inputs.

pub mod api;
pub mod config;
pub mod error;
pub mod formats;
pub mod models;
pub mod url;

pub use config::Config;
pub use error::{AppError, Result};
