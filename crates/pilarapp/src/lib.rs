//! # pilarapp
//!
//! The UI-agnostic core of PILAR, a waste-scanning app: photograph an item,
//! have a remote service classify it (organic, inorganic, hazardous), keep the
//! result in a local history and show disposal tips and statistics.
//!
//! ## Layering
//!
//! ```text
//! api.rs          facade for UI clients
//! commands/*      scan, history, view, delete, clear, stats
//! store/*         ScanRecordStore over a KeyValueBackend (fs or memory)
//! stats.rs        counters recomputed from the store
//! classify.rs     classifier contract, response envelope, record building
//! http_client.rs  multipart upload to the classification endpoint
//! ```
//!
//! The store never surfaces storage errors: history is a best-effort cache
//! and losing it must never block showing a classification result.

pub mod api;
pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod http_client;
pub mod init;
pub mod model;
pub mod stats;
pub mod store;

#[cfg(test)]
pub mod test_utils;
