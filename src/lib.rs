//! Synthetic farm dashboard simulation and aggregation engine.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod io;
pub mod reporting;
/// Crop catalog, environmental samples, caches, and aggregation modules.
pub mod sim;
