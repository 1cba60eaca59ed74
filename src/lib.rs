//! choropleth-rs: linked-view choropleth engine.
//!
//! This crate provides the data side of an interactive choropleth map with a
//! companion bar chart: key joins between tabular records and polygon
//! geometry, quantile color classification, and a sync engine that keeps both
//! views consistent with one shared selection state. Drawing is delegated to
//! a `Renderer` collaborator.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SyncEngine, SyncEngineConfig};
pub use error::{ChoroplethError, ChoroplethResult};
