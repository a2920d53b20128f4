//! chart-geometry: SVG line-chart geometry.
//!
//! Computes axis grid lines, axis labels, per-series path strings and
//! per-point interaction targets from data series, category labels and a
//! container size. Rendering is left to the host: every output is plain data.

pub mod api;
pub mod core;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartInputs, ChartUpdate, LineChart, UpdateOutcome};
pub use error::{ChartError, ChartResult};
