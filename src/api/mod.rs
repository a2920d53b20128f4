mod chart;
mod inputs;
mod interaction_controller;
mod json_contract;
mod listener_registry;

pub use chart::{ChartGeometry, LineChart, UpdateOutcome};
pub use inputs::{ChartInputs, ChartUpdate};
pub use json_contract::{CHART_GEOMETRY_JSON_SCHEMA_V1, ChartGeometryJsonContractV1};
