use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::{AxisOptions, ContainerSize, OptionsValidation, Series};
use crate::error::{ChartError, ChartResult};

/// Everything the host supplies to draw a line chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInputs {
    #[serde(default)]
    pub series: Vec<Series>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub container_size: ContainerSize,
    #[serde(default, deserialize_with = "deserialize_options")]
    pub options: AxisOptions,
}

// Options go through the same validation as `ChartUpdate::AxisOptionsJson`.
// A rejected payload is ignored so the rest of the input set still loads.
fn deserialize_options<'de, D>(deserializer: D) -> Result<AxisOptions, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(AxisOptions::default());
    }
    match AxisOptions::validate_json(&raw) {
        OptionsValidation::Accepted(options) => Ok(options),
        OptionsValidation::Rejected(reason) => {
            warn!(reason = %reason, "ignoring chart input options");
            Ok(AxisOptions::default())
        }
    }
}

impl ChartInputs {
    #[must_use]
    pub fn new(series: Vec<Series>, container_size: ContainerSize) -> Self {
        Self {
            series,
            container_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: AxisOptions) -> Self {
        self.options = options;
        self
    }

    /// Parses a full input set, e.g. a persisted chart definition.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart inputs: {e}")))
    }
}

/// One input replacement. Applying any update recomputes the whole geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartUpdate {
    Series(Vec<Series>),
    Categories(Vec<String>),
    ContainerSize(ContainerSize),
    AxisOptions(AxisOptions),
    /// Untyped options from the host; validated before use.
    AxisOptionsJson(Value),
}
