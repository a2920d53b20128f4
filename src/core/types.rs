use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::maths::{
    AXIS_X_LABEL_AREA, CHART_PADDING, PLOT_AREA_PADDING_TOP, calculate_side_spacing,
};
use crate::error::{ChartError, ChartResult};

/// One named sequence of values plotted against the shared category index.
///
/// `None` entries mark indices with no point. They are skipped by every
/// computation and never read as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    #[serde(default, deserialize_with = "deserialize_series_data")]
    pub data: Vec<Option<f64>>,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Series {
    #[must_use]
    pub fn new(category: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            data,
            category: category.into(),
            color: None,
        }
    }

    /// Builds a series without gaps.
    #[must_use]
    pub fn from_values(category: impl Into<String>, values: &[f64]) -> Self {
        Self::new(category, values.iter().copied().map(Some).collect())
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the plottable value at `index`, if any.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied().and_then(valid_value)
    }

    /// Iterates plottable values in index order, skipping gaps.
    pub fn valid_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied().filter_map(valid_value)
    }
}

/// Accepts finite numbers only; everything else is a gap.
#[must_use]
pub fn valid_value(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite())
}

// Hosts send loosely typed arrays: numbers stay, anything else becomes a gap.
fn deserialize_series_data<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Array(items) => items.iter().map(Value::as_f64).collect(),
        _ => Vec::new(),
    })
}

/// Numeric domain spanned by the plotted data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinMaxValues {
    pub min_value: f64,
    pub max_value: f64,
}

impl MinMaxValues {
    #[must_use]
    pub fn new(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max_value - self.min_value
    }
}

/// Pixel size of the drawing surface and of its plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSize {
    pub svg_width: f64,
    pub svg_height: f64,
    pub svg_plotting_area_width: f64,
    pub svg_plotting_area_height: f64,
}

impl ContainerSize {
    #[must_use]
    pub fn new(
        svg_width: f64,
        svg_height: f64,
        svg_plotting_area_width: f64,
        svg_plotting_area_height: f64,
    ) -> Self {
        Self {
            svg_width,
            svg_height,
            svg_plotting_area_width,
            svg_plotting_area_height,
        }
    }

    /// Same as [`ContainerSize::new`] but rejects sizes no chart can be drawn in.
    pub fn try_new(
        svg_width: f64,
        svg_height: f64,
        svg_plotting_area_width: f64,
        svg_plotting_area_height: f64,
    ) -> ChartResult<Self> {
        let size = Self::new(
            svg_width,
            svg_height,
            svg_plotting_area_width,
            svg_plotting_area_height,
        );
        if !size.is_valid() {
            return Err(ChartError::InvalidContainer {
                width: svg_width,
                height: svg_height,
            });
        }
        Ok(size)
    }

    /// Derives the plotting area from the outer surface size.
    ///
    /// The plotting area excludes the left label area, the side spacing on
    /// both ends, the top padding and the bottom category-label row.
    #[must_use]
    pub fn for_chart(svg_width: f64, svg_height: f64, series_length: usize) -> Self {
        let side_spacing = calculate_side_spacing(svg_width, series_length);
        let plotting_width = (svg_width - AXIS_X_LABEL_AREA - side_spacing * 2.0).max(0.0);
        let plotting_height = (svg_height - PLOT_AREA_PADDING_TOP - CHART_PADDING).max(0.0);

        Self::new(svg_width, svg_height, plotting_width, plotting_height)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let dimensions = [
            self.svg_width,
            self.svg_height,
            self.svg_plotting_area_width,
            self.svg_plotting_area_height,
        ];
        dimensions.iter().all(|value| value.is_finite() && *value >= 0.0)
            && self.svg_width > 0.0
            && self.svg_height > 0.0
            && self.svg_plotting_area_width <= self.svg_width
            && self.svg_plotting_area_height <= self.svg_height
    }
}

/// One path-drawing instruction string (`M x y L x y ...`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathCoordinates {
    pub coordinates: String,
}

/// Text and pixel position of one axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCoordinates {
    pub label: String,
    pub x_coordinate: f64,
    pub y_coordinate: f64,
}

/// Interaction target for one plotted data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointCoordinates {
    pub value: f64,
    pub label: String,
    pub category: String,
    pub axis_category: Option<String>,
    pub x_coordinate: f64,
    pub y_coordinate: f64,
}
