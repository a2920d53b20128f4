use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    AxisOptions, LegendEntry, OptionsRejection, OptionsValidation, legend_entries, series_colors,
};
use crate::geometry::{
    AxisGeometry, GeometryInput, LineSeriesGeometry, build_axis_geometry, build_line_geometry,
};
use crate::interaction::{ChartEventListener, SeriesStacking};

use super::{ChartInputs, ChartUpdate};

/// Complete derived geometry of a line chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartGeometry {
    pub axis: AxisGeometry,
    pub line: LineSeriesGeometry,
    pub legend: Vec<LegendEntry>,
}

/// Result of applying one [`ChartUpdate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The input was replaced and the geometry recomputed.
    Recomputed,
    /// The options payload was not a valid options object. Inputs and
    /// geometry are unchanged.
    OptionsRejected(OptionsRejection),
}

/// Line chart state: current inputs plus the geometry derived from them.
///
/// Geometry is never patched. Every accepted update replaces one input and
/// recomputes everything synchronously before returning.
pub struct LineChart {
    pub(super) inputs: ChartInputs,
    pub(super) geometry: ChartGeometry,
    pub(super) stacking: SeriesStacking,
    pub(super) listeners: Vec<Box<dyn ChartEventListener>>,
}

impl LineChart {
    #[must_use]
    pub fn new(inputs: ChartInputs) -> Self {
        let mut chart = Self {
            stacking: SeriesStacking::new(inputs.series.len()),
            inputs,
            geometry: ChartGeometry::default(),
            listeners: Vec::new(),
        };
        chart.recompute();
        chart
    }

    #[must_use]
    pub fn inputs(&self) -> &ChartInputs {
        &self.inputs
    }

    #[must_use]
    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn stacking(&self) -> &SeriesStacking {
        &self.stacking
    }

    pub fn apply(&mut self, update: ChartUpdate) -> UpdateOutcome {
        match update {
            ChartUpdate::Series(series) => self.inputs.series = series,
            ChartUpdate::Categories(categories) => self.inputs.categories = categories,
            ChartUpdate::ContainerSize(size) => self.inputs.container_size = size,
            ChartUpdate::AxisOptions(options) => self.inputs.options = options,
            ChartUpdate::AxisOptionsJson(raw) => match AxisOptions::validate_json(&raw) {
                OptionsValidation::Accepted(options) => self.inputs.options = options,
                OptionsValidation::Rejected(reason) => {
                    warn!(reason = %reason, "ignoring axis options update");
                    return UpdateOutcome::OptionsRejected(reason);
                }
            },
        }

        self.recompute();
        UpdateOutcome::Recomputed
    }

    /// Applies several updates and returns the outcome of each, in order.
    pub fn apply_all(
        &mut self,
        updates: impl IntoIterator<Item = ChartUpdate>,
    ) -> Vec<UpdateOutcome> {
        updates.into_iter().map(|update| self.apply(update)).collect()
    }

    pub(super) fn recompute(&mut self) {
        let inputs = &self.inputs;
        self.stacking.sync_len(inputs.series.len());

        if inputs.options.axis_x_grid_lines.is_some() && !inputs.options.has_valid_grid_lines() {
            warn!(
                requested = ?inputs.options.axis_x_grid_lines,
                resolved = inputs.options.resolved_grid_lines(),
                "axis grid lines out of range, using default"
            );
        }

        let input = GeometryInput::new(
            &inputs.series,
            &inputs.categories,
            inputs.container_size,
            inputs.options,
        );
        let axis = build_axis_geometry(input);
        let line = build_line_geometry(input, &self.stacking);
        let legend = legend_entries(&inputs.series, &series_colors(&inputs.series));

        if line.domain.span() == 0.0 && !inputs.series.is_empty() {
            warn!(
                value = line.domain.min_value,
                "zero-width domain, points placed on the baseline"
            );
        }
        debug!(
            series = inputs.series.len(),
            series_length = input.series_length(),
            min_value = line.domain.min_value,
            max_value = line.domain.max_value,
            "recomputed chart geometry"
        );

        self.geometry = ChartGeometry { axis, line, legend };
    }
}
