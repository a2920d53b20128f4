//! Pixel-space geometry for the axis and the line series.
//!
//! Both builders share one horizontal grid: the x coordinate of data index
//! `i` is the same for the category grid line, the category label and every
//! series point at `i`.

pub mod axis;
pub mod line;

pub use axis::{AxisGeometry, build_axis_geometry};
pub use line::{LineSeriesGeometry, SeriesPath, build_line_geometry, project_series};

use crate::core::{
    AXIS_X_LABEL_AREA, AxisOptions, ContainerSize, MinMaxValues, PLOT_AREA_PADDING_TOP, Series,
    calculate_min_and_max_values, calculate_side_spacing, series_greater_length,
};

/// Snapshot of everything a geometry pass reads.
#[derive(Debug, Clone, Copy)]
pub struct GeometryInput<'a> {
    pub series: &'a [Series],
    pub categories: &'a [String],
    pub container: ContainerSize,
    pub options: AxisOptions,
}

impl<'a> GeometryInput<'a> {
    #[must_use]
    pub fn new(
        series: &'a [Series],
        categories: &'a [String],
        container: ContainerSize,
        options: AxisOptions,
    ) -> Self {
        Self {
            series,
            categories,
            container,
            options,
        }
    }

    /// Data domain widened by the range overrides.
    #[must_use]
    pub fn domain(&self) -> MinMaxValues {
        self.options.widen(calculate_min_and_max_values(self.series))
    }

    #[must_use]
    pub fn series_length(&self) -> usize {
        series_greater_length(self.series)
    }
}

/// X coordinate of data index `index` on the category grid.
#[must_use]
pub fn category_x_coordinate(container: ContainerSize, series_length: usize, index: usize) -> f64 {
    let x_ratio = if series_length > 1 {
        index as f64 / (series_length - 1) as f64
    } else {
        0.0
    };
    let side_spacing = calculate_side_spacing(container.svg_width, series_length);

    AXIS_X_LABEL_AREA + side_spacing + container.svg_plotting_area_width * x_ratio
}

/// Y coordinate of a point lying at `ratio` of the plotting height, measured
/// from the bottom.
#[must_use]
pub fn plotting_y_coordinate(container: ContainerSize, ratio: f64) -> f64 {
    let height = container.svg_plotting_area_height;
    height - height * ratio + PLOT_AREA_PADDING_TOP
}
