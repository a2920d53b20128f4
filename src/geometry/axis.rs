use serde::{Deserialize, Serialize};

use crate::core::{
    AXIS_X_LABEL_AREA, CHART_PADDING, ContainerSize, LabelCoordinates, MinMaxValues,
    PLOT_AREA_PADDING_TOP, PathCoordinates, format_fixed, line_path, range,
};

use super::{GeometryInput, category_x_coordinate, plotting_y_coordinate};

/// Decimals shown on value-axis labels.
pub const AXIS_X_LABEL_DIGITS: u32 = 0;

/// Grid lines and labels of both axes.
///
/// "Axis X" lines are the horizontal value grid, labelled on the left.
/// "Axis Y" lines are the vertical category grid, labelled at the bottom.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisGeometry {
    pub axis_x_coordinates: Vec<PathCoordinates>,
    pub axis_x_label_coordinates: Vec<LabelCoordinates>,
    pub axis_y_coordinates: Vec<PathCoordinates>,
    pub axis_y_label_coordinates: Vec<LabelCoordinates>,
}

#[must_use]
pub fn build_axis_geometry(input: GeometryInput<'_>) -> AxisGeometry {
    let domain = input.domain();
    let grid_lines = input.options.resolved_grid_lines();
    let series_length = input.series_length();
    let container = input.container;

    AxisGeometry {
        axis_x_coordinates: axis_x_coordinates(grid_lines, container),
        axis_x_label_coordinates: axis_x_label_coordinates(grid_lines, container, domain),
        axis_y_coordinates: axis_y_coordinates(container, series_length),
        axis_y_label_coordinates: axis_y_label_coordinates(
            container,
            series_length,
            input.categories,
        ),
    }
}

fn axis_x_coordinates(grid_lines: usize, container: ContainerSize) -> Vec<PathCoordinates> {
    (0..grid_lines)
        .map(|index| {
            let y = axis_x_line_y(grid_lines, container, index);
            line_path(AXIS_X_LABEL_AREA, y, container.svg_width, y)
        })
        .collect()
}

fn axis_x_label_coordinates(
    grid_lines: usize,
    container: ContainerSize,
    domain: MinMaxValues,
) -> Vec<LabelCoordinates> {
    let x_coordinate = AXIS_X_LABEL_AREA - CHART_PADDING / 3.0;

    range(domain, grid_lines)
        .into_iter()
        .enumerate()
        .map(|(index, value)| LabelCoordinates {
            label: format_fixed(value, AXIS_X_LABEL_DIGITS),
            x_coordinate,
            y_coordinate: axis_x_line_y(grid_lines, container, index),
        })
        .collect()
}

fn axis_y_coordinates(container: ContainerSize, series_length: usize) -> Vec<PathCoordinates> {
    let start_y = PLOT_AREA_PADDING_TOP;
    let end_y = container.svg_plotting_area_height + PLOT_AREA_PADDING_TOP;

    let outer = [
        line_path(AXIS_X_LABEL_AREA, start_y, AXIS_X_LABEL_AREA, end_y),
        line_path(container.svg_width, start_y, container.svg_width, end_y),
    ];
    let inner = (0..series_length).map(|index| {
        let x = category_x_coordinate(container, series_length, index);
        line_path(x, start_y, x, end_y)
    });

    outer.into_iter().chain(inner).collect()
}

fn axis_y_label_coordinates(
    container: ContainerSize,
    series_length: usize,
    categories: &[String],
) -> Vec<LabelCoordinates> {
    let y_coordinate = container.svg_height - CHART_PADDING / 3.0;

    (0..series_length)
        .map(|index| LabelCoordinates {
            label: categories
                .get(index)
                .cloned()
                .unwrap_or_else(|| "-".to_owned()),
            x_coordinate: category_x_coordinate(container, series_length, index),
            y_coordinate,
        })
        .collect()
}

// Line 0 sits on the bottom of the plotting area, the last one on the top.
fn axis_x_line_y(grid_lines: usize, container: ContainerSize, index: usize) -> f64 {
    let y_ratio = if grid_lines > 1 {
        index as f64 / (grid_lines - 1) as f64
    } else {
        0.0
    };
    plotting_y_coordinate(container, y_ratio)
}
