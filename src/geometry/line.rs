#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    ContainerSize, MinMaxValues, PathCoordinates, PointCoordinates, Series, SvgPathBuilder,
    serie_percentage, series_colors, valid_value,
};
use crate::interaction::SeriesStacking;

use super::{GeometryInput, category_x_coordinate, plotting_y_coordinate};

/// The drawn path of one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPath {
    pub coordinates: String,
    pub color: String,
    /// Position in the draw order; higher values are drawn on top.
    pub z_index: usize,
}

/// Paths and point targets of every series, index-aligned with the input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeriesGeometry {
    pub domain: MinMaxValues,
    pub series_paths: Vec<SeriesPath>,
    pub series_points: Vec<Vec<PointCoordinates>>,
}

#[derive(Debug, Clone, Copy)]
struct ProjectionContext<'a> {
    container: ContainerSize,
    domain: MinMaxValues,
    series_length: usize,
    categories: &'a [String],
}

#[must_use]
pub fn build_line_geometry(
    input: GeometryInput<'_>,
    stacking: &SeriesStacking,
) -> LineSeriesGeometry {
    let ctx = ProjectionContext {
        container: input.container,
        domain: input.domain(),
        series_length: input.series_length(),
        categories: input.categories,
    };

    #[cfg(feature = "parallel-projection")]
    let projected: Vec<(PathCoordinates, Vec<PointCoordinates>)> = input
        .series
        .par_iter()
        .map(|serie| project_with_context(serie, ctx))
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let projected: Vec<(PathCoordinates, Vec<PointCoordinates>)> = input
        .series
        .iter()
        .map(|serie| project_with_context(serie, ctx))
        .collect();

    let colors = series_colors(input.series);
    let mut series_paths = Vec::with_capacity(projected.len());
    let mut series_points = Vec::with_capacity(projected.len());
    for (index, ((path, points), color)) in projected.into_iter().zip(colors).enumerate() {
        series_paths.push(SeriesPath {
            coordinates: path.coordinates,
            color,
            z_index: stacking.z_index(index).unwrap_or(index),
        });
        series_points.push(points);
    }

    LineSeriesGeometry {
        domain: ctx.domain,
        series_paths,
        series_points,
    }
}

/// Projects one series onto the chart grid.
///
/// Gaps emit neither a path vertex nor a point, so the line is broken there
/// rather than interpolated. The first plottable value moves the pen; every
/// later one draws a line to it.
#[must_use]
pub fn project_series(
    serie: &Series,
    container: ContainerSize,
    domain: MinMaxValues,
    series_length: usize,
    categories: &[String],
) -> (PathCoordinates, Vec<PointCoordinates>) {
    project_with_context(
        serie,
        ProjectionContext {
            container,
            domain,
            series_length,
            categories,
        },
    )
}

fn project_with_context(
    serie: &Series,
    ctx: ProjectionContext<'_>,
) -> (PathCoordinates, Vec<PointCoordinates>) {
    let mut path = SvgPathBuilder::new();
    let mut points = Vec::with_capacity(serie.len());

    for (index, value) in serie.data.iter().copied().enumerate() {
        let Some(value) = valid_value(value) else {
            continue;
        };

        let x_coordinate = category_x_coordinate(ctx.container, ctx.series_length, index);
        let y_coordinate = value_y_coordinate(ctx.container, ctx.domain, value);
        path.push_point(x_coordinate, y_coordinate);

        points.push(PointCoordinates {
            value,
            label: format!("{}: {}", serie.category, value),
            category: serie.category.clone(),
            axis_category: ctx.categories.get(index).cloned(),
            x_coordinate,
            y_coordinate,
        });
    }

    trace!(
        category = %serie.category,
        points = points.len(),
        "projected line series"
    );
    (path.finish(), points)
}

fn value_y_coordinate(container: ContainerSize, domain: MinMaxValues, value: f64) -> f64 {
    plotting_y_coordinate(container, serie_percentage(domain, value)).floor()
}
