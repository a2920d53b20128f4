use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::types::{MinMaxValues, Series};

/// Width reserved on the left for value-axis labels.
pub const AXIS_X_LABEL_AREA: f64 = 32.0;
/// Standard chart padding; also the cap for side spacing.
pub const CHART_PADDING: f64 = 24.0;
/// Gap between the top of the surface and the plotting area.
pub const PLOT_AREA_PADDING_TOP: f64 = 8.0;
/// Horizontal grid lines drawn when no valid override is given.
pub const AXIS_X_GRID_LINES: usize = 5;
/// Smallest `axisXGridLines` override that is honored.
pub const AXIS_X_GRID_LINES_MIN: i64 = 2;
/// Largest `axisXGridLines` override that is honored.
pub const AXIS_X_GRID_LINES_MAX: i64 = 10;

/// Overall minimum and maximum across every plottable value of every series.
///
/// Returns `{0, 0}` when no series holds a plottable value.
#[must_use]
pub fn calculate_min_and_max_values(series: &[Series]) -> MinMaxValues {
    let mut bounds: Option<(f64, f64)> = None;

    for value in series.iter().flat_map(Series::valid_values) {
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }

    let (min_value, max_value) = bounds.unwrap_or((0.0, 0.0));
    MinMaxValues::new(min_value, max_value)
}

/// Length of the longest series, gaps included.
#[must_use]
pub fn series_greater_length(series: &[Series]) -> usize {
    series.iter().map(Series::len).max().unwrap_or(0)
}

/// Half the per-category width next to the label area, capped at
/// [`CHART_PADDING`].
#[must_use]
pub fn calculate_side_spacing(container_width: f64, series_length: usize) -> f64 {
    if series_length == 0 {
        return CHART_PADDING;
    }

    let half_category_width =
        ((container_width - AXIS_X_LABEL_AREA) / series_length as f64 / 2.0).trunc();

    if half_category_width <= CHART_PADDING {
        half_category_width
    } else {
        CHART_PADDING
    }
}

/// Fractional position of `value` inside the domain.
///
/// With a negative minimum the range still starts at zero percent there:
/// for `{-10, 0}` the value `-8` maps to `0.2`. A zero-width domain maps every
/// value to `0.0`, so flat data lies on the baseline.
#[must_use]
pub fn serie_percentage(min_max_values: MinMaxValues, value: f64) -> f64 {
    let range = min_max_values.span();
    if range == 0.0 {
        return 0.0;
    }

    (value - min_max_values.min_value) / range
}

/// Evenly spaced tick values from `min_value` to `max_value` inclusive.
///
/// Yields `grid_lines` values for a proper domain, a single value when the
/// domain has zero width or fewer than two lines are requested, and nothing
/// for non-finite or inverted bounds.
#[must_use]
pub fn range(min_max_values: MinMaxValues, grid_lines: usize) -> Vec<f64> {
    let MinMaxValues {
        min_value,
        max_value,
    } = min_max_values;

    if !min_value.is_finite() || !max_value.is_finite() || min_value > max_value {
        return Vec::new();
    }
    if grid_lines < 2 || min_value == max_value {
        return vec![min_value];
    }

    let last = grid_lines - 1;
    let step = (max_value - min_value) / last as f64;
    (0..grid_lines)
        .map(|index| {
            if index == last {
                max_value
            } else {
                min_value + step * index as f64
            }
        })
        .collect()
}

/// Fixed-point text with `digits` decimals, ties rounded away from zero.
#[must_use]
pub fn format_fixed(value: f64, digits: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    match Decimal::from_f64(value) {
        Some(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(digits);
            rounded.to_string()
        }
        // Beyond Decimal's range; std formatting is exact enough there.
        None => format!("{value:.prec$}", prec = digits as usize),
    }
}
