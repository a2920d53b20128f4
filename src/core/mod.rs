pub mod colors;
pub mod maths;
pub mod options;
pub mod path;
pub mod types;

pub use colors::{DEFAULT_SERIES_COLORS, LegendEntry, legend_entries, series_colors};
pub use maths::{
    AXIS_X_GRID_LINES, AXIS_X_LABEL_AREA, CHART_PADDING, PLOT_AREA_PADDING_TOP,
    calculate_min_and_max_values, calculate_side_spacing, format_fixed, range,
    serie_percentage, series_greater_length,
};
pub use options::{AxisOptions, OptionsRejection, OptionsValidation};
pub use path::{SvgPathBuilder, line_path};
pub use types::{
    ContainerSize, LabelCoordinates, MinMaxValues, PathCoordinates, PointCoordinates, Series,
    valid_value,
};
