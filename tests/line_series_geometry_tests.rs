use chart_geometry::core::{AxisOptions, ContainerSize, MinMaxValues, Series};
use chart_geometry::geometry::{GeometryInput, build_line_geometry, project_series};
use chart_geometry::interaction::SeriesStacking;

fn container() -> ContainerSize {
    ContainerSize::new(500.0, 300.0, 300.0, 200.0)
}

#[test]
fn path_moves_to_first_point_and_draws_to_the_rest() {
    let series = vec![Series::from_values("Sales", &[0.0, 5.0, 10.0, 5.0])];
    let input = GeometryInput::new(&series, &[], container(), AxisOptions::default());

    let geometry = build_line_geometry(input, &SeriesStacking::new(1));
    assert_eq!(
        geometry.series_paths[0].coordinates,
        "M56 208 L156 108 L256 8 L356 108"
    );
    assert_eq!(geometry.domain, MinMaxValues::new(0.0, 10.0));
}

#[test]
fn gap_breaks_the_line_without_a_vertex() {
    let series = vec![Series::new(
        "Sales",
        vec![Some(2.0), None, Some(8.0), Some(4.0)],
    )];
    let input = GeometryInput::new(&series, &[], container(), AxisOptions::default());

    let geometry = build_line_geometry(input, &SeriesStacking::new(1));
    assert_eq!(geometry.series_paths[0].coordinates, "M56 208 L256 8 L356 141");

    let xs: Vec<f64> = geometry.series_points[0]
        .iter()
        .map(|point| point.x_coordinate)
        .collect();
    assert_eq!(xs, vec![56.0, 256.0, 356.0]);
}

#[test]
fn leading_gap_moves_to_first_valid_point() {
    let serie = Series::new("Sales", vec![None, Some(8.0), Some(2.0), None]);
    let (path, points) = project_series(
        &serie,
        container(),
        MinMaxValues::new(2.0, 8.0),
        4,
        &[],
    );

    assert_eq!(path.coordinates, "M156 8 L256 208");
    assert_eq!(points.len(), 2);
}

#[test]
fn non_finite_values_are_gaps_and_zero_is_a_point() {
    let serie = Series::new("Sales", vec![Some(0.0), Some(f64::NAN), Some(10.0)]);
    let (path, points) = project_series(
        &serie,
        container(),
        MinMaxValues::new(0.0, 10.0),
        3,
        &[],
    );

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].value, 0.0);
    assert!(path.coordinates.starts_with("M56 208"));
}

#[test]
fn y_coordinates_are_floored_pixels() {
    let serie = Series::from_values("Sales", &[4.0]);
    let (_, points) = project_series(
        &serie,
        container(),
        MinMaxValues::new(2.0, 8.0),
        1,
        &[],
    );

    // 200 - 200 / 3 + 8 = 141.33..
    assert_eq!(points[0].y_coordinate, 141.0);
}

#[test]
fn point_records_carry_labels_and_categories() {
    let series = vec![Series::from_values("Sales", &[12.5, 30.0])];
    let categories = vec!["Jan".to_owned()];
    let input = GeometryInput::new(&series, &categories, container(), AxisOptions::default());

    let geometry = build_line_geometry(input, &SeriesStacking::new(1));
    let points = &geometry.series_points[0];
    assert_eq!(points[0].label, "Sales: 12.5");
    assert_eq!(points[0].category, "Sales");
    assert_eq!(points[0].axis_category.as_deref(), Some("Jan"));
    assert_eq!(points[1].label, "Sales: 30");
    assert_eq!(points[1].axis_category, None);
}

#[test]
fn shorter_series_align_with_the_shared_grid() {
    let series = vec![
        Series::from_values("Sales", &[1.0, 2.0, 3.0, 4.0]),
        Series::from_values("Costs", &[1.0, 2.0]),
    ];
    let input = GeometryInput::new(&series, &[], container(), AxisOptions::default());

    let geometry = build_line_geometry(input, &SeriesStacking::new(2));
    let xs: Vec<f64> = geometry.series_points[1]
        .iter()
        .map(|point| point.x_coordinate)
        .collect();
    assert_eq!(xs, vec![56.0, 156.0]);
}

#[test]
fn range_overrides_widen_the_projection_domain() {
    let series = vec![Series::from_values("Sales", &[0.0, 10.0])];
    let options = AxisOptions::default().with_range(-10.0, 5.0);
    let input = GeometryInput::new(&series, &[], container(), options);

    let geometry = build_line_geometry(input, &SeriesStacking::new(1));
    assert_eq!(geometry.domain, MinMaxValues::new(-10.0, 10.0));
    // Value 0 is now mid-height.
    assert_eq!(geometry.series_points[0][0].y_coordinate, 108.0);
}

#[test]
fn flat_domain_places_points_on_baseline() {
    let series = vec![Series::from_values("Sales", &[7.0, 7.0])];
    let input = GeometryInput::new(&series, &[], container(), AxisOptions::default());

    let geometry = build_line_geometry(input, &SeriesStacking::new(1));
    for point in &geometry.series_points[0] {
        assert_eq!(point.y_coordinate, 208.0);
    }
}

#[test]
fn paths_carry_palette_colors_and_stacking() {
    let series = vec![
        Series::from_values("Sales", &[1.0, 2.0]),
        Series::from_values("Costs", &[2.0, 1.0]).with_color("#FF0000"),
    ];
    let input = GeometryInput::new(&series, &[], container(), AxisOptions::default());
    let mut stacking = SeriesStacking::new(2);
    stacking.bring_to_front(0);

    let geometry = build_line_geometry(input, &stacking);
    assert_eq!(geometry.series_paths[0].color, "#0C6C94");
    assert_eq!(geometry.series_paths[1].color, "#FF0000");
    assert_eq!(geometry.series_paths[0].z_index, 1);
    assert_eq!(geometry.series_paths[1].z_index, 0);
}

#[test]
fn empty_series_yield_empty_path() {
    let series = vec![Series::new("Sales", Vec::new()), Series::new("Gaps", vec![None])];
    let input = GeometryInput::new(&series, &[], container(), AxisOptions::default());

    let geometry = build_line_geometry(input, &SeriesStacking::new(2));
    assert_eq!(geometry.series_paths.len(), 2);
    assert!(geometry.series_paths.iter().all(|path| path.coordinates.is_empty()));
    assert!(geometry.series_points.iter().all(Vec::is_empty));
}
