use serde::{Deserialize, Serialize};

use crate::core::types::Series;

/// Palette assigned to series in order when they carry no color of their own.
pub const DEFAULT_SERIES_COLORS: [&str; 12] = [
    "#0C6C94", "#29B6C5", "#22D5AA", "#94DAE2", "#1A4C5B", "#50A8C0", "#9ED8D3", "#2A8B9A",
    "#0E3A4E", "#6AC5B5", "#BAE3E9", "#14596F",
];

/// One legend row: the series category and its drawing color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Resolves the drawing color of every series.
///
/// A series' own color wins; the rest take the palette entry for their index,
/// cycling once the palette runs out.
#[must_use]
pub fn series_colors(series: &[Series]) -> Vec<String> {
    series
        .iter()
        .enumerate()
        .map(|(index, serie)| match &serie.color {
            Some(color) if !color.trim().is_empty() => color.clone(),
            _ => DEFAULT_SERIES_COLORS[index % DEFAULT_SERIES_COLORS.len()].to_owned(),
        })
        .collect()
}

#[must_use]
pub fn legend_entries(series: &[Series], colors: &[String]) -> Vec<LegendEntry> {
    series
        .iter()
        .zip(colors)
        .map(|(serie, color)| LegendEntry {
            label: serie.category.clone(),
            color: color.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_color_overrides_palette() {
        let series = vec![
            Series::from_values("a", &[1.0]),
            Series::from_values("b", &[2.0]).with_color("#FF0000"),
            Series::from_values("c", &[3.0]).with_color("  "),
        ];
        let colors = series_colors(&series);
        assert_eq!(colors, vec!["#0C6C94", "#FF0000", "#22D5AA"]);
    }

    #[test]
    fn palette_cycles_for_many_series() {
        let series: Vec<Series> = (0..14)
            .map(|index| Series::from_values(format!("s{index}"), &[1.0]))
            .collect();
        let colors = series_colors(&series);
        assert_eq!(colors[12], DEFAULT_SERIES_COLORS[0]);
        assert_eq!(colors[13], DEFAULT_SERIES_COLORS[1]);
    }

    #[test]
    fn legend_pairs_categories_with_colors() {
        let series = vec![Series::from_values("Revenue", &[1.0])];
        let legend = legend_entries(&series, &series_colors(&series));
        assert_eq!(
            legend,
            vec![LegendEntry {
                label: "Revenue".to_owned(),
                color: "#0C6C94".to_owned(),
            }]
        );
    }
}
