use serde::{Deserialize, Serialize};

use crate::core::PointCoordinates;

/// Point data handed to hover listeners: the point record without its pixel
/// position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointData {
    pub value: f64,
    pub label: String,
    pub category: String,
    pub axis_category: Option<String>,
}

impl From<&PointCoordinates> for PointData {
    fn from(point: &PointCoordinates) -> Self {
        Self {
            value: point.value,
            label: point.label.clone(),
            category: point.category.clone(),
            axis_category: point.axis_category.clone(),
        }
    }
}

/// Events delivered to registered listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// A point was clicked. Carries the full point record.
    PointClick(PointCoordinates),
    /// A point was hovered. Its series was brought to the front first.
    PointHover(PointData),
}

/// Payload-free tag of a [`ChartEvent`], used to route dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartEventKind {
    PointClick,
    PointHover,
}

impl ChartEvent {
    #[must_use]
    pub fn kind(&self) -> ChartEventKind {
        match self {
            Self::PointClick(_) => ChartEventKind::PointClick,
            Self::PointHover(_) => ChartEventKind::PointHover,
        }
    }
}

/// Observer for point interactions.
pub trait ChartEventListener {
    fn id(&self) -> &str;

    /// Event kinds this listener is notified about. Defaults to all of them.
    fn accepts(&self, _kind: ChartEventKind) -> bool {
        true
    }

    fn on_event(&mut self, event: &ChartEvent);
}

/// Draw order of the series.
///
/// SVG has no stacking index, so a hovered series is brought to the front by
/// drawing it last. The order is kept as data and exposed as a `z_index` on
/// every series path; the renderer draws paths by ascending `z_index`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesStacking {
    order: Vec<usize>,
}

impl SeriesStacking {
    #[must_use]
    pub fn new(series_count: usize) -> Self {
        Self {
            order: (0..series_count).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keeps the current order while the series count is unchanged, otherwise
    /// restores the natural order.
    pub fn sync_len(&mut self, series_count: usize) {
        if self.order.len() != series_count {
            *self = Self::new(series_count);
        }
    }

    /// Moves `series_index` to the top of the draw order.
    ///
    /// Returns `false` for an unknown series.
    pub fn bring_to_front(&mut self, series_index: usize) -> bool {
        let Some(position) = self.order.iter().position(|&index| index == series_index) else {
            return false;
        };
        let index = self.order.remove(position);
        self.order.push(index);
        true
    }

    #[must_use]
    pub fn z_index(&self, series_index: usize) -> Option<usize> {
        self.order.iter().position(|&index| index == series_index)
    }

    /// Series indices from bottom to top.
    #[must_use]
    pub fn draw_order(&self) -> &[usize] {
        &self.order
    }
}
