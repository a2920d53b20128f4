use tracing::trace;

use crate::core::PointCoordinates;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ChartEvent, PointData};

use super::LineChart;

impl LineChart {
    /// Forwards a click on a point to every listener accepting clicks.
    pub fn point_click(&mut self, series_index: usize, point_index: usize) -> ChartResult<()> {
        let point = self.point(series_index, point_index)?.clone();
        trace!(series_index, point_index, "point click");
        self.emit_event(&ChartEvent::PointClick(point));
        Ok(())
    }

    /// Brings the hovered series to the front, then notifies listeners with
    /// the point data stripped of its position.
    pub fn point_hover(&mut self, series_index: usize, point_index: usize) -> ChartResult<()> {
        let data = PointData::from(self.point(series_index, point_index)?);

        if self.stacking.bring_to_front(series_index) {
            for (index, path) in self.geometry.line.series_paths.iter_mut().enumerate() {
                path.z_index = self.stacking.z_index(index).unwrap_or(index);
            }
        }
        trace!(series_index, point_index, "point hover");
        self.emit_event(&ChartEvent::PointHover(data));
        Ok(())
    }

    /// Looks up a computed point; indices follow `geometry().line.series_points`.
    pub fn point(&self, series_index: usize, point_index: usize) -> ChartResult<&PointCoordinates> {
        self.geometry
            .line
            .series_points
            .get(series_index)
            .and_then(|points| points.get(point_index))
            .ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "no point at series {series_index}, index {point_index}"
                ))
            })
    }

    fn emit_event(&mut self, event: &ChartEvent) {
        let kind = event.kind();
        for listener in &mut self.listeners {
            if listener.accepts(kind) {
                listener.on_event(event);
            }
        }
    }
}
