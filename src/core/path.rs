use std::fmt::Write;

use crate::core::types::PathCoordinates;

/// Incremental builder for the SVG path mini-language.
///
/// The first point of a path is a move-to; every later point is a line-to.
#[derive(Debug, Clone, Default)]
pub struct SvgPathBuilder {
    buffer: String,
    started: bool,
}

impl SvgPathBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next vertex of the polyline.
    pub fn push_point(&mut self, x: f64, y: f64) {
        let command = if self.started { 'L' } else { 'M' };
        self.started = true;
        self.push_command(command, x, y);
    }

    fn push_command(&mut self, command: char, x: f64, y: f64) {
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(self.buffer, "{command}{x} {y}");
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.started
    }

    #[must_use]
    pub fn finish(self) -> PathCoordinates {
        PathCoordinates {
            coordinates: self.buffer,
        }
    }
}

/// Straight segment from `(x1, y1)` to `(x2, y2)`.
#[must_use]
pub fn line_path(x1: f64, y1: f64, x2: f64, y2: f64) -> PathCoordinates {
    let mut builder = SvgPathBuilder::new();
    builder.push_point(x1, y1);
    builder.push_point(x2, y2);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_point_moves_and_later_points_draw() {
        let mut builder = SvgPathBuilder::new();
        builder.push_point(32.0, 8.0);
        builder.push_point(50.5, 20.0);
        builder.push_point(70.0, 4.0);
        assert_eq!(builder.finish().coordinates, "M32 8 L50.5 20 L70 4");
    }

    #[test]
    fn empty_builder_yields_empty_path() {
        let builder = SvgPathBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.finish().coordinates, "");
    }

    #[test]
    fn line_path_is_single_segment() {
        assert_eq!(line_path(32.0, 8.0, 500.0, 8.0).coordinates, "M32 8 L500 8");
    }
}
