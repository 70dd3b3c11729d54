//! Stroke path geometry for freehand gestures.

use super::color::Color;

/// A point in surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Geometric record of one continuous pointer gesture.
///
/// The path holds a starting point followed by line segments, and is tagged with
/// the color and thickness that were active when the gesture began. Coordinates
/// are stored as given; nothing is clamped to the surface bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokePath {
    /// Stroke color, fixed at gesture start
    pub color: Color,
    /// Line thickness in pixels, fixed at gesture start
    pub thickness: f64,
    origin: Option<Point>,
    segments: Vec<Point>,
}

impl StrokePath {
    /// Creates an empty, unstarted path.
    pub fn new(color: Color, thickness: f64) -> Self {
        Self {
            color,
            thickness,
            origin: None,
            segments: Vec::new(),
        }
    }

    /// Resets the geometry to a single starting point.
    pub fn start(&mut self, point: Point) {
        self.origin = Some(point);
        self.segments.clear();
    }

    /// Appends a line segment from the last point to `point`.
    ///
    /// Ignored if [`start`](Self::start) has not been called.
    pub fn extend(&mut self, point: Point) {
        if self.origin.is_some() {
            self.segments.push(point);
        }
    }

    /// Returns `true` while no segment has been appended.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns `true` once a starting point has been set.
    pub fn is_started(&self) -> bool {
        self.origin.is_some()
    }

    /// Starting point of the path, if any.
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Segment end points in the order they were appended.
    pub fn segments(&self) -> &[Point] {
        &self.segments
    }

    /// Iterates the full polyline: the origin followed by every segment end point.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.origin.into_iter().chain(self.segments.iter().copied())
    }
}
