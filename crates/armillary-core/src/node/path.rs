//! Segment-based path geometry.
//!
//! Paths are built from explicit segments rather than parsed from SVG
//! path-data strings; parsing is a loader concern outside the node
//! model. The frame is the hull of every segment point, including cubic
//! control points — a conservative box that never under-reports.

use crate::geometry::{Bounds, Point, Size};

/// One step of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Starts a new subpath at the given point.
    MoveTo(Point),
    /// A straight segment to the given point.
    LineTo(Point),
    /// A cubic Bézier segment.
    CurveTo {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// Segment end point.
        to: Point,
    },
    /// Closes the current subpath.
    Close,
}

/// A path built from explicit segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates a path from prebuilt segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Returns the segments in drawing order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the hull of every segment point (control points
    /// included); the zero rectangle for an empty path.
    pub fn frame(&self) -> Bounds {
        let mut points = self.segments.iter().flat_map(segment_points);
        let Some(first) = points.next() else {
            return Bounds::default();
        };
        points.fold(
            Bounds::new_from_top_left(first, Size::default()),
            |bounds, point| bounds.include_point(point),
        )
    }

    /// Encodes the path for an SVG `d` attribute.
    pub fn to_path_data(&self) -> String {
        let mut data = String::new();
        for segment in &self.segments {
            if !data.is_empty() {
                data.push(' ');
            }
            match segment {
                PathSegment::MoveTo(point) => {
                    data.push_str(&format!("M {} {}", point.x(), point.y()));
                }
                PathSegment::LineTo(point) => {
                    data.push_str(&format!("L {} {}", point.x(), point.y()));
                }
                PathSegment::CurveTo { c1, c2, to } => {
                    data.push_str(&format!(
                        "C {} {} {} {} {} {}",
                        c1.x(),
                        c1.y(),
                        c2.x(),
                        c2.y(),
                        to.x(),
                        to.y()
                    ));
                }
                PathSegment::Close => data.push('Z'),
            }
        }
        data
    }
}

fn segment_points(segment: &PathSegment) -> Vec<Point> {
    match segment {
        PathSegment::MoveTo(point) | PathSegment::LineTo(point) => vec![*point],
        PathSegment::CurveTo { c1, c2, to } => vec![*c1, *c2, *to],
        PathSegment::Close => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Path {
        Path::new(vec![
            PathSegment::MoveTo(Point::new(0.0, 0.0)),
            PathSegment::LineTo(Point::new(10.0, 0.0)),
            PathSegment::LineTo(Point::new(5.0, 8.0)),
            PathSegment::Close,
        ])
    }

    #[test]
    fn test_empty_path_frame_is_zero() {
        assert_eq!(Path::default().frame(), Bounds::default());
    }

    #[test]
    fn test_frame_covers_all_segment_points() {
        let frame = triangle().frame();
        assert_eq!(frame.min_x(), 0.0);
        assert_eq!(frame.max_x(), 10.0);
        assert_eq!(frame.max_y(), 8.0);
    }

    #[test]
    fn test_frame_includes_curve_control_points() {
        let path = Path::new(vec![
            PathSegment::MoveTo(Point::new(0.0, 0.0)),
            PathSegment::CurveTo {
                c1: Point::new(20.0, -10.0),
                c2: Point::new(30.0, 10.0),
                to: Point::new(10.0, 0.0),
            },
        ]);

        let frame = path.frame();
        assert_eq!(frame.min_y(), -10.0);
        assert_eq!(frame.max_x(), 30.0);
    }

    #[test]
    fn test_path_data_encoding() {
        assert_eq!(triangle().to_path_data(), "M 0 0 L 10 0 L 5 8 Z");
    }
}
