//! Shape nodes: concrete geometry with optional fill and stroke.

use std::rc::Rc;

use crate::{
    draw::{Paint, Stroke},
    geometry::{Bounds, Point, Size},
    node::path::Path,
    serialize::Serializer,
};

/// Concrete geometry with optional fill and stroke attributes.
///
/// The paint and stroke descriptors are held by `Rc` handle: cloning a
/// shape (or the node tree containing it) copies the handle, so a clone
/// and its original share the same immutable descriptor instances.
#[derive(Debug, Clone)]
pub struct Shape {
    fill: Option<Rc<Paint>>,
    stroke: Option<Rc<Stroke>>,
    geometry: Geometry,
}

impl Shape {
    /// Creates an unpainted shape around the given geometry.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            fill: None,
            stroke: None,
            geometry,
        }
    }

    /// Creates a rectangle shape with square corners.
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Geometry::Rect(Rect::new(x, y, width, height)))
    }

    /// Creates a circle shape.
    pub fn circle(cx: f32, cy: f32, r: f32) -> Self {
        Self::new(Geometry::Circle(Circle { cx, cy, r }))
    }

    /// Creates an ellipse shape.
    pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        Self::new(Geometry::Ellipse(Ellipse { cx, cy, rx, ry }))
    }

    /// Creates a line shape.
    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Geometry::Line(Line { x1, y1, x2, y2 }))
    }

    /// Creates a polyline shape through the given points.
    pub fn polyline(points: Vec<Point>) -> Self {
        Self::new(Geometry::Polyline(Polyline { points }))
    }

    /// Creates a closed polygon shape through the given points.
    pub fn polygon(points: Vec<Point>) -> Self {
        Self::new(Geometry::Polygon(Polygon { points }))
    }

    /// Creates a path shape from prebuilt segments.
    pub fn path(path: Path) -> Self {
        Self::new(Geometry::Path(path))
    }

    /// Sets the fill paint (builder form). Accepts either an owned
    /// [`Paint`] or an already-shared `Rc<Paint>` handle.
    pub fn with_fill(mut self, fill: impl Into<Rc<Paint>>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Sets the stroke (builder form). Accepts either an owned
    /// [`Stroke`] or an already-shared `Rc<Stroke>` handle.
    pub fn with_stroke(mut self, stroke: impl Into<Rc<Stroke>>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    /// Returns the fill paint handle, if any.
    pub fn fill(&self) -> Option<&Rc<Paint>> {
        self.fill.as_ref()
    }

    /// Returns the stroke handle, if any.
    pub fn stroke(&self) -> Option<&Rc<Stroke>> {
        self.stroke.as_ref()
    }

    /// Replaces the fill paint handle.
    pub fn set_fill(&mut self, fill: Option<Rc<Paint>>) {
        self.fill = fill;
    }

    /// Replaces the stroke handle.
    pub fn set_stroke(&mut self, stroke: Option<Rc<Stroke>>) {
        self.stroke = stroke;
    }

    /// Returns the shape's geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns mutable access to the shape's geometry.
    pub fn geometry_mut(&mut self) -> &mut Geometry {
        &mut self.geometry
    }

    // Geometry fields first, then fill, then stroke; the node appends the
    // shared attributes after these.
    pub(crate) fn serialize(&self, serializer: &mut Serializer) {
        self.geometry.serialize(serializer);
        if let Some(fill) = &self.fill {
            fill.serialize("fill", serializer);
        }
        serializer.add_optional_block("stroke", self.stroke.as_deref());
    }
}

/// The closed set of shape geometries.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// An axis-aligned rectangle, optionally with rounded corners.
    Rect(Rect),
    /// A circle around a center point.
    Circle(Circle),
    /// An axis-aligned ellipse.
    Ellipse(Ellipse),
    /// A straight line between two points.
    Line(Line),
    /// An open run of straight segments.
    Polyline(Polyline),
    /// A closed run of straight segments.
    Polygon(Polygon),
    /// A segment-based path.
    Path(Path),
}

impl Geometry {
    /// Returns the serialization tag for this geometry.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Line(_) => "line",
            Self::Polyline(_) => "polyline",
            Self::Polygon(_) => "polygon",
            Self::Path(_) => "path",
        }
    }

    /// Returns the positioned geometry box.
    pub fn frame(&self) -> Bounds {
        match self {
            Self::Rect(rect) => Bounds::new_from_top_left(
                Point::new(rect.x, rect.y),
                Size::new(rect.width, rect.height),
            ),
            Self::Circle(circle) => Bounds::new_from_center(
                Point::new(circle.cx, circle.cy),
                Size::new(circle.r * 2.0, circle.r * 2.0),
            ),
            Self::Ellipse(ellipse) => Bounds::new_from_center(
                Point::new(ellipse.cx, ellipse.cy),
                Size::new(ellipse.rx * 2.0, ellipse.ry * 2.0),
            ),
            Self::Line(line) => Bounds::new_from_extents(
                line.x1.min(line.x2),
                line.y1.min(line.y2),
                line.x1.max(line.x2),
                line.y1.max(line.y2),
            ),
            Self::Polyline(polyline) => hull(&polyline.points),
            Self::Polygon(polygon) => hull(&polygon.points),
            Self::Path(path) => path.frame(),
        }
    }

    pub(crate) fn serialize(&self, serializer: &mut Serializer) {
        match self {
            Self::Rect(rect) => {
                serializer.add_default("x", rect.x, 0.0);
                serializer.add_default("y", rect.y, 0.0);
                serializer.add("width", rect.width);
                serializer.add("height", rect.height);
                serializer.add_default("rx", rect.rx, 0.0);
                serializer.add_default("ry", rect.ry, 0.0);
            }
            Self::Circle(circle) => {
                serializer.add_default("cx", circle.cx, 0.0);
                serializer.add_default("cy", circle.cy, 0.0);
                serializer.add("r", circle.r);
            }
            Self::Ellipse(ellipse) => {
                serializer.add_default("cx", ellipse.cx, 0.0);
                serializer.add_default("cy", ellipse.cy, 0.0);
                serializer.add("rx", ellipse.rx);
                serializer.add("ry", ellipse.ry);
            }
            Self::Line(line) => {
                serializer.add("x1", line.x1);
                serializer.add("y1", line.y1);
                serializer.add("x2", line.x2);
                serializer.add("y2", line.y2);
            }
            Self::Polyline(polyline) => {
                serializer.add("points", points_attribute(&polyline.points));
            }
            Self::Polygon(polygon) => {
                serializer.add("points", points_attribute(&polygon.points));
            }
            Self::Path(path) => {
                serializer.add("d", path.to_path_data());
            }
        }
    }
}

/// Bounding box of a point run; the zero rectangle when empty.
fn hull(points: &[Point]) -> Bounds {
    let Some((first, rest)) = points.split_first() else {
        return Bounds::default();
    };
    rest.iter().fold(
        Bounds::new_from_top_left(*first, Size::default()),
        |bounds, point| bounds.include_point(*point),
    )
}

/// Encodes a point run for an SVG `points` attribute.
pub(crate) fn points_attribute(points: &[Point]) -> String {
    let pairs: Vec<String> = points
        .iter()
        .map(|point| format!("{},{}", point.x(), point.y()))
        .collect();
    pairs.join(" ")
}

/// An axis-aligned rectangle, optionally with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal corner radius; 0 means square corners.
    pub rx: f32,
    /// Vertical corner radius; 0 means square corners.
    pub ry: f32,
}

impl Rect {
    /// Creates a rectangle with square corners.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx: 0.0,
            ry: 0.0,
        }
    }

    /// Returns the rectangle with rounded corners.
    pub fn with_corner_radius(mut self, rx: f32, ry: f32) -> Self {
        self.rx = rx;
        self.ry = ry;
        self
    }
}

/// A circle around a center point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
}

/// An axis-aligned ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// An open run of straight segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

/// A closed run of straight segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_frame() {
        let frame = Shape::rect(10.0, 20.0, 30.0, 40.0).geometry().frame();
        assert_eq!(frame.min_x(), 10.0);
        assert_eq!(frame.min_y(), 20.0);
        assert_eq!(frame.to_size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_circle_frame_is_centered() {
        let frame = Shape::circle(50.0, 50.0, 10.0).geometry().frame();
        assert_eq!(frame.min_x(), 40.0);
        assert_eq!(frame.max_x(), 60.0);
        assert_eq!(frame.to_size(), Size::new(20.0, 20.0));
    }

    #[test]
    fn test_line_frame_normalizes_endpoints() {
        let frame = Shape::line(30.0, 5.0, 10.0, 25.0).geometry().frame();
        assert_eq!(frame.min_x(), 10.0);
        assert_eq!(frame.min_y(), 5.0);
        assert_eq!(frame.max_x(), 30.0);
        assert_eq!(frame.max_y(), 25.0);
    }

    #[test]
    fn test_empty_polyline_frame_is_zero() {
        let frame = Shape::polyline(Vec::new()).geometry().frame();
        assert_eq!(frame, Bounds::default());
    }

    #[test]
    fn test_polygon_frame_is_point_hull() {
        let frame = Shape::polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, -5.0),
            Point::new(5.0, 12.0),
        ])
        .geometry()
        .frame();

        assert_eq!(frame.min_y(), -5.0);
        assert_eq!(frame.max_x(), 10.0);
        assert_eq!(frame.max_y(), 12.0);
    }

    #[test]
    fn test_rect_serialize_omits_zero_position_and_radius() {
        let mut serializer = Serializer::new();
        Shape::rect(0.0, 0.0, 10.0, 5.0).serialize(&mut serializer);
        let value = serializer.finish();

        assert!(value.get("x").is_none());
        assert!(value.get("rx").is_none());
        assert_eq!(value["width"], 10.0);
        assert_eq!(value["height"], 5.0);
    }

    #[test]
    fn test_shape_serializes_fill_then_stroke() {
        let shape = Shape::rect(0.0, 0.0, 10.0, 5.0)
            .with_fill(Paint::color("red").unwrap())
            .with_stroke(Stroke::default());

        let mut serializer = Serializer::new();
        shape.serialize(&mut serializer);
        let value = serializer.finish();

        assert_eq!(value["fill"], "red");
        assert_eq!(value["stroke"]["fill"], "black");

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        let fill_index = keys.iter().position(|key| *key == "fill").unwrap();
        let stroke_index = keys.iter().position(|key| *key == "stroke").unwrap();
        assert!(fill_index < stroke_index);
    }

    #[test]
    fn test_points_attribute_encoding() {
        let encoded = points_attribute(&[Point::new(0.0, 0.0), Point::new(10.0, 5.5)]);
        assert_eq!(encoded, "0,0 10,5.5");
    }
}
