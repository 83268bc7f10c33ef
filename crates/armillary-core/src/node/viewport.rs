//! Viewport nodes establishing a nested coordinate system.

use std::fmt;

use crate::{
    geometry::{Bounds, Point, Size},
    node::Node,
    serialize::Serializer,
};

/// A viewport dimension: absolute user units or a percentage of the
/// host's dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportLength {
    /// Absolute length in user units.
    Pixels(f32),
    /// Percentage of the hosting dimension, `100.0` meaning all of it.
    Percent(f32),
}

impl ViewportLength {
    /// Returns the absolute length, or `None` for percentages, which
    /// only resolve against a host.
    pub fn pixels(&self) -> Option<f32> {
        match self {
            Self::Pixels(value) => Some(*value),
            Self::Percent(_) => None,
        }
    }
}

impl Default for ViewportLength {
    fn default() -> Self {
        Self::Percent(100.0)
    }
}

impl fmt::Display for ViewportLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(value) => write!(f, "{value}"),
            Self::Percent(value) => write!(f, "{value}%"),
        }
    }
}

/// A node establishing its own coordinate system for its children.
///
/// The optional view box maps an interior rectangle onto the viewport's
/// extent. Dimensions default to 100% of the host.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    width: ViewportLength,
    height: ViewportLength,
    view_box: Option<Bounds>,
    contents: Vec<Node>,
}

impl Viewport {
    /// Creates a viewport owning the given children, sized to its host.
    pub fn new(contents: Vec<Node>) -> Self {
        Self {
            contents,
            ..Self::default()
        }
    }

    /// Sets both dimensions (builder form).
    pub fn with_size(mut self, width: ViewportLength, height: ViewportLength) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the view box (builder form).
    pub fn with_view_box(mut self, view_box: Bounds) -> Self {
        self.view_box = Some(view_box);
        self
    }

    /// Returns the declared width.
    pub fn width(&self) -> ViewportLength {
        self.width
    }

    /// Returns the declared height.
    pub fn height(&self) -> ViewportLength {
        self.height
    }

    /// Returns the view box, if declared.
    pub fn view_box(&self) -> Option<Bounds> {
        self.view_box
    }

    /// Returns the children in paint order.
    pub fn contents(&self) -> &[Node] {
        &self.contents
    }

    /// Returns the viewport's extent: absolute dimensions when both are
    /// in user units, otherwise the view box, otherwise the union of the
    /// children's bounds.
    pub fn frame(&self) -> Bounds {
        if let (Some(width), Some(height)) = (self.width.pixels(), self.height.pixels()) {
            return Bounds::new_from_top_left(Point::default(), Size::new(width, height));
        }
        if let Some(view_box) = self.view_box {
            return view_box;
        }
        let mut children = self.contents.iter().map(Node::bounds);
        let first = children.next().unwrap_or_default();
        children.fold(first, |merged, bounds| merged.merge(&bounds))
    }

    pub(crate) fn contents_iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.contents.iter_mut()
    }

    pub(crate) fn serialize(&self, serializer: &mut Serializer) {
        serializer.add_default("width", self.width.to_string(), "100%".to_string());
        serializer.add_default("height", self.height.to_string(), "100%".to_string());
        if let Some(view_box) = self.view_box {
            serializer.add(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    view_box.min_x(),
                    view_box.min_y(),
                    view_box.width(),
                    view_box.height()
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::node::Shape;

    use super::*;

    #[test]
    fn test_absolute_dimensions_win() {
        let viewport = Viewport::new(vec![Node::from(Shape::rect(0.0, 0.0, 500.0, 500.0))])
            .with_size(ViewportLength::Pixels(100.0), ViewportLength::Pixels(50.0))
            .with_view_box(Bounds::new_from_top_left(
                Point::default(),
                Size::new(10.0, 10.0),
            ));

        assert_eq!(viewport.frame().to_size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_view_box_used_when_dimensions_relative() {
        let viewport = Viewport::new(Vec::new()).with_view_box(Bounds::new_from_top_left(
            Point::new(5.0, 5.0),
            Size::new(20.0, 30.0),
        ));

        let frame = viewport.frame();
        assert_eq!(frame.min_point(), Point::new(5.0, 5.0));
        assert_eq!(frame.to_size(), Size::new(20.0, 30.0));
    }

    #[test]
    fn test_falls_back_to_children_union() {
        let viewport = Viewport::new(vec![
            Node::from(Shape::rect(0.0, 0.0, 10.0, 40.0)),
            Node::from(Shape::rect(0.0, 0.0, 30.0, 5.0)),
        ]);

        assert_eq!(viewport.frame().to_size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_serialize_omits_relative_defaults() {
        let mut serializer = Serializer::new();
        Viewport::new(Vec::new()).serialize(&mut serializer);
        assert!(serializer.is_empty());
    }

    #[test]
    fn test_serialize_writes_dimensions_and_view_box() {
        let mut serializer = Serializer::new();
        Viewport::new(Vec::new())
            .with_size(ViewportLength::Pixels(200.0), ViewportLength::Percent(50.0))
            .with_view_box(Bounds::new_from_top_left(
                Point::default(),
                Size::new(24.0, 24.0),
            ))
            .serialize(&mut serializer);
        let value = serializer.finish();

        assert_eq!(value["width"], "200");
        assert_eq!(value["height"], "50%");
        assert_eq!(value["viewBox"], "0 0 24 24");
    }
}
