//! Rendering scene trees to SVG elements.
//!
//! The [`Renderer`] walks a [`Node`] tree and produces `svg` crate
//! elements: one element per node, with groups becoming `<g>` composites
//! and clip/mask subtrees collected into shared definitions. Dispatch is
//! an exhaustive match over the closed kind set, so every constructible
//! node renders to something (possibly nothing, for fully transparent
//! nodes) and no unreachable arms exist.
//!
//! Rendering is side-effect free with respect to the tree; the only
//! observable extra is the slow-render instrumentation, which reports
//! conversions that exceed a wall-clock threshold.

mod instrument;

pub use instrument::{Instrument, SlowRender, SlowRenderHook};

use std::rc::Rc;
use std::time::{Duration, Instant};

use log::{debug, info, trace};

use svg::node::element as svg_element;

use armillary_core::{
    apply_stroke,
    draw::{Paint, Stroke},
    geometry::{Point, Size},
    node::{Geometry, Kind, Node, Shape, TextAnchor},
};

use crate::error::ArmillaryError;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Converts scene trees into `svg` crate elements and documents.
///
/// A renderer is reusable across trees. Clip and mask definitions
/// accumulate while nodes render and are drained into the `<defs>`
/// block when a document is assembled.
///
/// # Examples
///
/// ```
/// use armillary::Renderer;
/// use armillary::draw::Paint;
/// use armillary::geometry::Size;
/// use armillary::node::{Group, Node, Shape};
///
/// let scene = Node::from(Group::new(vec![Node::from(
///     Shape::circle(32.0, 32.0, 30.0).with_fill(Paint::color("red").unwrap()),
/// )]));
///
/// let mut renderer = Renderer::new();
/// let document = renderer.render_document(&scene, Size::new(64.0, 64.0));
/// assert!(document.to_string().contains("<circle"));
/// ```
#[derive(Debug, Default)]
pub struct Renderer {
    instrument: Instrument,
    defs: Vec<SvgNode>,
    next_ref_id: u64,
}

impl Renderer {
    /// Creates a renderer with the default slow-render threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slow-render threshold, keeping the current report hook's
    /// default behavior (a structured warning).
    pub fn with_slow_render_threshold(mut self, threshold: Duration) -> Self {
        self.instrument = Instrument::new(threshold);
        self
    }

    /// Replaces the slow-render report hook.
    pub fn with_slow_render_hook(mut self, hook: impl Fn(&SlowRender) + 'static) -> Self {
        self.instrument = self.instrument.with_hook(hook);
        self
    }

    /// Renders one node (and its subtree) to an SVG element.
    ///
    /// Returns `None` for a node with opacity 0: a fully transparent
    /// subtree contributes nothing at all to the output. Fully
    /// transparent children of a group are skipped the same way while
    /// their siblings render.
    pub fn render_node(&mut self, node: &Node) -> Option<SvgNode> {
        if node.opacity() == 0.0 {
            trace!(kind = node.kind().name(); "Skipping fully transparent node");
            return None;
        }

        let start = Instant::now();
        let rendered = self.convert(node);
        self.instrument.observe(node.kind().name(), start.elapsed());
        rendered
    }

    /// Renders a scene tree into a complete SVG document of the given
    /// size, with any clip/mask definitions gathered into `<defs>`.
    pub fn render_document(&mut self, root: &Node, size: Size) -> svg::Document {
        info!(width = size.width(), height = size.height(); "Rendering scene document");

        let content = self.render_node(root);

        let mut document = svg::Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set("viewBox", (0.0, 0.0, size.width(), size.height()));

        let defs = std::mem::take(&mut self.defs);
        if !defs.is_empty() {
            let mut definitions = svg_element::Definitions::new();
            for def in defs {
                definitions = definitions.add(def);
            }
            document = document.add(definitions);
        }

        if let Some(content) = content {
            document = document.add(content);
        }

        debug!("Scene document rendered");
        document
    }

    /// Renders a scene tree and writes the document to a file.
    ///
    /// # Errors
    ///
    /// Returns [`ArmillaryError::Io`] when the file cannot be written.
    pub fn write_document(
        &mut self,
        root: &Node,
        size: Size,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), ArmillaryError> {
        let document = self.render_document(root, size);
        svg::save(path, &document)?;
        Ok(())
    }

    fn convert(&mut self, node: &Node) -> Option<SvgNode> {
        let element: SvgNode = match node.kind() {
            Kind::Group(group) => {
                let mut composite = svg_element::Group::new();
                for child in group.contents() {
                    if let Some(rendered) = self.render_node(child) {
                        composite = composite.add(rendered);
                    }
                }
                Box::new(self.apply_attributes(composite, node))
            }
            Kind::Shape(shape) => self.render_shape(shape, node),
            Kind::Text(text) => {
                let mut element =
                    svg_element::Text::new(text.content()).set("font-size", text.font_size());
                if text.anchor() != TextAnchor::Start {
                    element = element.set("text-anchor", text.anchor().to_svg_value());
                }
                let element = apply_paint(element, text.fill(), text.stroke());
                Box::new(self.apply_attributes(element, node))
            }
            Kind::Image(image) => {
                let element = svg_element::Image::new()
                    .set("href", image.href())
                    .set("width", image.width())
                    .set("height", image.height());
                Box::new(self.apply_attributes(element, node))
            }
            Kind::Viewport(viewport) => {
                let mut element = svg_element::SVG::new()
                    .set("width", viewport.width().to_string())
                    .set("height", viewport.height().to_string());
                if let Some(view_box) = viewport.view_box() {
                    element = element.set(
                        "viewBox",
                        (
                            view_box.min_x(),
                            view_box.min_y(),
                            view_box.width(),
                            view_box.height(),
                        ),
                    );
                }
                for child in viewport.contents() {
                    if let Some(rendered) = self.render_node(child) {
                        element = element.add(rendered);
                    }
                }
                Box::new(self.apply_attributes(element, node))
            }
            Kind::UserSpace(user_space) => {
                // The wrapper draws nothing of its own; its flag matters
                // only when it heads a clip definition.
                let inner = self.render_node(user_space.node())?;
                let composite = svg_element::Group::new().add(inner);
                Box::new(self.apply_attributes(composite, node))
            }
        };
        Some(element)
    }

    fn render_shape(&mut self, shape: &Shape, node: &Node) -> SvgNode {
        match shape.geometry() {
            Geometry::Rect(rect) => {
                let mut element = svg_element::Rectangle::new()
                    .set("x", rect.x)
                    .set("y", rect.y)
                    .set("width", rect.width)
                    .set("height", rect.height);
                if rect.rx != 0.0 {
                    element = element.set("rx", rect.rx);
                }
                if rect.ry != 0.0 {
                    element = element.set("ry", rect.ry);
                }
                self.finish_shape(element, shape, node)
            }
            Geometry::Circle(circle) => {
                let element = svg_element::Circle::new()
                    .set("cx", circle.cx)
                    .set("cy", circle.cy)
                    .set("r", circle.r);
                self.finish_shape(element, shape, node)
            }
            Geometry::Ellipse(ellipse) => {
                let element = svg_element::Ellipse::new()
                    .set("cx", ellipse.cx)
                    .set("cy", ellipse.cy)
                    .set("rx", ellipse.rx)
                    .set("ry", ellipse.ry);
                self.finish_shape(element, shape, node)
            }
            Geometry::Line(line) => {
                let element = svg_element::Line::new()
                    .set("x1", line.x1)
                    .set("y1", line.y1)
                    .set("x2", line.x2)
                    .set("y2", line.y2);
                self.finish_shape(element, shape, node)
            }
            Geometry::Polyline(polyline) => {
                let element =
                    svg_element::Polyline::new().set("points", encode_points(&polyline.points));
                self.finish_shape(element, shape, node)
            }
            Geometry::Polygon(polygon) => {
                let element =
                    svg_element::Polygon::new().set("points", encode_points(&polygon.points));
                self.finish_shape(element, shape, node)
            }
            Geometry::Path(path) => {
                let element = svg_element::Path::new().set("d", path.to_path_data());
                self.finish_shape(element, shape, node)
            }
        }
    }

    fn finish_shape<E: svg::Node>(&mut self, element: E, shape: &Shape, node: &Node) -> SvgNode {
        let element = apply_paint(element, shape.fill(), shape.stroke());
        Box::new(self.apply_attributes(element, node))
    }

    // Shared attributes are applied once per node, after the
    // kind-specific content is built.
    fn apply_attributes<E: svg::Node>(&mut self, mut element: E, node: &Node) -> E {
        if let Some(id) = node.id() {
            element.assign("id", id);
        }
        if !node.transform().is_identity() {
            element.assign("transform", &node.transform());
        }
        if node.opacity() != 1.0 {
            element.assign("opacity", node.opacity());
        }
        if let Some(clip) = node.clip() {
            let reference = self.define_clip(clip);
            element.assign("clip-path", format!("url(#{reference})"));
        }
        if let Some(mask) = node.mask() {
            let reference = self.define_mask(mask);
            element.assign("mask", format!("url(#{reference})"));
        }
        element
    }

    fn define_clip(&mut self, clip: &Node) -> String {
        let reference = self.next_reference("clip");
        let mut clip_path = svg_element::ClipPath::new().set("id", reference.clone());

        if let Kind::UserSpace(wrapper) = clip.kind() {
            let units = if wrapper.user_space() {
                "userSpaceOnUse"
            } else {
                "objectBoundingBox"
            };
            clip_path = clip_path.set("clipPathUnits", units);
        }
        if let Some(content) = self.render_node(clip) {
            clip_path = clip_path.add(content);
        }

        self.defs.push(Box::new(clip_path));
        reference
    }

    fn define_mask(&mut self, mask: &Node) -> String {
        let reference = self.next_reference("mask");
        let mut mask_element = svg_element::Mask::new().set("id", reference.clone());

        if let Some(content) = self.render_node(mask) {
            mask_element = mask_element.add(content);
        }

        self.defs.push(Box::new(mask_element));
        reference
    }

    fn next_reference(&mut self, prefix: &str) -> String {
        let reference = format!("{prefix}-{}", self.next_ref_id);
        self.next_ref_id += 1;
        reference
    }
}

/// Applies fill and stroke attributes shared by shapes and text. An
/// absent fill leaves the attribute unset, deferring to the host
/// default.
fn apply_paint<E: svg::Node>(
    mut element: E,
    fill: Option<&Rc<Paint>>,
    stroke: Option<&Rc<Stroke>>,
) -> E {
    if let Some(paint) = fill {
        element.assign("fill", paint.to_svg_value());
        let fill_opacity = paint.fill_opacity();
        if fill_opacity < 1.0 {
            element.assign("fill-opacity", fill_opacity);
        }
    }
    match stroke {
        Some(stroke) => apply_stroke!(element, stroke),
        None => element,
    }
}

/// Encodes a point run for an SVG `points` attribute.
fn encode_points(points: &[Point]) -> String {
    let pairs: Vec<String> = points
        .iter()
        .map(|point| format!("{},{}", point.x(), point.y()))
        .collect();
    pairs.join(" ")
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use armillary_core::{
        color::Color,
        geometry::Transform,
        node::{Group, UserSpace, Viewport},
    };

    use super::*;

    fn render_to_string(node: &Node) -> String {
        Renderer::new()
            .render_document(node, Size::new(100.0, 100.0))
            .to_string()
    }

    #[test]
    fn test_render_filled_rect() {
        let node = Node::from(
            Shape::rect(5.0, 5.0, 20.0, 10.0).with_fill(Paint::color("red").unwrap()),
        );

        let output = render_to_string(&node);
        assert!(output.contains("<rect"));
        assert!(output.contains("fill=\"red\""));
        assert!(output.contains("width=\"20\""));
    }

    #[test]
    fn test_render_stroked_line() {
        let stroke = Stroke::new(Color::new("blue").unwrap(), 2.0).with_dashes(vec![4.0, 2.0]);
        let node = Node::from(Shape::line(0.0, 0.0, 50.0, 0.0).with_stroke(stroke));

        let output = render_to_string(&node);
        assert!(output.contains("<line"));
        assert!(output.contains("stroke=\"blue\""));
        assert!(output.contains("stroke-width=\"2\""));
        assert!(output.contains("stroke-dasharray=\"4,2\""));
    }

    #[test]
    fn test_fully_transparent_node_renders_to_nothing() {
        let node = Node::from(Shape::circle(0.0, 0.0, 5.0)).with_opacity(0.0);
        assert!(Renderer::new().render_node(&node).is_none());
    }

    #[test]
    fn test_transparent_child_skipped_siblings_render() {
        let scene = Node::from(Group::new(vec![
            Node::from(Shape::circle(0.0, 0.0, 5.0)).with_opacity(0.0),
            Node::from(Shape::rect(0.0, 0.0, 10.0, 10.0)),
        ]));

        let output = render_to_string(&scene);
        assert!(!output.contains("<circle"));
        assert!(output.contains("<rect"));
    }

    #[test]
    fn test_transparent_group_hides_whole_subtree() {
        let scene = Node::from(Group::new(vec![Node::from(Shape::rect(
            0.0, 0.0, 10.0, 10.0,
        ))]))
        .with_opacity(0.0);

        let output = render_to_string(&scene);
        assert!(!output.contains("<rect"));
        assert!(!output.contains("<g"));
    }

    #[test]
    fn test_group_renders_as_composite_with_attributes() {
        let scene = Node::from(Group::new(vec![Node::from(Shape::rect(
            0.0, 0.0, 10.0, 10.0,
        ))]))
        .with_transform(Transform::translation(3.0, 4.0))
        .with_opacity(0.5)
        .with_id("layer");

        let output = render_to_string(&scene);
        assert!(output.contains("<g"));
        assert!(output.contains("transform=\"matrix(1, 0, 0, 1, 3, 4)\""));
        assert!(output.contains("opacity=\"0.5\""));
        assert!(output.contains("id=\"layer\""));
    }

    #[test]
    fn test_clip_becomes_def_and_reference() {
        let node = Node::from(Shape::rect(0.0, 0.0, 40.0, 40.0))
            .with_clip(Node::from(Shape::circle(20.0, 20.0, 10.0)));

        let output = render_to_string(&node);
        assert!(output.contains("<clipPath"));
        assert!(output.contains("clip-path=\"url(#clip-0)\""));
        assert!(output.contains("id=\"clip-0\""));
    }

    #[test]
    fn test_user_space_clip_sets_units() {
        let clip = Node::from(UserSpace::new(Node::from(Shape::rect(0.0, 0.0, 1.0, 1.0))));
        let node = Node::from(Shape::rect(0.0, 0.0, 40.0, 40.0)).with_clip(clip);

        let output = render_to_string(&node);
        assert!(output.contains("clipPathUnits=\"userSpaceOnUse\""));
    }

    #[test]
    fn test_mask_becomes_def_and_reference() {
        let node = Node::from(Shape::rect(0.0, 0.0, 40.0, 40.0))
            .with_mask(Node::from(Shape::circle(20.0, 20.0, 10.0)));

        let output = render_to_string(&node);
        assert!(output.contains("<mask"));
        assert!(output.contains("mask=\"url(#mask-0)\""));
    }

    #[test]
    fn test_viewport_renders_nested_svg() {
        let scene = Node::from(
            Viewport::new(vec![Node::from(Shape::circle(12.0, 12.0, 10.0))]).with_view_box(
                armillary_core::geometry::Bounds::new_from_top_left(
                    Point::default(),
                    Size::new(24.0, 24.0),
                ),
            ),
        );

        let output = render_to_string(&scene);
        assert!(output.contains("viewBox=\"0 0 24 24\""));
        assert!(output.contains("<circle"));
    }

    #[test]
    fn test_text_renders_anchor_only_when_not_default() {
        use armillary_core::node::Text;

        let plain = render_to_string(&Node::from(Text::new("hi")));
        assert!(plain.contains("<text"));
        assert!(!plain.contains("text-anchor"));

        let anchored =
            render_to_string(&Node::from(Text::new("hi").with_anchor(TextAnchor::Middle)));
        assert!(anchored.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn test_document_has_size_and_view_box() {
        let output = render_to_string(&Node::from(Group::new(Vec::new())));
        assert!(output.contains("width=\"100\""));
        assert!(output.contains("viewBox=\"0 0 100 100\""));
    }

    #[test]
    fn test_slow_render_hook_fires_above_zero_threshold() {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reports);

        let children: Vec<Node> = (0..64)
            .map(|index| Node::from(Shape::rect(index as f32, 0.0, 1.0, 1.0)))
            .collect();
        let scene = Node::from(Group::new(children));

        let mut renderer = Renderer::new()
            .with_slow_render_threshold(Duration::ZERO)
            .with_slow_render_hook(move |report| sink.borrow_mut().push(*report));
        renderer.render_node(&scene);

        let seen = reports.borrow();
        assert!(!seen.is_empty());
        assert!(seen.iter().any(|report| report.kind_name == "group"));
    }

    #[test]
    fn test_write_document_round_trips_through_file(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join("armillary-render-test.svg");
        let node = Node::from(Shape::circle(10.0, 10.0, 5.0));

        Renderer::new().write_document(&node, Size::new(20.0, 20.0), &path)?;
        let written = std::fs::read_to_string(&path)?;
        std::fs::remove_file(&path).ok();

        assert!(written.contains("<svg"));
        assert!(written.contains("<circle"));
        Ok(())
    }

    #[test]
    fn test_write_document_surfaces_io_errors() {
        let path = std::path::Path::new("/nonexistent-dir/armillary.svg");
        let node = Node::from(Shape::circle(0.0, 0.0, 1.0));

        let result = Renderer::new().write_document(&node, Size::new(4.0, 4.0), path);

        assert!(matches!(result, Err(ArmillaryError::Io(_))));
    }
}
