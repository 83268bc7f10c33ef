//! Integration tests for the scene graph API
//!
//! These tests exercise the public surface end to end: building nested
//! trees, cloning, lookup, serialization, and rendering.

use std::rc::Rc;

use armillary::Renderer;
use armillary::draw::{Paint, Stroke};
use armillary::geometry::{Size, Transform};
use armillary::node::{Group, Kind, Node, Shape};

fn sample_scene(shared_fill: &Rc<Paint>) -> Node {
    Node::from(Group::new(vec![
        Node::from(Shape::rect(0.0, 0.0, 40.0, 20.0).with_fill(Rc::clone(shared_fill)))
            .with_id("background"),
        Node::from(Group::new(vec![
            Node::from(
                Shape::circle(20.0, 10.0, 8.0)
                    .with_fill(Rc::clone(shared_fill))
                    .with_stroke(Stroke::default()),
            )
            .with_id("dot"),
        ]))
        .with_id("overlay")
        .with_transform(Transform::translation(2.0, 2.0)),
    ]))
}

#[test]
fn test_nested_scene_serializes_contents_arrays() {
    let fill = Rc::new(Paint::color("red").unwrap());
    let value = sample_scene(&fill).to_value();

    assert_eq!(value["type"], "group");
    let contents = value["contents"].as_array().expect("group contents array");
    assert_eq!(contents.len(), 2);

    assert_eq!(contents[0]["type"], "rect");
    assert_eq!(contents[0]["fill"], "red");

    assert_eq!(contents[1]["type"], "group");
    assert_eq!(contents[1]["transform"], "matrix(1, 0, 0, 1, 2, 2)");
    let inner = contents[1]["contents"].as_array().expect("inner contents");
    assert_eq!(inner[0]["type"], "circle");
    assert_eq!(inner[0]["stroke"]["fill"], "black");
}

#[test]
fn test_serialized_document_matches_expected_shape() {
    let fill = Rc::new(Paint::color("red").unwrap());
    let node = Node::from(Shape::rect(0.0, 0.0, 4.0, 2.0).with_fill(Rc::clone(&fill)))
        .with_opacity(0.5);

    // Zero-valued coordinates and default attributes are omitted, so
    // the document carries exactly the non-default state.
    assert_eq!(
        node.to_value(),
        serde_json::json!({
            "type": "rect",
            "width": 4.0,
            "height": 2.0,
            "fill": "red",
            "opacity": 0.5,
        })
    );
}

#[test]
fn test_clone_is_deep_for_structure_shared_for_paint() {
    let fill = Rc::new(Paint::color("red").unwrap());
    let mut scene = sample_scene(&fill);
    let cloned = scene.deep_clone();

    assert_eq!(cloned.bounds(), scene.bounds());

    // Structural independence: mutating the original leaves the clone
    // untouched.
    scene.node_by_id_mut("dot").unwrap().set_opacity(0.0);
    assert_eq!(cloned.node_by_id("dot").unwrap().opacity(), 1.0);

    // Paint descriptors stay shared by handle.
    let Kind::Shape(shape) = cloned.node_by_id("background").unwrap().kind() else {
        panic!("background should stay a shape");
    };
    assert!(Rc::ptr_eq(shape.fill().unwrap(), &fill));
}

#[test]
fn test_lookup_traverses_nested_groups() {
    let fill = Rc::new(Paint::color("red").unwrap());
    let scene = sample_scene(&fill);

    assert!(scene.node_by_id("dot").is_some());
    assert!(scene.node_by_id("overlay").is_some());
    assert!(scene.node_by_id("missing").is_none());
}

#[test]
fn test_render_skips_transparent_children() {
    let fill = Rc::new(Paint::color("red").unwrap());
    let mut scene = sample_scene(&fill);
    scene.node_by_id_mut("dot").unwrap().set_opacity(0.0);

    let output = Renderer::new()
        .render_document(&scene, Size::new(64.0, 32.0))
        .to_string();

    assert!(output.contains("<rect"));
    assert!(!output.contains("<circle"));
}

#[test]
fn test_group_contents_changes_are_observable() {
    use std::cell::RefCell;

    let events = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&events);

    let mut group = Group::new(Vec::new());
    group.subscribe(move |_| *sink.borrow_mut() += 1);

    group.push(Node::from(Shape::rect(0.0, 0.0, 1.0, 1.0)));
    group.update_contents(|contents| contents.clear());

    assert_eq!(*events.borrow(), 2);
}

#[test]
fn test_every_kind_renders() {
    use armillary::geometry::Point;
    use armillary::node::{
        Image, ImageFormat, Path, PathSegment, Text, UserSpace, Viewport,
    };

    let scene = Node::from(Group::new(vec![
        Node::from(Shape::path(Path::new(vec![
            PathSegment::MoveTo(Point::new(0.0, 0.0)),
            PathSegment::LineTo(Point::new(10.0, 10.0)),
            PathSegment::Close,
        ]))),
        Node::from(Text::new("label")),
        Node::from(Image::from_data(
            vec![1, 2, 3],
            ImageFormat::Png,
            8.0,
            8.0,
        )),
        Node::from(Viewport::new(vec![Node::from(Shape::circle(
            4.0, 4.0, 3.0,
        ))])),
        Node::from(UserSpace::new(Node::from(Shape::line(
            0.0, 0.0, 5.0, 5.0,
        )))),
    ]));

    let output = Renderer::new()
        .render_document(&scene, Size::new(32.0, 32.0))
        .to_string();

    assert!(output.contains("<path"));
    assert!(output.contains("<text"));
    assert!(output.contains("<image"));
    assert!(output.contains("<circle"));
    assert!(output.contains("<line"));
}
