//! The scene graph node model.
//!
//! A scene is a tree of [`Node`]s. Every node carries the shared
//! compositing attributes (transform, opacity, opaque hint, clip, mask,
//! identifier, gestures) plus a [`Kind`] supplying its concrete content:
//! a group of children, a shape with geometry, text, an image, a
//! viewport, or a user-space wrapper.
//!
//! There are no abstract base kinds: `Kind` is a closed enum and every
//! variant carries real content, so the "base class reached at render
//! time" failure mode cannot be constructed.
//!
//! # Ownership
//!
//! A node exclusively owns its `clip` and `mask` subtrees and its
//! children; moving a node into another group transfers ownership.
//! Cloning is deep for tree structure (children, clip, mask) and shallow
//! for the immutable paint/stroke descriptors, which stay shared between
//! the original and the clone.
//!
//! # Example
//!
//! ```
//! use armillary_core::draw::Paint;
//! use armillary_core::node::{Group, Node, Shape};
//!
//! let scene = Node::from(Group::new(vec![
//!     Node::from(Shape::rect(0.0, 0.0, 40.0, 20.0).with_fill(Paint::color("red").unwrap()))
//!         .with_id("background"),
//! ]));
//!
//! assert_eq!(scene.bounds().width(), 40.0);
//! assert!(scene.node_by_id("background").is_some());
//! ```

mod group;
mod image;
mod path;
mod shape;
mod text;
mod user_space;
mod viewport;

pub use group::Group;
pub use image::{Image, ImageContent, ImageFormat};
pub use path::{Path, PathSegment};
pub use shape::{Circle, Ellipse, Geometry, Line, Polygon, Polyline, Rect, Shape};
pub use text::{Text, TextAnchor};
pub use user_space::UserSpace;
pub use viewport::{Viewport, ViewportLength};

use crate::{
    geometry::{Bounds, Point, Transform},
    gesture::Gesture,
    observe::{ChangeNotifier, NodeEvent, SubscriptionId},
    serialize::Serializer,
};

/// The concrete content of a [`Node`].
///
/// Closed for dispatch purposes: the render adapter matches exhaustively
/// over these variants. Adding a kind is a deliberate API change, not a
/// runtime surprise.
#[derive(Debug, Clone)]
pub enum Kind {
    /// An ordered, observable collection of child nodes.
    Group(Group),
    /// Concrete geometry with optional fill and stroke.
    Shape(Shape),
    /// A text run.
    Text(Text),
    /// A raster or vector image reference.
    Image(Image),
    /// A nested viewport establishing its own coordinate system.
    Viewport(Viewport),
    /// A coordinate-space wrapper, used chiefly by clip references.
    UserSpace(UserSpace),
}

impl Kind {
    /// Returns the discriminant tag used when serializing node sequences.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Group(_) => "group",
            Self::Shape(shape) => shape.geometry().name(),
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::Viewport(_) => "viewport",
            Self::UserSpace(_) => "user-space",
        }
    }
}

/// A single element of the scene graph.
///
/// See the [module documentation](self) for the ownership and cloning
/// rules.
#[derive(Debug)]
pub struct Node {
    transform: Transform,
    opaque: bool,
    opacity: f64,
    clip: Option<Box<Node>>,
    mask: Option<Box<Node>>,
    id: Option<String>,
    gestures: Vec<Gesture>,
    observers: ChangeNotifier,
    kind: Kind,
}

impl Node {
    /// Creates a node of the given kind with default attributes:
    /// identity transform, opaque, opacity 1, no clip, no mask, no id.
    pub fn new(kind: Kind) -> Self {
        Self {
            transform: Transform::IDENTITY,
            opaque: true,
            opacity: 1.0,
            clip: None,
            mask: None,
            id: None,
            gestures: Vec::new(),
            observers: ChangeNotifier::new(),
            kind,
        }
    }

    /// Sets the transform (builder form).
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the opaque hint (builder form).
    pub fn with_opaque(mut self, opaque: bool) -> Self {
        self.opaque = opaque;
        self
    }

    /// Sets the opacity (builder form).
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the clip subtree (builder form).
    pub fn with_clip(mut self, clip: Node) -> Self {
        self.clip = Some(Box::new(clip));
        self
    }

    /// Sets the mask subtree (builder form).
    pub fn with_mask(mut self, mask: Node) -> Self {
        self.mask = Some(Box::new(mask));
        self
    }

    /// Sets the identifier (builder form).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the node's transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns whether the node claims to fully cover its bounds.
    ///
    /// A compositing hint only; nothing enforces it geometrically.
    pub fn opaque(&self) -> bool {
        self.opaque
    }

    /// Returns the node's opacity. A value of 0 means the node
    /// contributes nothing to rendered output, though it still
    /// participates in bounds and serialization.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Returns the clip subtree, interpreted in this node's own
    /// coordinate space.
    pub fn clip(&self) -> Option<&Node> {
        self.clip.as_deref()
    }

    /// Returns the mask subtree, whose rendered alpha modulates this
    /// node's visibility.
    pub fn mask(&self) -> Option<&Node> {
        self.mask.as_deref()
    }

    /// Returns the node's identifier, if any. Uniqueness across a tree
    /// is by convention, not enforced.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the node's concrete content.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Returns mutable access to the node's concrete content.
    ///
    /// Group child-list mutations notify through the group's own
    /// subscription channel, not the node's attribute channel.
    pub fn kind_mut(&mut self) -> &mut Kind {
        &mut self.kind
    }

    /// Sets the transform and notifies subscribers.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.observers.publish(NodeEvent::Attribute("transform"));
    }

    /// Sets the opaque hint and notifies subscribers.
    pub fn set_opaque(&mut self, opaque: bool) {
        self.opaque = opaque;
        self.observers.publish(NodeEvent::Attribute("opaque"));
    }

    /// Sets the opacity and notifies subscribers.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
        self.observers.publish(NodeEvent::Attribute("opacity"));
    }

    /// Replaces the clip subtree and notifies subscribers.
    pub fn set_clip(&mut self, clip: Option<Node>) {
        self.clip = clip.map(Box::new);
        self.observers.publish(NodeEvent::Attribute("clip"));
    }

    /// Replaces the mask subtree and notifies subscribers.
    pub fn set_mask(&mut self, mask: Option<Node>) {
        self.mask = mask.map(Box::new);
        self.observers.publish(NodeEvent::Attribute("mask"));
    }

    /// Sets the identifier and notifies subscribers.
    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
        self.observers.publish(NodeEvent::Attribute("id"));
    }

    /// Subscribes to attribute changes on this node. Child-list changes
    /// of a group are published by [`Group::subscribe`] instead.
    pub fn subscribe(&mut self, subscriber: impl FnMut(NodeEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(subscriber)
    }

    /// Removes an attribute-change subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Copies the shared attributes from another node into this one:
    /// transform, opaque, opacity, and id verbatim; clip and mask as
    /// fresh clones. Returns `self` for chaining.
    ///
    /// This is the single attribute-copy routine used by cloning, so a
    /// new shared attribute only needs to be added here. Bulk copy does
    /// not notify subscribers.
    pub fn copy_attrs_from(&mut self, other: &Node) -> &mut Self {
        self.transform = other.transform;
        self.opaque = other.opaque;
        self.opacity = other.opacity;
        self.clip = other.clip.clone();
        self.mask = other.mask.clone();
        self.id = other.id.clone();
        self
    }

    /// Produces a deep, independent copy of this subtree.
    ///
    /// Children, clip, and mask are recursively cloned; fill and stroke
    /// descriptors stay shared by handle. The clone starts with an empty
    /// gesture list and no subscribers.
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// Returns the node's positioned geometry box in its local space.
    ///
    /// Groups aggregate their children; wrappers delegate inward.
    pub fn frame(&self) -> Bounds {
        match &self.kind {
            Kind::Group(group) => group.bounds(),
            Kind::Shape(shape) => shape.geometry().frame(),
            Kind::Text(text) => text.frame(),
            Kind::Image(image) => image.frame(),
            Kind::Viewport(viewport) => viewport.frame(),
            Kind::UserSpace(user_space) => user_space.node().frame(),
        }
    }

    /// Returns the node's local bounding rectangle.
    ///
    /// For most kinds this is a rectangle at the local origin sized from
    /// [`frame`](Self::frame); groups instead union their children's
    /// bounds (the zero rectangle when empty), and user-space wrappers
    /// delegate to the wrapped node.
    pub fn bounds(&self) -> Bounds {
        match &self.kind {
            Kind::Group(group) => group.bounds(),
            Kind::UserSpace(user_space) => user_space.node().bounds(),
            _ => Bounds::new_from_top_left(Point::default(), self.frame().to_size()),
        }
    }

    /// Finds the first node with the given identifier, checking this node
    /// before descending into children in list order (pre-order,
    /// depth-first). With duplicate ids the first match wins; a miss is a
    /// normal `None`.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        match &self.kind {
            Kind::Group(group) => group.contents().iter().find_map(|child| child.node_by_id(id)),
            Kind::Viewport(viewport) => viewport
                .contents()
                .iter()
                .find_map(|child| child.node_by_id(id)),
            Kind::UserSpace(user_space) => user_space.node().node_by_id(id),
            _ => None,
        }
    }

    /// Mutable variant of [`node_by_id`](Self::node_by_id); same
    /// traversal order.
    pub fn node_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        match &mut self.kind {
            Kind::Group(group) => group
                .contents_iter_mut()
                .find_map(|child| child.node_by_id_mut(id)),
            Kind::Viewport(viewport) => viewport
                .contents_iter_mut()
                .find_map(|child| child.node_by_id_mut(id)),
            Kind::UserSpace(user_space) => user_space.node_mut().node_by_id_mut(id),
            _ => None,
        }
    }

    /// Appends a tap handler requiring `count` taps.
    pub fn on_tap_gesture(&mut self, count: u32, handler: impl Fn() + 'static) {
        self.gestures.push(Gesture::tap(count, handler));
    }

    /// Appends an arbitrary gesture descriptor.
    pub fn add_gesture(&mut self, gesture: Gesture) {
        self.gestures.push(gesture);
    }

    /// Clears the gesture list.
    pub fn remove_all_gestures(&mut self) {
        self.gestures.clear();
    }

    /// Returns the attached gestures in attachment order.
    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures
    }

    /// Writes this node's fields into the serializer.
    ///
    /// Kind-specific fields come first, then the shared attributes:
    /// `transform` only when not identity, `opacity` only when ≠ 1,
    /// `opaque` only when not true, then clip and mask (whose absence
    /// omits the keys). Groups write their shared attributes before the
    /// `contents` array. Gestures are never serialized.
    pub fn serialize(&self, serializer: &mut Serializer) {
        match &self.kind {
            Kind::Group(group) => {
                self.serialize_attrs(serializer);
                serializer.add_nodes("contents", group.contents());
            }
            Kind::Shape(shape) => {
                shape.serialize(serializer);
                self.serialize_attrs(serializer);
            }
            Kind::Text(text) => {
                text.serialize(serializer);
                self.serialize_attrs(serializer);
            }
            Kind::Image(image) => {
                image.serialize(serializer);
                self.serialize_attrs(serializer);
            }
            Kind::Viewport(viewport) => {
                viewport.serialize(serializer);
                self.serialize_attrs(serializer);
                serializer.add_nodes("contents", viewport.contents());
            }
            Kind::UserSpace(user_space) => {
                user_space.serialize(serializer);
                self.serialize_attrs(serializer);
            }
        }
    }

    fn serialize_attrs(&self, serializer: &mut Serializer) {
        if !self.transform.is_identity() {
            serializer.add("transform", self.transform);
        }
        serializer.add_default("opacity", self.opacity, 1.0);
        serializer.add_default("opaque", self.opaque, true);
        serializer.add_node("clip", self.clip.as_deref());
        serializer.add_node("mask", self.mask.as_deref());
    }

    /// Serializes this node to a document value tagged with its concrete
    /// kind.
    pub fn to_value(&self) -> serde_json::Value {
        let mut serializer = Serializer::new();
        serializer.add("type", self.kind.name());
        self.serialize(&mut serializer);
        serializer.finish()
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut node = Node::new(self.kind.clone());
        node.copy_attrs_from(self);
        node
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::new(Kind::Group(group))
    }
}

impl From<Shape> for Node {
    fn from(shape: Shape) -> Self {
        Node::new(Kind::Shape(shape))
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::new(Kind::Text(text))
    }
}

impl From<Image> for Node {
    fn from(image: Image) -> Self {
        Node::new(Kind::Image(image))
    }
}

impl From<Viewport> for Node {
    fn from(viewport: Viewport) -> Self {
        Node::new(Kind::Viewport(viewport))
    }
}

impl From<UserSpace> for Node {
    fn from(user_space: UserSpace) -> Self {
        Node::new(Kind::UserSpace(user_space))
    }
}
