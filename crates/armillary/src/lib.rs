//! Armillary - a retained-mode vector-graphics scene graph.
//!
//! A scene is a tree of [`node::Node`]s carrying transforms, opacity,
//! clips, masks, identifiers, and gestures. Trees are built and mutated
//! headlessly, observed for changes, serialized to compact structured
//! documents, and rendered to SVG through [`Renderer`].
//!
//! # Examples
//!
//! ```
//! use armillary::Renderer;
//! use armillary::draw::Paint;
//! use armillary::geometry::Size;
//! use armillary::node::{Group, Node, Shape};
//!
//! // Build a scene
//! let scene = Node::from(Group::new(vec![
//!     Node::from(Shape::rect(8.0, 8.0, 48.0, 48.0).with_fill(Paint::color("red").unwrap()))
//!         .with_id("card"),
//! ]));
//!
//! // Look nodes up by identifier
//! assert!(scene.node_by_id("card").is_some());
//!
//! // Render to an SVG document
//! let mut renderer = Renderer::new();
//! let document = renderer.render_document(&scene, Size::new(64.0, 64.0));
//! assert!(document.to_string().contains("<rect"));
//! ```

pub mod render;

mod error;

pub use armillary_core::{color, draw, geometry, gesture, node, observe, serialize};

pub use error::ArmillaryError;
pub use render::Renderer;
