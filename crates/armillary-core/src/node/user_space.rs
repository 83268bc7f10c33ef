//! Coordinate-space wrapper nodes.

use crate::{node::Node, serialize::Serializer};

/// Wraps a single node and records which coordinate space its geometry
/// is expressed in.
///
/// Clip references use this to distinguish user-space geometry (the
/// default) from geometry expressed relative to the bounding box of the
/// element being clipped.
#[derive(Debug, Clone)]
pub struct UserSpace {
    node: Box<Node>,
    user_space: bool,
}

impl UserSpace {
    /// Wraps a node in user-space coordinates.
    pub fn new(node: Node) -> Self {
        Self {
            node: Box::new(node),
            user_space: true,
        }
    }

    /// Sets whether the wrapped geometry is in user space (builder form).
    pub fn with_user_space(mut self, user_space: bool) -> Self {
        self.user_space = user_space;
        self
    }

    /// Returns the wrapped node.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Returns mutable access to the wrapped node.
    pub fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    /// Returns true when the wrapped geometry is in user space.
    pub fn user_space(&self) -> bool {
        self.user_space
    }

    pub(crate) fn serialize(&self, serializer: &mut Serializer) {
        serializer.add("userSpace", self.user_space);
        serializer.add_node("node", Some(&self.node));
    }
}
