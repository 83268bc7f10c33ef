//! The group node kind: an ordered, observable collection of children.

use crate::{
    geometry::Bounds,
    node::Node,
    observe::{ChangeNotifier, NodeEvent, SubscriptionId},
};

/// An ordered, observable collection of child nodes.
///
/// Child order is paint order (back to front). Children are exclusively
/// owned; pushing a node into a group moves it there. Every mutator
/// publishes [`NodeEvent::ContentsChanged`] synchronously so a subscribed
/// rendering adapter can schedule a redraw.
#[derive(Debug, Default)]
pub struct Group {
    contents: Vec<Node>,
    observers: ChangeNotifier,
}

impl Group {
    /// Creates a group owning the given children.
    pub fn new(contents: Vec<Node>) -> Self {
        Self {
            contents,
            observers: ChangeNotifier::new(),
        }
    }

    /// Returns the children in paint order.
    pub fn contents(&self) -> &[Node] {
        &self.contents
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Returns true when the group has no children.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Appends a child.
    pub fn push(&mut self, node: Node) {
        self.contents.push(node);
        self.observers.publish(NodeEvent::ContentsChanged);
    }

    /// Inserts a child at `index`, shifting later children back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` (the ordinary slice contract).
    pub fn insert(&mut self, index: usize, node: Node) {
        self.contents.insert(index, node);
        self.observers.publish(NodeEvent::ContentsChanged);
    }

    /// Removes and returns the child at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Node {
        let removed = self.contents.remove(index);
        self.observers.publish(NodeEvent::ContentsChanged);
        removed
    }

    /// Replaces the child at `index`, returning the previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, node: Node) -> Node {
        let previous = std::mem::replace(&mut self.contents[index], node);
        self.observers.publish(NodeEvent::ContentsChanged);
        previous
    }

    /// Replaces the entire child list.
    pub fn set_contents(&mut self, contents: Vec<Node>) {
        self.contents = contents;
        self.observers.publish(NodeEvent::ContentsChanged);
    }

    /// Applies an arbitrary edit to the child list, publishing a single
    /// change event afterwards.
    pub fn update_contents(&mut self, edit: impl FnOnce(&mut Vec<Node>)) {
        edit(&mut self.contents);
        self.observers.publish(NodeEvent::ContentsChanged);
    }

    /// Subscribes to child-list changes.
    pub fn subscribe(&mut self, subscriber: impl FnMut(NodeEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(subscriber)
    }

    /// Removes a child-list subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Returns the union of every child's bounds, or the zero rectangle
    /// for an empty group.
    pub fn bounds(&self) -> Bounds {
        let mut children = self.contents.iter().map(Node::bounds);
        let first = children.next().unwrap_or_default();
        children.fold(first, |merged, bounds| merged.merge(&bounds))
    }

    pub(crate) fn contents_iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.contents.iter_mut()
    }
}

impl Clone for Group {
    // Children deep-clone with the tree; subscribers stay behind.
    fn clone(&self) -> Self {
        Self {
            contents: self.contents.clone(),
            observers: ChangeNotifier::new(),
        }
    }
}
