//! Change notification for scene mutations.
//!
//! A rendering adapter subscribes to a node or group and is told
//! synchronously whenever an attribute or child list changes, so it can
//! schedule a redraw. The channel is a plain observer list decoupled from
//! any UI runtime: a headless user (serialization, bounds queries) simply
//! never subscribes and pays nothing.
//!
//! Delivery is synchronous and single-threaded; concurrent mutation is
//! out of scope.

/// A mutation event published by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeEvent {
    /// A shared node attribute changed; carries the attribute name.
    Attribute(&'static str),
    /// A group's ordered child list changed (insert, remove, replace, or
    /// wholesale reassignment).
    ContentsChanged,
}

/// Handle returned by [`ChangeNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// An observer list publishing [`NodeEvent`]s to subscribers.
///
/// Notifiers are deliberately not cloned with the tree: a cloned subtree
/// starts with no subscribers, mirroring how gesture lists reset on
/// clone.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(NodeEvent)>)>,
}

impl ChangeNotifier {
    /// Creates a notifier with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber; it is invoked synchronously for every
    /// subsequent publish until unsubscribed.
    pub fn subscribe(&mut self, subscriber: impl FnMut(NodeEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Delivers an event to every subscriber, in subscription order.
    pub fn publish(&mut self, event: NodeEvent) {
        log::trace!(event:? = event; "publishing scene mutation");
        for (_, subscriber) in &mut self.subscribers {
            subscriber(event);
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn test_subscribe_and_publish() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(move |event| sink.borrow_mut().push(event));

        notifier.publish(NodeEvent::Attribute("opacity"));
        notifier.publish(NodeEvent::ContentsChanged);

        assert_eq!(
            *seen.borrow(),
            [NodeEvent::Attribute("opacity"), NodeEvent::ContentsChanged]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut notifier = ChangeNotifier::new();
        let id = notifier.subscribe(move |_| *sink.borrow_mut() += 1);

        notifier.publish(NodeEvent::ContentsChanged);
        assert!(notifier.unsubscribe(id));
        notifier.publish(NodeEvent::ContentsChanged);

        assert_eq!(*count.borrow(), 1);
        assert!(!notifier.unsubscribe(id));
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let mut notifier = ChangeNotifier::new();
        notifier.publish(NodeEvent::Attribute("transform"));
        assert_eq!(notifier.subscriber_count(), 0);
    }
}
