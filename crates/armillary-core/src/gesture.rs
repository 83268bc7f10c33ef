//! Interaction callbacks attached to nodes.
//!
//! A node carries an ordered list of gesture descriptors. The list is a
//! delivery contract only: the host toolkit is responsible for hit
//! testing and event routing, and calls [`Gesture::fire`] when a gesture
//! is recognized on the node's rendered form.
//!
//! Gestures are never serialized and never cloned with the tree; a cloned
//! node starts with an empty gesture list.

use std::rc::Rc;

/// Callback invoked when a gesture completes.
pub type GestureHandler = Rc<dyn Fn()>;

/// The recognized interaction shape of a [`Gesture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// A tap requiring `count` consecutive taps (1 = single tap).
    Tap {
        /// Required tap count.
        count: u32,
    },
    /// A press held for at least `min_duration_ms` milliseconds.
    LongPress {
        /// Minimum hold time in milliseconds.
        min_duration_ms: u64,
    },
    /// A drag across the node's rendered area.
    Drag,
}

/// A gesture descriptor paired with its handler.
#[derive(Clone)]
pub struct Gesture {
    kind: GestureKind,
    handler: GestureHandler,
}

impl Gesture {
    /// Creates a gesture of the given kind.
    pub fn new(kind: GestureKind, handler: impl Fn() + 'static) -> Self {
        Self {
            kind,
            handler: Rc::new(handler),
        }
    }

    /// Creates a tap gesture with the required tap count.
    pub fn tap(count: u32, handler: impl Fn() + 'static) -> Self {
        Self::new(GestureKind::Tap { count }, handler)
    }

    /// Returns the gesture's descriptor.
    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    /// Invokes the handler.
    pub fn fire(&self) {
        (self.handler)();
    }
}

impl std::fmt::Debug for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gesture").field("kind", &self.kind).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_tap_gesture_fires_handler() {
        let fired = Rc::new(Cell::new(0));
        let sink = Rc::clone(&fired);

        let gesture = Gesture::tap(2, move || sink.set(sink.get() + 1));
        assert_eq!(gesture.kind(), GestureKind::Tap { count: 2 });

        gesture.fire();
        gesture.fire();
        assert_eq!(fired.get(), 2);
    }
}
