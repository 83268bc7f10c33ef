//! Slow-render instrumentation.
//!
//! Converting a node to host elements is expected to be fast; when a
//! single conversion exceeds a threshold the renderer reports it through
//! an injectable hook. The default hook emits a structured warning. This
//! is observability only and never affects rendered output.

use std::time::Duration;

use log::warn;

/// A report that one node conversion exceeded the slow-render threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlowRender {
    /// Discriminant name of the node kind that was slow.
    pub kind_name: &'static str,
    /// Wall-clock time the conversion took.
    pub elapsed: Duration,
}

/// Callback invoked for every [`SlowRender`] report.
pub type SlowRenderHook = Box<dyn Fn(&SlowRender)>;

/// Watches per-node conversion times against a threshold.
pub struct Instrument {
    threshold: Duration,
    hook: SlowRenderHook,
}

impl Instrument {
    /// Threshold above which a conversion counts as slow.
    pub const DEFAULT_THRESHOLD: Duration = Duration::from_millis(1);

    /// Creates an instrument with the given threshold and the default
    /// warning hook.
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            hook: Box::new(|report| {
                warn!(
                    kind = report.kind_name,
                    elapsed_us = report.elapsed.as_micros() as u64;
                    "Slow node render"
                );
            }),
        }
    }

    /// Replaces the report hook.
    pub fn with_hook(mut self, hook: impl Fn(&SlowRender) + 'static) -> Self {
        self.hook = Box::new(hook);
        self
    }

    /// Returns the configured threshold.
    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Fires the hook when `elapsed` exceeds the threshold.
    pub(crate) fn observe(&self, kind_name: &'static str, elapsed: Duration) {
        if elapsed > self.threshold {
            (self.hook)(&SlowRender { kind_name, elapsed });
        }
    }
}

impl Default for Instrument {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl std::fmt::Debug for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instrument")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn test_hook_fires_only_above_threshold() {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reports);
        let instrument =
            Instrument::new(Duration::from_millis(1)).with_hook(move |report| {
                sink.borrow_mut().push(*report);
            });

        instrument.observe("rect", Duration::from_micros(10));
        assert!(reports.borrow().is_empty());

        instrument.observe("group", Duration::from_millis(5));
        let seen = reports.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind_name, "group");
        assert_eq!(seen[0].elapsed, Duration::from_millis(5));
    }

    #[test]
    fn test_default_threshold_is_one_millisecond() {
        assert_eq!(Instrument::default().threshold(), Duration::from_millis(1));
    }
}
