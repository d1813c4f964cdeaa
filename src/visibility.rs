//! Visibility of the consuming context.
//!
//! The chunker pauses briefly between sub-chunks to simulate smooth token
//! arrival. A hidden/background consumer gains nothing from that pacing
//! (timers are typically throttled there, inflating wall-clock latency), so
//! it can opt out by injecting a capability from this module.

use std::sync::atomic::{AtomicBool, Ordering};

/// Reports whether the consuming context is hidden (backgrounded).
pub trait Visibility: Send + Sync {
    /// True when pacing pauses should be skipped.
    fn is_hidden(&self) -> bool;
}

/// A context that is always visible; pacing pauses always apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysVisible;

impl Visibility for AlwaysVisible {
    fn is_hidden(&self) -> bool {
        false
    }
}

impl<F> Visibility for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_hidden(&self) -> bool {
        self()
    }
}

/// A visibility flag the consumer can flip while a stream is running.
#[derive(Debug, Default)]
pub struct VisibilityFlag {
    hidden: AtomicBool,
}

impl VisibilityFlag {
    /// Create a flag for a currently-visible context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the context hidden or visible.
    pub fn set_hidden(&self, hidden: bool) {
        self.hidden.store(hidden, Ordering::Relaxed);
    }
}

impl Visibility for VisibilityFlag {
    fn is_hidden(&self) -> bool {
        self.hidden.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_starts_visible_and_flips() {
        let flag = VisibilityFlag::new();
        assert!(!flag.is_hidden());
        flag.set_hidden(true);
        assert!(flag.is_hidden());
        flag.set_hidden(false);
        assert!(!flag.is_hidden());
    }

    #[test]
    fn closures_report_visibility() {
        let hidden = || true;
        assert!(hidden.is_hidden());
        assert!(!AlwaysVisible.is_hidden());
    }
}
