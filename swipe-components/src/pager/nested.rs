//! Nested-scroll fling consumption.
//!
//! Pages may contain their own scrollables. When such a child finishes a
//! fling, whatever scroll or velocity it did not use would normally bubble
//! up to ancestors. The pager swallows the leftovers on its own axis so a
//! page's inner fling never drags the pager or a container above it.

use swipe_ui::{PxOffset, Velocity};

/// Origin of a nested scroll delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedScrollSource {
    /// Direct user drag.
    Drag,
    /// Momentum after a release.
    Fling,
}

/// Consumes post-fling leftovers on the configured axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlingConsumer {
    consume_horizontal: bool,
    consume_vertical: bool,
}

impl FlingConsumer {
    /// Creates a consumer for the given axes.
    pub const fn new(consume_horizontal: bool, consume_vertical: bool) -> Self {
        Self {
            consume_horizontal,
            consume_vertical,
        }
    }

    /// Consumer used by horizontal pagers.
    pub const fn horizontal() -> Self {
        Self::new(true, false)
    }

    /// Scroll left over after a child scrolled. Fling-sourced leftovers are
    /// consumed on the configured axes, drag-sourced ones pass through.
    pub fn on_post_scroll(
        &self,
        _consumed: PxOffset,
        available: PxOffset,
        source: NestedScrollSource,
    ) -> PxOffset {
        match source {
            NestedScrollSource::Fling => PxOffset::new(
                self.pick(self.consume_horizontal, available.x),
                self.pick(self.consume_vertical, available.y),
            ),
            NestedScrollSource::Drag => PxOffset::ZERO,
        }
    }

    /// Velocity left over after a child fling; consumed on the configured
    /// axes.
    pub fn on_post_fling(&self, _consumed: Velocity, available: Velocity) -> Velocity {
        Velocity::new(
            self.pick(self.consume_horizontal, available.x),
            self.pick(self.consume_vertical, available.y),
        )
    }

    fn pick(&self, consume: bool, value: f32) -> f32 {
        if consume { value } else { 0.0 }
    }
}

impl Default for FlingConsumer {
    fn default() -> Self {
        Self::horizontal()
    }
}
