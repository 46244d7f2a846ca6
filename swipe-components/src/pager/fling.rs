//! Fling destination decision and the clamped settling animation.
//!
//! A release velocity first picks a destination page. The pager then drives
//! a spring from `0` toward `final_delta = target.left - scroll_offset`,
//! seeded with the release velocity. Each frame the spring value is clamped
//! so it never passes `final_delta`, and only the increment since the
//! previous frame is handed to the scroll host. The fling arrives when the
//! spring either pushes past the target (the clamp engaged) or comes to
//! rest; the pager then hard-snaps onto the page edge.

use super::{AnimationStep, host::ScrollHost};
use crate::spring::{Spring1D, SpringSpec};

/// Release speed, in pixels per second, at or below which a release is
/// treated as stationary.
pub const DEFAULT_FLING_VELOCITY_THRESHOLD: f32 = 300.0;

/// How the page offset breaks the tie between advancing and staying.
///
/// With `offset = (scroll_offset - left) / width` of the current page:
///
/// | convention     | forward (`v > T`)          | backward (`v < -T`)        |
/// |----------------|----------------------------|----------------------------|
/// | `LeadingEdge`  | `offset >= 0` → next page  | `offset > 0` → stay        |
/// | `TrailingEdge` | `offset < 0` → next page   | `offset < 0` → stay        |
///
/// Every other case stays on (forward) or retreats from (backward) the
/// current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapConvention {
    /// Advance once the current page's left edge has been reached or passed.
    #[default]
    LeadingEdge,
    /// Advance while the viewport is still short of the current page's left
    /// edge.
    TrailingEdge,
}

/// Picks a fling destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingResolver {
    convention: SnapConvention,
    velocity_threshold: f32,
}

impl FlingResolver {
    /// Creates a resolver.
    pub fn new(convention: SnapConvention, velocity_threshold: f32) -> Self {
        Self {
            convention,
            velocity_threshold: velocity_threshold.abs(),
        }
    }

    /// Destination page for a release at `velocity` from `current_page`
    /// displaced by `page_offset`. `None` when the destination would be
    /// before the first page.
    pub fn target_page(
        &self,
        velocity: f32,
        current_page: usize,
        page_offset: f32,
    ) -> Option<usize> {
        let threshold = self.velocity_threshold;
        if velocity > threshold {
            let advance = match self.convention {
                SnapConvention::LeadingEdge => page_offset >= 0.0,
                SnapConvention::TrailingEdge => page_offset < 0.0,
            };
            if advance {
                current_page.checked_add(1)
            } else {
                Some(current_page)
            }
        } else if velocity < -threshold {
            let stay = match self.convention {
                SnapConvention::LeadingEdge => page_offset > 0.0,
                SnapConvention::TrailingEdge => page_offset < 0.0,
            };
            if stay {
                Some(current_page)
            } else {
                current_page.checked_sub(1)
            }
        } else {
            Some(current_page)
        }
    }
}

impl Default for FlingResolver {
    fn default() -> Self {
        Self::new(SnapConvention::default(), DEFAULT_FLING_VELOCITY_THRESHOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FlingAnimation {
    target_page: usize,
    final_delta: f32,
    scrolled: f32,
    spring: Spring1D,
    spec: SpringSpec,
}

impl FlingAnimation {
    pub(crate) fn new(
        target_page: usize,
        final_delta: f32,
        velocity: f32,
        spec: SpringSpec,
    ) -> Self {
        let mut spring = Spring1D::new(0.0).with_velocity(velocity);
        spring.set_target(final_delta);
        Self {
            target_page,
            final_delta,
            scrolled: 0.0,
            spring,
            spec,
        }
    }

    pub(crate) fn target_page(&self) -> usize {
        self.target_page
    }

    pub(crate) fn step<H: ScrollHost>(&mut self, dt: f32, host: &mut H) -> AnimationStep {
        self.spring.update(dt, self.spec);
        let value = self.spring.value;
        let forward = self.final_delta >= 0.0;
        let clamped = if forward {
            value.min(self.final_delta)
        } else {
            value.max(self.final_delta)
        };

        let delta = clamped - self.scrolled;
        if delta != 0.0 {
            host.scroll_by(delta);
        }
        self.scrolled = clamped;

        // A release against the travel direction first carries the spring
        // away from the target; only crossing the target counts as arrival.
        let passed = if forward {
            value > self.final_delta
        } else {
            value < self.final_delta
        };
        if passed || self.spring.is_at_rest() {
            AnimationStep::Arrived(self.target_page)
        } else {
            AnimationStep::Running
        }
    }
}
