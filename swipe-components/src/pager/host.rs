//! The scrollable primitive that owns the raw scroll offset.

/// Owner of the pager's raw scroll offset.
///
/// Offsets grow toward higher page indices. Implementations clamp to
/// `0.0..=max_offset()`; the pager updates the maximum once every page has
/// been measured.
pub trait ScrollHost {
    /// Current scroll offset.
    fn offset(&self) -> f32;

    /// Largest reachable scroll offset.
    fn max_offset(&self) -> f32;

    /// Updates the scroll extent, clamping the current offset into it.
    fn set_max_offset(&mut self, max_offset: f32);

    /// Jumps to `offset` (clamped) and returns the offset actually applied.
    fn scroll_to(&mut self, offset: f32) -> f32;

    /// Scrolls by `delta` and returns the part of it that was consumed.
    fn scroll_by(&mut self, delta: f32) -> f32 {
        let before = self.offset();
        self.scroll_to(before + delta) - before
    }
}

/// Default [`ScrollHost`]: a clamped scalar offset.
///
/// The extent is unbounded until [`ScrollHost::set_max_offset`] is called,
/// so an offset restored before the first layout pass is not lost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    offset: f32,
    max_offset: f32,
}

impl ScrollPosition {
    /// Creates a position at `offset` with an unbounded extent.
    pub fn new(offset: f32) -> Self {
        Self {
            offset: if offset.is_finite() {
                offset.max(0.0)
            } else {
                0.0
            },
            max_offset: f32::INFINITY,
        }
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset)
    }
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScrollHost for ScrollPosition {
    fn offset(&self) -> f32 {
        self.offset
    }

    fn max_offset(&self) -> f32 {
        self.max_offset
    }

    fn set_max_offset(&mut self, max_offset: f32) {
        if max_offset.is_nan() {
            return;
        }
        self.max_offset = max_offset.max(0.0);
        self.offset = self.clamp(self.offset);
    }

    fn scroll_to(&mut self, offset: f32) -> f32 {
        if offset.is_finite() {
            self.offset = self.clamp(offset);
        }
        self.offset
    }
}
