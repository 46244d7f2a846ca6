//! Frame timing for per-frame animation ticks.
//!
//! Animations are advanced by the host once per rendered frame with a
//! monotonically increasing frame timestamp in nanoseconds. [`FrameClock`]
//! turns those timestamps into the elapsed seconds since the previous tick.

/// Delta assumed for the very first frame of an animation (60 fps).
pub const FIRST_FRAME_DELTA: f32 = 1.0 / 60.0;

/// Tracks the previous frame timestamp and yields per-frame deltas.
///
/// ```
/// use swipe_ui::FrameClock;
///
/// let mut clock = FrameClock::new();
/// assert_eq!(clock.advance(1_000_000_000), 1.0 / 60.0);
/// assert_eq!(clock.advance(1_016_000_000), 0.016);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    last_frame_nanos: Option<u64>,
}

impl FrameClock {
    /// Creates a clock that has not observed any frame yet.
    pub const fn new() -> Self {
        Self {
            last_frame_nanos: None,
        }
    }

    /// Records `frame_nanos` and returns the seconds elapsed since the
    /// previous frame. Timestamps that go backwards yield zero.
    pub fn advance(&mut self, frame_nanos: u64) -> f32 {
        let delta = if let Some(last_frame_nanos) = self.last_frame_nanos {
            frame_nanos.saturating_sub(last_frame_nanos) as f32 / 1_000_000_000.0
        } else {
            FIRST_FRAME_DELTA
        };
        self.last_frame_nanos = Some(frame_nanos.max(self.last_frame_nanos.unwrap_or(0)));
        delta
    }

    /// Forgets the previous frame so the next tick starts a fresh timeline.
    pub fn reset(&mut self) {
        self.last_frame_nanos = None;
    }
}
