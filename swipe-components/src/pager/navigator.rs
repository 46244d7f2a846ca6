//! Page → scroll offset mapping and the eased jump animation.

use std::time::Duration;

use super::{AnimationStep, PagerError, bounds::BoundsTable, host::ScrollHost};
use crate::animation::ease_out;

/// Maps a page and fractional page offset to a scroll offset.
#[derive(Debug, Clone, Copy)]
pub struct SnapNavigator<'a> {
    bounds: &'a BoundsTable,
}

impl<'a> SnapNavigator<'a> {
    /// Creates a navigator over `bounds`.
    pub fn new(bounds: &'a BoundsTable) -> Self {
        Self { bounds }
    }

    /// Scroll offset at which `page` is displaced by `page_offset` page
    /// widths: `left + width * page_offset`.
    pub fn target_offset(&self, page: usize, page_offset: f32) -> Result<f32, PagerError> {
        if page >= self.bounds.len() {
            return Err(PagerError::PageOutOfRange {
                page,
                page_count: self.bounds.len(),
            });
        }
        if !(-1.0..=1.0).contains(&page_offset) {
            return Err(PagerError::InvalidPageOffset(page_offset));
        }
        let bounds = self.bounds.get(page);
        Ok(bounds.left + bounds.width * page_offset)
    }
}

/// Duration-based ease-out scroll between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EaseScroll {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl EaseScroll {
    pub(crate) fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.as_secs_f32(),
        }
    }

    pub(crate) fn target(&self) -> f32 {
        self.to
    }

    pub(crate) fn step<H: ScrollHost>(&mut self, dt: f32, host: &mut H) -> AnimationStep {
        self.elapsed += dt.max(0.0);
        let progress = if self.duration <= f32::EPSILON {
            1.0
        } else {
            self.elapsed / self.duration
        };
        if progress >= 1.0 {
            host.scroll_to(self.to);
            return AnimationStep::Finished;
        }
        host.scroll_to(self.from + (self.to - self.from) * ease_out(progress));
        AnimationStep::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::{bounds::PageBounds, host::ScrollPosition};

    fn bounds() -> BoundsTable {
        let mut table = BoundsTable::new();
        table.resize(3);
        table.set(0, PageBounds::new(0.0, 300.0));
        table.set(1, PageBounds::new(300.0, 200.0));
        table
    }

    #[test]
    fn test_target_offset() {
        let table = bounds();
        let navigator = SnapNavigator::new(&table);
        assert_eq!(navigator.target_offset(1, 0.0), Ok(300.0));
        assert_eq!(navigator.target_offset(1, 0.5), Ok(400.0));
        assert_eq!(navigator.target_offset(1, -1.0), Ok(100.0));
        // Unmeasured but in range.
        assert_eq!(navigator.target_offset(2, 0.0), Ok(0.0));
    }

    #[test]
    fn test_target_offset_rejects_misuse() {
        let table = bounds();
        let navigator = SnapNavigator::new(&table);
        assert_eq!(
            navigator.target_offset(3, 0.0),
            Err(PagerError::PageOutOfRange {
                page: 3,
                page_count: 3
            })
        );
        assert_eq!(
            navigator.target_offset(0, 1.5),
            Err(PagerError::InvalidPageOffset(1.5))
        );
        assert!(matches!(
            navigator.target_offset(0, f32::NAN),
            Err(PagerError::InvalidPageOffset(_))
        ));
    }

    #[test]
    fn test_ease_scroll_reaches_target() {
        let mut host = ScrollPosition::new(0.0);
        let mut ease = EaseScroll::new(0.0, 600.0, Duration::from_millis(300));
        assert_eq!(ease.target(), 600.0);
        let mut frames = 0;
        let mut previous = 0.0;
        while ease.step(1.0 / 60.0, &mut host) == AnimationStep::Running {
            assert!(host.offset() >= previous);
            previous = host.offset();
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(host.offset(), 600.0);
        assert!(frames >= 15);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut host = ScrollPosition::new(50.0);
        let mut ease = EaseScroll::new(50.0, 10.0, Duration::ZERO);
        assert_eq!(ease.step(0.0, &mut host), AnimationStep::Finished);
        assert_eq!(host.offset(), 10.0);
    }
}
