//! Per-page bounds along the scroll axis.

use swipe_ui::PxRect;
use tracing::warn;

/// Position and extent of one page along the scroll axis, in content pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PageBounds {
    /// Left edge of the page.
    pub left: f32,
    /// Width of the page.
    pub width: f32,
}

impl PageBounds {
    /// Bounds reported for pages that have not been measured.
    pub const ZERO: Self = Self {
        left: 0.0,
        width: 0.0,
    };

    /// Creates page bounds.
    pub const fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Right edge of the page.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

impl From<PxRect> for PageBounds {
    fn from(rect: PxRect) -> Self {
        Self::new(rect.left(), rect.width)
    }
}

/// Measured bounds for every page, indexed by page.
///
/// The table length always equals the last known page count. Entries start
/// out unmeasured and are filled in as layout reports each page.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BoundsTable {
    entries: Vec<Option<PageBounds>>,
}

impl BoundsTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages tracked.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the pager has no pages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuilds the table for `count` pages, keeping existing entries by
    /// index and leaving new slots unmeasured. Returns whether the length
    /// changed.
    pub fn resize(&mut self, count: usize) -> bool {
        if count == self.entries.len() {
            return false;
        }
        self.entries = (0..count)
            .map(|index| self.entries.get(index).copied().flatten())
            .collect();
        true
    }

    /// Records the bounds of `index`. Out-of-range indices are ignored.
    /// Returns whether the stored value changed.
    pub fn set(&mut self, index: usize, bounds: PageBounds) -> bool {
        let Some(slot) = self.entries.get_mut(index) else {
            warn!(
                index,
                page_count = self.entries.len(),
                "ignoring bounds for a page outside the pager"
            );
            return false;
        };
        let changed = *slot != Some(bounds);
        *slot = Some(bounds);
        changed
    }

    /// Bounds of `index`, or [`PageBounds::ZERO`] when it is unmeasured or
    /// out of range.
    pub fn get(&self, index: usize) -> PageBounds {
        self.recorded(index).unwrap_or(PageBounds::ZERO)
    }

    /// Bounds of `index` only if layout has reported them.
    pub fn recorded(&self, index: usize) -> Option<PageBounds> {
        self.entries.get(index).copied().flatten()
    }

    /// Returns `true` when every page has reported bounds.
    pub fn is_fully_measured(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(Option::is_some)
    }

    /// Largest right edge among measured pages.
    pub fn content_right(&self) -> f32 {
        self.entries
            .iter()
            .flatten()
            .map(PageBounds::right)
            .fold(0.0, f32::max)
    }

    /// Iterates `(index, bounds)` pairs, reading unmeasured pages as zero.
    pub fn iter(&self) -> impl Iterator<Item = (usize, PageBounds)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index, entry.unwrap_or(PageBounds::ZERO)))
    }
}
