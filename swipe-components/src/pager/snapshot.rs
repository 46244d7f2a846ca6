//! Persisted pager position.

/// Everything needed to put a recreated pager back on the same page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerSnapshot {
    /// Page that was current when the snapshot was taken.
    pub page: usize,
}

impl PagerSnapshot {
    /// Creates a snapshot for `page`.
    pub const fn new(page: usize) -> Self {
        Self { page }
    }
}
