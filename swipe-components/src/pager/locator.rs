//! Current page and page offset derived from bounds and scroll offset.
//!
//! A page owns the interval `[left - spacing/2, right + spacing/2]` along the
//! scroll axis (page 0 extends to negative infinity). The current page is the
//! first page whose interval contains the probe point
//! `center_x = reference_width / 2 + scroll_offset`.

use super::bounds::BoundsTable;

/// Which width the locator probes from when computing `center_x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterReference {
    /// Half of the pager (viewport) width.
    #[default]
    Viewport,
    /// Half of the first page's measured width, for pagers whose pages are
    /// sized proportionally rather than to the viewport.
    FirstPage,
}

/// Result of locating the current page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageLocation {
    /// Index of the current page.
    pub page: usize,
    /// `(scroll_offset - left) / width` of the current page.
    pub offset: f32,
}

/// Pure page location over a snapshot of pager geometry.
#[derive(Debug, Clone, Copy)]
pub struct PageLocator<'a> {
    bounds: &'a BoundsTable,
    scroll_offset: f32,
    viewport_width: f32,
    item_spacing: f32,
    reference: CenterReference,
}

impl<'a> PageLocator<'a> {
    /// Creates a locator.
    pub fn new(
        bounds: &'a BoundsTable,
        scroll_offset: f32,
        viewport_width: f32,
        item_spacing: f32,
        reference: CenterReference,
    ) -> Self {
        Self {
            bounds,
            scroll_offset,
            viewport_width,
            item_spacing,
            reference,
        }
    }

    /// Locates the current page and its offset.
    pub fn locate(&self) -> PageLocation {
        let page = self.current_page();
        PageLocation {
            page,
            offset: self.page_offset(page),
        }
    }

    /// Index of the page under the probe point, falling back to 0.
    pub fn current_page(&self) -> usize {
        let reference_width = match self.reference {
            CenterReference::Viewport => self.viewport_width,
            CenterReference::FirstPage => self.bounds.get(0).width,
        };
        let center_x = reference_width / 2.0 + self.scroll_offset;
        let half_spacing = self.item_spacing / 2.0;
        if !center_x.is_finite() || !half_spacing.is_finite() {
            return 0;
        }

        for (index, bounds) in self.bounds.iter() {
            if index == 0 {
                if center_x <= bounds.right() + half_spacing {
                    return 0;
                }
                continue;
            }
            if self.bounds.recorded(index).is_none() {
                continue;
            }
            if center_x >= bounds.left - half_spacing && center_x <= bounds.right() + half_spacing
            {
                return index;
            }
        }
        0
    }

    /// Fractional offset of the scroll position relative to `page`'s left
    /// edge, in page widths. Zero for unmeasured or zero-width pages.
    pub fn page_offset(&self, page: usize) -> f32 {
        let Some(bounds) = self.bounds.recorded(page) else {
            return 0.0;
        };
        if !(bounds.width.is_finite() && bounds.width > 0.0) {
            return 0.0;
        }
        let offset = (self.scroll_offset - bounds.left) / bounds.width;
        if offset.is_finite() { offset } else { 0.0 }
    }
}
