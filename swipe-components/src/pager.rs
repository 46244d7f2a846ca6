//! Horizontal snap-to-page pager state.
//!
//! ## Usage
//!
//! Keep one [`PagerState`] per pager. Feed it layout results with
//! [`PagerState::measure`] and [`PagerState::report_page_bounds`], forward
//! drag deltas and the release velocity from the host's gesture handling,
//! and call [`PagerState::tick`] once per frame while it asks for frames.
//!
//! ```
//! use swipe_components::pager::{PagerArgs, PagerState};
//! use swipe_ui::PxRect;
//!
//! let mut pager = PagerState::new(PagerArgs::default());
//! pager.measure(3, 300.0);
//! for page in 0..3 {
//!     let left = page as f32 * 300.0;
//!     pager.report_page_bounds(3, page, PxRect::new(left, 0.0, 300.0, 500.0), 0.0);
//! }
//!
//! pager.begin_drag();
//! pager.drag_by(40.0);
//! assert_eq!(pager.on_fling_end(1200.0), 0.0);
//!
//! let mut frame_nanos = 0;
//! while pager.tick(frame_nanos) {
//!     frame_nanos += 16_666_667;
//! }
//! assert_eq!(pager.current_page(), 1);
//! assert_eq!(pager.scroll_offset(), 300.0);
//! ```
pub mod bounds;
pub mod fling;
pub mod host;
pub mod locator;
pub mod navigator;
pub mod nested;
pub mod snapshot;

use std::time::Duration;

use derive_setters::Setters;
use parking_lot::Mutex;
use swipe_ui::{Density, Dp, FrameClock, PxRect};
use tracing::{debug, trace};

pub use self::{
    bounds::{BoundsTable, PageBounds},
    fling::{DEFAULT_FLING_VELOCITY_THRESHOLD, FlingResolver, SnapConvention},
    host::{ScrollHost, ScrollPosition},
    locator::{CenterReference, PageLocation, PageLocator},
    navigator::SnapNavigator,
    nested::{FlingConsumer, NestedScrollSource},
    snapshot::PagerSnapshot,
};
use self::{fling::FlingAnimation, navigator::EaseScroll};
use crate::spring::SpringSpec;

const DEFAULT_SCROLL_ANIMATION_DURATION: Duration = Duration::from_millis(300);
const DEFAULT_FALLBACK_PAGE_WIDTH: Dp = Dp(360.0);

/// Programmer errors reported by page navigation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PagerError {
    /// The requested page does not exist.
    #[error("page {page} is out of range for a pager with {page_count} pages")]
    PageOutOfRange {
        /// Requested page.
        page: usize,
        /// Pages currently tracked.
        page_count: usize,
    },
    /// The page offset is not a finite value in `-1.0..=1.0`.
    #[error("page offset {0} is outside -1.0..=1.0")]
    InvalidPageOffset(f32),
}

/// Configuration arguments for [`PagerState`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct PagerArgs {
    /// Page shown once the first layout pass has measured every page.
    pub initial_page: usize,
    /// Tie-break between advancing and staying on a fling.
    pub snap_convention: SnapConvention,
    /// Width the page locator probes from.
    pub center_reference: CenterReference,
    /// Release speed (px/s) at or below which a release settles in place.
    pub fling_velocity_threshold: f32,
    /// Spring that settles a fling onto its page.
    pub fling_spring: SpringSpec,
    /// Duration of [`PagerState::animate_scroll_to_page`].
    pub scroll_animation_duration: Duration,
    /// Page width used until the pager has been measured.
    pub fallback_page_width: Dp,
    /// Pixel density used to convert dp configuration.
    pub density: Density,
    /// Whether drag deltas from the user move the pager.
    pub user_scroll_enabled: bool,
}

impl Default for PagerArgs {
    fn default() -> Self {
        Self {
            initial_page: 0,
            snap_convention: SnapConvention::default(),
            center_reference: CenterReference::default(),
            fling_velocity_threshold: DEFAULT_FLING_VELOCITY_THRESHOLD,
            fling_spring: SpringSpec::default(),
            scroll_animation_duration: DEFAULT_SCROLL_ANIMATION_DURATION,
            fallback_page_width: DEFAULT_FALLBACK_PAGE_WIDTH,
            density: Density::STANDARD,
            user_scroll_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnimationStep {
    Running,
    Finished,
    Arrived(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScrollAnimation {
    Idle,
    Ease(EaseScroll),
    Fling(FlingAnimation),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LocatorMemo {
    version: u64,
    offset_bits: u32,
    location: PageLocation,
}

/// State machine behind a horizontal snap-to-page pager.
///
/// Current page and page offset are derived from the bounds table and the
/// host's scroll offset on every read; the result is memoized until either
/// input changes.
#[derive(Debug)]
pub struct PagerState<H = ScrollPosition> {
    args: PagerArgs,
    host: H,
    bounds: BoundsTable,
    bounds_version: u64,
    item_spacing: f32,
    measured_width: Option<f32>,
    animation: ScrollAnimation,
    clock: FrameClock,
    pending_page: Option<usize>,
    dragging: bool,
    /// Last computed location. A mutex rather than a `Cell` keeps the pager
    /// `Sync`, so it can live in a [`swipe_ui::State`] shared across threads.
    located: Mutex<Option<LocatorMemo>>,
}

impl PagerState<ScrollPosition> {
    /// Creates a pager scrolled to the start, which moves to
    /// `args.initial_page` after the first complete layout pass.
    pub fn new(args: PagerArgs) -> Self {
        Self::with_host(args, ScrollPosition::default())
    }

    /// Recreates a pager from a persisted snapshot.
    pub fn restore(snapshot: PagerSnapshot, args: PagerArgs) -> Self {
        Self::new(args.initial_page(snapshot.page))
    }
}

impl<H: ScrollHost> PagerState<H> {
    /// Creates a pager on top of an existing scroll host.
    pub fn with_host(args: PagerArgs, host: H) -> Self {
        let pending_page = (args.initial_page > 0).then_some(args.initial_page);
        Self {
            args,
            host,
            bounds: BoundsTable::new(),
            bounds_version: 0,
            item_spacing: 0.0,
            measured_width: None,
            animation: ScrollAnimation::Idle,
            clock: FrameClock::new(),
            pending_page,
            dragging: false,
            located: Mutex::new(None),
        }
    }

    /// Configuration in use.
    pub fn args(&self) -> &PagerArgs {
        &self.args
    }

    /// The scroll host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Measured page bounds.
    pub fn bounds(&self) -> &BoundsTable {
        &self.bounds
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.bounds.len()
    }

    /// Gap between adjacent pages as last reported by layout.
    pub fn item_spacing(&self) -> f32 {
        self.item_spacing
    }

    /// Raw scroll offset.
    pub fn scroll_offset(&self) -> f32 {
        self.host.offset()
    }

    /// Width pages should be laid out at: the measured pager width, or the
    /// configured fallback before the first measurement.
    pub fn page_width(&self) -> f32 {
        self.measured_width
            .unwrap_or_else(|| self.args.fallback_page_width.to_px(self.args.density))
    }

    /// Whether a drag or an animation is currently moving the pager.
    pub fn is_scroll_in_progress(&self) -> bool {
        self.dragging || self.animation != ScrollAnimation::Idle
    }

    /// Nested-scroll connection that keeps child fling leftovers from
    /// escaping the pager.
    pub fn nested_scroll_consumer(&self) -> FlingConsumer {
        FlingConsumer::horizontal()
    }

    /// Records the page count and measured pager width for a layout pass.
    pub fn measure(&mut self, page_count: usize, pager_width: f32) {
        let mut changed = self.bounds.resize(page_count);
        if pager_width.is_finite() && pager_width > 0.0 && self.measured_width != Some(pager_width)
        {
            self.measured_width = Some(pager_width);
            changed = true;
        }
        if changed {
            self.invalidate();
            self.sync_extent();
        }
    }

    /// Records where layout placed page `index`. Safe to call repeatedly and
    /// in any page order.
    pub fn report_page_bounds(
        &mut self,
        page_count: usize,
        index: usize,
        rect: PxRect,
        item_spacing: f32,
    ) {
        let mut changed = self.bounds.resize(page_count);
        if self.item_spacing != item_spacing {
            self.item_spacing = item_spacing;
            changed = true;
        }
        let bounds = PageBounds::from(rect);
        if self.bounds.set(index, bounds) {
            trace!(index, left = bounds.left, width = bounds.width, "page bounds");
            changed = true;
        }
        if changed {
            self.invalidate();
            self.sync_extent();
        }
        self.apply_pending_page();
    }

    /// Current page and page offset.
    pub fn location(&self) -> PageLocation {
        let offset = self.host.offset();
        let mut memo = self.located.lock();
        if let Some(cached) = *memo
            && cached.version == self.bounds_version
            && cached.offset_bits == offset.to_bits()
        {
            return cached.location;
        }
        let location = self.locator(offset).locate();
        *memo = Some(LocatorMemo {
            version: self.bounds_version,
            offset_bits: offset.to_bits(),
            location,
        });
        location
    }

    /// Index of the page under the viewport's reference point.
    pub fn current_page(&self) -> usize {
        self.location().page
    }

    /// Displacement of the scroll offset from the current page's left edge,
    /// in page widths.
    pub fn current_page_offset(&self) -> f32 {
        self.location().offset
    }

    /// Scroll offset corresponding to `page` displaced by `page_offset`.
    pub fn target_offset(&self, page: usize, page_offset: f32) -> Result<f32, PagerError> {
        SnapNavigator::new(&self.bounds).target_offset(page, page_offset)
    }

    /// Jumps to `page` immediately, stopping any running animation.
    pub fn scroll_to_page(&mut self, page: usize, page_offset: f32) -> Result<(), PagerError> {
        let target = self.target_offset(page, page_offset)?;
        self.stop_animation();
        self.pending_page = None;
        self.host.scroll_to(target);
        Ok(())
    }

    /// Eases to `page`, stopping any running animation first.
    pub fn animate_scroll_to_page(
        &mut self,
        page: usize,
        page_offset: f32,
    ) -> Result<(), PagerError> {
        let target = self.target_offset(page, page_offset)?;
        self.stop_animation();
        self.pending_page = None;
        self.animation = ScrollAnimation::Ease(EaseScroll::new(
            self.host.offset(),
            target,
            self.args.scroll_animation_duration,
        ));
        Ok(())
    }

    /// Handles the release of a drag with `initial_velocity` (px/s, positive
    /// toward higher pages). Hosts call this on every release, including
    /// zero-velocity ones, so the pager always settles on a page.
    ///
    /// Returns the velocity left for the host: `0.0` when the pager took the
    /// fling, or `initial_velocity` unchanged when no destination page has
    /// recorded bounds.
    pub fn on_fling_end(&mut self, initial_velocity: f32) -> f32 {
        self.dragging = false;
        if !initial_velocity.is_finite() {
            return initial_velocity;
        }

        let location = self.location();
        let resolver =
            FlingResolver::new(self.args.snap_convention, self.args.fling_velocity_threshold);
        let target = resolver
            .target_page(initial_velocity, location.page, location.offset)
            .and_then(|page| self.bounds.recorded(page).map(|bounds| (page, bounds)));
        let Some((target_page, target_bounds)) = target else {
            debug!(
                velocity = initial_velocity,
                page = location.page,
                offset = location.offset,
                "fling has no measured destination, leaving velocity to the host"
            );
            return initial_velocity;
        };

        let final_delta = target_bounds.left - self.host.offset();
        debug!(
            velocity = initial_velocity,
            page = location.page,
            offset = location.offset,
            target_page,
            final_delta,
            "fling"
        );
        self.stop_animation();
        self.pending_page = None;
        self.animation = ScrollAnimation::Fling(FlingAnimation::new(
            target_page,
            final_delta,
            initial_velocity,
            self.args.fling_spring,
        ));
        0.0
    }

    /// Marks the start of a user drag; any running animation stops before
    /// this returns.
    pub fn begin_drag(&mut self) {
        if !self.args.user_scroll_enabled {
            return;
        }
        self.stop_animation();
        self.dragging = true;
    }

    /// Applies a user drag delta and returns the part the host consumed.
    pub fn drag_by(&mut self, delta: f32) -> f32 {
        if !self.args.user_scroll_enabled {
            return 0.0;
        }
        self.stop_animation();
        self.dragging = true;
        self.host.scroll_by(delta)
    }

    /// Stops the running animation, leaving the offset where it is.
    pub fn stop_animation(&mut self) {
        match self.animation {
            ScrollAnimation::Idle => {}
            ScrollAnimation::Ease(ease) => {
                trace!(target_offset = ease.target(), "scroll animation interrupted");
            }
            ScrollAnimation::Fling(fling) => {
                trace!(target_page = fling.target_page(), "fling interrupted");
            }
        }
        self.finish_animation();
    }

    fn finish_animation(&mut self) {
        self.animation = ScrollAnimation::Idle;
        self.clock.reset();
    }

    /// Advances the running animation to `frame_nanos`. Returns whether
    /// another frame is needed.
    pub fn tick(&mut self, frame_nanos: u64) -> bool {
        if self.animation == ScrollAnimation::Idle {
            return false;
        }
        let dt = self.clock.advance(frame_nanos);
        let step = match &mut self.animation {
            ScrollAnimation::Idle => AnimationStep::Finished,
            ScrollAnimation::Ease(ease) => ease.step(dt, &mut self.host),
            ScrollAnimation::Fling(fling) => fling.step(dt, &mut self.host),
        };
        match step {
            AnimationStep::Running => true,
            AnimationStep::Finished => {
                self.finish_animation();
                false
            }
            AnimationStep::Arrived(page) => {
                self.finish_animation();
                if let Err(err) = self.scroll_to_page(page, 0.0) {
                    debug!(%err, "fling destination disappeared before arrival");
                }
                false
            }
        }
    }

    /// Persistable position: a page restored but not yet laid out, else the
    /// current page.
    pub fn snapshot(&self) -> PagerSnapshot {
        PagerSnapshot::new(self.pending_page.unwrap_or_else(|| self.current_page()))
    }

    fn locator(&self, offset: f32) -> PageLocator<'_> {
        PageLocator::new(
            &self.bounds,
            offset,
            self.page_width(),
            self.item_spacing,
            self.args.center_reference,
        )
    }

    fn invalidate(&mut self) {
        self.bounds_version = self.bounds_version.wrapping_add(1);
    }

    fn sync_extent(&mut self) {
        if !self.bounds.is_fully_measured() {
            return;
        }
        let max_offset = (self.bounds.content_right() - self.page_width()).max(0.0);
        if self.host.max_offset() != max_offset {
            self.host.set_max_offset(max_offset);
        }
    }

    fn apply_pending_page(&mut self) {
        let Some(page) = self.pending_page else {
            return;
        };
        if !self.bounds.is_fully_measured() {
            return;
        }
        let page = page.min(self.bounds.len().saturating_sub(1));
        debug!(page, "restoring page after first layout");
        if let Err(err) = self.scroll_to_page(page, 0.0) {
            debug!(%err, "restored page unavailable");
        }
        self.pending_page = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: u64 = 16_666_667;

    fn laid_out(args: PagerArgs, widths: &[f32], spacing: f32, viewport: f32) -> PagerState {
        let mut pager = PagerState::new(args);
        lay_out(&mut pager, widths, spacing, viewport);
        pager
    }

    fn lay_out(pager: &mut PagerState, widths: &[f32], spacing: f32, viewport: f32) {
        pager.measure(widths.len(), viewport);
        let mut left = 0.0;
        for (index, width) in widths.iter().enumerate() {
            pager.report_page_bounds(
                widths.len(),
                index,
                PxRect::new(left, 0.0, *width, 400.0),
                spacing,
            );
            left += width + spacing;
        }
    }

    fn settle(pager: &mut PagerState) -> usize {
        let mut frame_nanos = 0;
        let mut frames = 0;
        while pager.tick(frame_nanos) {
            frame_nanos += FRAME;
            frames += 1;
            assert!(frames < 1000, "animation never settled");
        }
        frames
    }

    #[test]
    fn test_unmeasured_pager_is_on_page_zero() {
        let pager = PagerState::new(PagerArgs::default());
        assert_eq!(pager.page_count(), 0);
        assert_eq!(pager.current_page(), 0);
        assert_eq!(pager.current_page_offset(), 0.0);
        assert!(!pager.is_scroll_in_progress());
    }

    #[test]
    fn test_page_width_falls_back_until_measured() {
        let mut pager = PagerState::new(
            PagerArgs::default()
                .fallback_page_width(Dp(400.0))
                .density(Density::new(2.0)),
        );
        assert_eq!(pager.page_width(), 800.0);
        pager.measure(2, 0.0);
        assert_eq!(pager.page_width(), 800.0);
        pager.measure(2, 720.0);
        assert_eq!(pager.page_width(), 720.0);
    }

    #[test]
    fn test_scroll_to_page_lands_on_page() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 4], 0.0, 300.0);
        for page in 0..4 {
            pager.scroll_to_page(page, 0.0).expect("page in range");
            assert_eq!(pager.current_page(), page);
            assert_eq!(pager.current_page_offset(), 0.0);
        }
    }

    #[test]
    fn test_scroll_to_page_with_offset() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 4], 0.0, 300.0);
        pager.scroll_to_page(1, 0.25).expect("page in range");
        assert_eq!(pager.scroll_offset(), 375.0);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.current_page_offset(), 0.25);
    }

    #[test]
    fn test_scroll_to_missing_page_is_an_error() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 2], 0.0, 300.0);
        assert_eq!(
            pager.scroll_to_page(2, 0.0),
            Err(PagerError::PageOutOfRange {
                page: 2,
                page_count: 2
            })
        );
        assert_eq!(
            pager.animate_scroll_to_page(0, -2.0),
            Err(PagerError::InvalidPageOffset(-2.0))
        );
        assert_eq!(pager.scroll_offset(), 0.0);
    }

    #[test]
    fn test_extent_follows_content() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 4], 0.0, 300.0);
        assert_eq!(pager.host().max_offset(), 900.0);
        pager.scroll_to_page(3, 0.0).expect("page in range");
        lay_out(&mut pager, &[300.0; 2], 0.0, 300.0);
        assert_eq!(pager.host().max_offset(), 300.0);
        assert_eq!(pager.scroll_offset(), 300.0);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_growing_page_count_defers_extent_until_measured() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 4], 0.0, 300.0);
        pager.scroll_to_page(3, 0.0).expect("page in range");
        pager.report_page_bounds(6, 0, PxRect::new(0.0, 0.0, 300.0, 400.0), 0.0);
        assert_eq!(pager.page_count(), 6);
        assert_eq!(pager.bounds().get(5), PageBounds::ZERO);
        assert_eq!(pager.scroll_offset(), 900.0);
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_animate_scroll_to_page() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 4], 0.0, 300.0);
        pager.animate_scroll_to_page(2, 0.0).expect("page in range");
        assert!(pager.is_scroll_in_progress());
        assert!(pager.tick(0));
        assert!(pager.scroll_offset() > 0.0 && pager.scroll_offset() < 600.0);
        settle(&mut pager);
        assert_eq!(pager.scroll_offset(), 600.0);
        assert_eq!(pager.current_page(), 2);
        assert!(!pager.is_scroll_in_progress());
    }

    #[test]
    fn test_fling_forward_from_page_edge() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 4], 0.0, 300.0);
        pager.scroll_to_page(1, 0.0).expect("page in range");
        assert_eq!(pager.on_fling_end(500.0), 0.0);
        settle(&mut pager);
        assert_eq!(pager.scroll_offset(), 600.0);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_slow_release_snaps_back() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 4], 0.0, 300.0);
        pager.scroll_to_page(1, 0.0).expect("page in range");
        pager.begin_drag();
        assert_eq!(pager.drag_by(100.0), 100.0);
        assert!(pager.is_scroll_in_progress());
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.on_fling_end(120.0), 0.0);
        settle(&mut pager);
        assert_eq!(pager.scroll_offset(), 300.0);
    }

    #[test]
    fn test_backward_fling_from_first_page_is_left_to_host() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 2], 0.0, 300.0);
        assert_eq!(pager.on_fling_end(-800.0), -800.0);
        assert!(!pager.tick(0));
        assert_eq!(pager.scroll_offset(), 0.0);
    }

    #[test]
    fn test_fling_to_unmeasured_page_aborts() {
        let mut pager = PagerState::new(PagerArgs::default());
        pager.measure(3, 300.0);
        pager.report_page_bounds(3, 0, PxRect::new(0.0, 0.0, 300.0, 400.0), 0.0);
        assert_eq!(pager.on_fling_end(900.0), 900.0);
        assert!(!pager.is_scroll_in_progress());
        assert_eq!(pager.scroll_offset(), 0.0);
    }

    #[test]
    fn test_non_finite_velocity_is_returned() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 2], 0.0, 300.0);
        assert!(pager.on_fling_end(f32::NAN).is_nan());
        assert!(!pager.is_scroll_in_progress());
    }

    #[test]
    fn test_drag_cancels_fling_synchronously() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 4], 0.0, 300.0);
        pager.scroll_to_page(1, 0.0).expect("page in range");
        pager.on_fling_end(600.0);
        assert!(pager.tick(0));
        pager.begin_drag();
        let held = pager.scroll_offset();
        assert!(!pager.tick(FRAME));
        assert_eq!(pager.scroll_offset(), held);
    }

    #[test]
    fn test_new_request_replaces_running_animation() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 4], 0.0, 300.0);
        pager.animate_scroll_to_page(3, 0.0).expect("page in range");
        pager.tick(0);
        pager.scroll_to_page(1, 0.0).expect("page in range");
        assert!(!pager.is_scroll_in_progress());
        assert!(!pager.tick(FRAME));
        assert_eq!(pager.scroll_offset(), 300.0);
    }

    #[test]
    fn test_user_scroll_disabled_ignores_drags() {
        let mut pager = laid_out(
            PagerArgs::default().user_scroll_enabled(false),
            &[300.0; 3],
            0.0,
            300.0,
        );
        pager.begin_drag();
        assert_eq!(pager.drag_by(120.0), 0.0);
        assert!(!pager.is_scroll_in_progress());
        assert_eq!(pager.scroll_offset(), 0.0);
    }

    #[test]
    fn test_memo_tracks_bounds_changes() {
        let mut pager = laid_out(PagerArgs::default(), &[300.0; 3], 0.0, 300.0);
        pager.scroll_to_page(1, 0.0).expect("page in range");
        assert_eq!(pager.current_page_offset(), 0.0);
        pager.report_page_bounds(3, 1, PxRect::new(200.0, 0.0, 400.0, 400.0), 0.0);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.current_page_offset(), 0.25);
    }

    #[test]
    fn test_restore_waits_for_layout() {
        let mut pager = PagerState::restore(PagerSnapshot::new(2), PagerArgs::default());
        assert_eq!(pager.snapshot(), PagerSnapshot::new(2));
        pager.measure(4, 300.0);
        pager.report_page_bounds(4, 0, PxRect::new(0.0, 0.0, 300.0, 400.0), 0.0);
        assert_eq!(pager.scroll_offset(), 0.0);
        assert_eq!(pager.snapshot(), PagerSnapshot::new(2));
        for index in 1..4 {
            let left = index as f32 * 300.0;
            pager.report_page_bounds(4, index, PxRect::new(left, 0.0, 300.0, 400.0), 0.0);
        }
        assert_eq!(pager.scroll_offset(), 600.0);
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.snapshot(), PagerSnapshot::new(2));
    }

    #[test]
    fn test_restore_clamps_to_last_page() {
        let pager = laid_out(
            PagerArgs::default().initial_page(9),
            &[300.0; 3],
            0.0,
            300.0,
        );
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.snapshot(), PagerSnapshot::new(2));
    }

    #[test]
    fn test_nested_consumer_swallows_horizontal_flings() {
        let pager = PagerState::new(PagerArgs::default());
        let consumer = pager.nested_scroll_consumer();
        assert_eq!(
            consumer.on_post_fling(
                swipe_ui::Velocity::ZERO,
                swipe_ui::Velocity::new(700.0, 50.0)
            ),
            swipe_ui::Velocity::new(700.0, 0.0)
        );
    }

    #[test]
    fn test_pager_can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PagerState>();

        let pager = swipe_ui::State::new(laid_out(PagerArgs::default(), &[300.0; 3], 0.0, 300.0));
        let reader = pager.clone();
        let page = std::thread::spawn(move || reader.with(|pager| pager.current_page()))
            .join()
            .expect("reader thread panicked");
        assert_eq!(page, 0);
    }

    #[test]
    fn test_error_messages() {
        let err = PagerError::PageOutOfRange {
            page: 5,
            page_count: 2,
        };
        assert_eq!(
            err.to_string(),
            "page 5 is out of range for a pager with 2 pages"
        );
    }
}
