//! Pager components for swipe-ui.
//!
//! # Usage
//!
//! The crate has no rendering of its own. A host owns a
//! [`PagerState`](pager::PagerState), reports layout into it and forwards
//! gestures and frame ticks. Hosts that touch the pager from several event
//! handlers share it through [`swipe_ui::State`]:
//!
//! ```
//! use swipe_components::pager::{PagerArgs, PagerState, SnapConvention};
//! use swipe_ui::{PxRect, State};
//!
//! let pager = State::new(PagerState::new(
//!     PagerArgs::default()
//!         .initial_page(1)
//!         .snap_convention(SnapConvention::LeadingEdge),
//! ));
//!
//! let layout = pager.clone();
//! layout.with_mut(|pager| {
//!     pager.measure(2, 320.0);
//!     pager.report_page_bounds(2, 0, PxRect::new(0.0, 0.0, 320.0, 480.0), 0.0);
//!     pager.report_page_bounds(2, 1, PxRect::new(320.0, 0.0, 320.0, 480.0), 0.0);
//! });
//!
//! assert_eq!(pager.with(|pager| pager.current_page()), 1);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod animation;
pub mod pager;
pub mod spring;

pub use crate::{
    pager::{PagerArgs, PagerError, PagerSnapshot, PagerState},
    spring::SpringSpec,
};
