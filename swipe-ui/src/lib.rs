//! swipe-ui holds the framework-level primitives the swipe pager is built on.
//!
//! # Geometry
//!
//! Page bounds arrive from layout as [`PxRect`] values in physical pixels.
//! Configuration is usually written in [`Dp`] and converted with an explicit
//! [`Density`] handed in by the host:
//!
//! ```
//! use swipe_ui::{Density, Dp, PxRect};
//!
//! let density = Density::new(3.0);
//! let spacing = Dp(8.0).to_px(density);
//! let page = PxRect::new(0.0, 0.0, 1080.0, 1920.0);
//! assert_eq!(spacing, 24.0);
//! assert_eq!(page.right(), 1080.0);
//! ```
//!
//! # Frames
//!
//! Animations are explicit state machines advanced once per frame. A
//! [`FrameClock`] converts the host's frame timestamps into deltas.
//!
//! # Shared state
//!
//! [`State`] is a cloneable handle for hosts that touch a pager from more
//! than one event handler or thread.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod dp;
pub mod frame;
pub mod logging;
pub mod px;
pub mod state;

pub use crate::{
    dp::{Density, Dp},
    frame::FrameClock,
    px::{PxOffset, PxRect, Velocity},
    state::State,
};
