//! Physical pixel geometry used by the pager.
//!
//! Layout reports page rectangles in physical pixels relative to the pager's
//! scrollable content, and the nested-scroll protocol hands two-axis offsets
//! and velocities around. All values are `f32` since scroll offsets and fling
//! velocities are continuous quantities.
//!
//! # Key Types
//!
//! - [`PxRect`] - a rectangle in content coordinates (page bounds in parent)
//! - [`PxOffset`] - a two-axis scroll delta
//! - [`Velocity`] - a two-axis velocity in pixels per second
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the scrollable content
//! - X-axis increases to the right, which is also the direction of
//!   increasing scroll offset and increasing page index
//! - Y-axis increases downward

/// A rectangle in physical pixel space.
///
/// ```
/// use swipe_ui::PxRect;
///
/// let rect = PxRect::new(300.0, 0.0, 300.0, 640.0);
/// assert_eq!(rect.left(), 300.0);
/// assert_eq!(rect.right(), 600.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: f32,
    /// The y-coordinate of the top-left corner
    pub y: f32,
    /// The width of the rectangle
    pub width: f32,
    /// The height of the rectangle
    pub height: f32,
}

impl PxRect {
    /// Creates a new rectangle from position and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// A two-axis offset in physical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxOffset {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

impl PxOffset {
    /// The zero offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new offset.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A two-axis velocity in physical pixels per second.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

impl Velocity {
    /// The zero velocity.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new velocity.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
