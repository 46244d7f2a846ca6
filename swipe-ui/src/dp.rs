//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type for density-independent lengths and
//! the [`Density`] factor used to turn them into physical pixels.
//!
//! ## Overview
//!
//! Pager configuration (for example the page width used before the first real
//! measurement) is expressed in dp so it stays visually consistent across
//! screens. Conversion to physical pixels always goes through an explicit
//! [`Density`] value handed in by the host; there is no process-wide scale
//! factor.
//!
//! ## Usage
//!
//! ```
//! use swipe_ui::{Density, Dp};
//!
//! let density = Density::new(2.0);
//! let width = Dp(360.0);
//!
//! assert_eq!(width.to_px(density), 720.0);
//! ```

/// Number of physical pixels per dp.
///
/// A density of `1.0` maps one dp to one physical pixel, `2.0` maps one dp to
/// two pixels, and so on. Non-finite or non-positive densities are replaced
/// by `1.0` on construction so conversions never produce NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Density(f32);

impl Density {
    /// Standard density, one physical pixel per dp.
    pub const STANDARD: Self = Self(1.0);

    /// Creates a density, falling back to [`Density::STANDARD`] for values
    /// that are not finite and strictly positive.
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self(scale)
        } else {
            Self::STANDARD
        }
    }

    /// Returns the raw scale factor.
    pub fn scale(self) -> f32 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Density-independent pixels (dp) for UI scaling.
///
/// `Dp` wraps a single `f64` measurement. It is converted to physical pixels
/// with [`Dp::to_px`] whenever the pager needs a pixel quantity.
///
/// ```
/// use swipe_ui::{Density, Dp};
///
/// let base_size = Dp(16.0);
/// let double_size = Dp(base_size.0 * 2.0);
/// assert_eq!(double_size.to_px(Density::new(2.0)), 64.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Converts this dp value to physical pixels with the given density.
    pub fn to_px(self, density: Density) -> f32 {
        (self.0 * f64::from(density.scale())) as f32
    }
}
