//! Easing curves for programmatic scroll animations.

/// Cubic ease-out mapping.
/// Input: linear progress in [0.0, 1.0].
/// Output: eased progress in [0.0, 1.0], fast at the start and settling
/// gently onto 1.0.
pub(crate) fn ease_out(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
