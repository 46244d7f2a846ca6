//! Damped spring used for fling settling.
//!
//! The spring follows `a = -k (x - target) - c v` with
//! `c = 2 ζ sqrt(k)`. Integration is semi-implicit Euler, subdivided into
//! steps of at most [`MAX_STEP_SECS`] so low frame rates stay stable.

/// Stiffness of a soft, slow spring.
pub const STIFFNESS_LOW: f32 = 200.0;
/// Damping ratio that settles without oscillating (critically damped).
pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

/// Maximum integration step in seconds.
const MAX_STEP_SECS: f32 = 0.004;
/// Frame deltas above this are treated as a hitch and capped.
const MAX_FRAME_SECS: f32 = 0.1;
/// Distance to the target, in pixels, below which the spring may rest.
const REST_THRESHOLD: f32 = 0.1;
/// Speed, in pixels per second, below which the spring may rest.
const VELOCITY_THRESHOLD: f32 = 1.0;

/// Stiffness and damping of a spring animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Restoring force per pixel of displacement.
    pub stiffness: f32,
    /// `1.0` is critically damped, below that the spring bounces.
    pub damping_ratio: f32,
}

impl SpringSpec {
    /// Creates a spring spec.
    pub const fn new(stiffness: f32, damping_ratio: f32) -> Self {
        Self {
            stiffness,
            damping_ratio,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(STIFFNESS_LOW, DAMPING_RATIO_NO_BOUNCY)
    }
}

#[derive(Clone, PartialEq, Copy, Debug)]
pub(crate) struct Spring1D {
    pub(crate) value: f32,
    pub(crate) velocity: f32,
    pub(crate) target: f32,
}

impl Spring1D {
    pub(crate) fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub(crate) fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub(crate) fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub(crate) fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub(crate) fn update(&mut self, dt: f32, spec: SpringSpec) {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECS);
        let stiffness = spec.stiffness.max(0.0);
        if stiffness == 0.0 {
            self.snap_to(self.target);
            return;
        }

        let damping = 2.0 * spec.damping_ratio.max(0.0) * stiffness.sqrt();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            let displacement = self.value - self.target;
            let acceleration = -stiffness * displacement - damping * self.velocity;
            self.velocity += acceleration * step;
            self.value += self.velocity * step;
            remaining -= step;
        }

        if (self.value - self.target).abs() < REST_THRESHOLD
            && self.velocity.abs() < VELOCITY_THRESHOLD
        {
            self.snap_to(self.target);
        }
    }

    pub(crate) fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }
}
