//! Easing curves and a damped spring.

use std::time::Duration;

/// `power2.out`: cubic ease-out.
pub fn power2_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// `power3.out`: quartic ease-out.
pub fn power3_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Sine ease-in-out.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - (t * std::f32::consts::PI).cos() * 0.5
}

/// Fraction of `duration` elapsed since `delay`, clamped to 0.0-1.0.
pub fn progress(elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
    if elapsed <= delay {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    ((elapsed - delay).as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

/// Unit-mass damped spring chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
}

impl Spring {
    /// Longest integration step; larger frame gaps are subdivided.
    const MAX_STEP: f32 = 1.0 / 120.0;

    pub fn new(stiffness: f32, damping: f32, value: f32) -> Self {
        Self {
            stiffness,
            damping,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Advance by `dt` (semi-implicit Euler).
    pub fn tick(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(Self::MAX_STEP);
            let accel = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }

    /// Close enough to the target to stop animating.
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < 1e-3 && self.velocity.abs() < 1e-3
    }
}
