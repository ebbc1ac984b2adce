//! Loading splash shown before the landing appears.

use std::time::Duration;

use crate::easing::{Spring, progress};

/// Default time the splash stays fully opaque.
pub const SPLASH_DURATION: Duration = Duration::from_millis(1500);
/// Fade-out after the splash duration.
pub const SPLASH_FADE: Duration = Duration::from_millis(500);

const INNER_RING_PERIOD: f32 = 2.0;
const OUTER_RING_PERIOD: f32 = 3.0;
const DOT_PERIOD: f32 = 1.0;
const DOT_DELAY: f32 = 0.2;
const LABEL_DELAY: Duration = Duration::from_millis(500);
const LABEL_FADE: Duration = Duration::from_millis(300);

/// Presentation of the splash at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashFrame {
    /// Whole-screen opacity; 0.0 once gone.
    pub opacity: f32,
    /// Logo scale, springing from 0 to 1.
    pub logo_scale: f32,
    /// Logo rotation in degrees, -180 settling to 0.
    pub logo_rotation: f32,
    /// Inner ring angle in degrees (clockwise).
    pub inner_ring: f32,
    /// Outer ring angle in degrees (counter-clockwise).
    pub outer_ring: f32,
    /// "LOADING" label opacity.
    pub label_opacity: f32,
    /// Pulse of the three loading dots, each 0.0-1.0.
    pub dots: [f32; 3],
}

/// Timed loading splash.
#[derive(Debug, Clone)]
pub struct LoadingSplash {
    duration: Duration,
    skipped_at: Option<Duration>,
}

impl Default for LoadingSplash {
    fn default() -> Self {
        Self::new(SPLASH_DURATION)
    }
}

impl LoadingSplash {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            skipped_at: None,
        }
    }

    /// Start fading out at `now` instead of waiting for the timer.
    pub fn skip(&mut self, now: Duration) {
        if now < self.duration {
            self.skipped_at.get_or_insert(now);
        }
    }

    fn fade_start(&self) -> Duration {
        self.skipped_at.unwrap_or(self.duration)
    }

    /// Whether the splash still covers the screen at `now`.
    pub fn is_visible(&self, now: Duration) -> bool {
        now < self.fade_start() + SPLASH_FADE
    }

    /// Time at which the landing should begin its own entrance.
    pub fn finished_at(&self) -> Duration {
        self.fade_start() + SPLASH_FADE
    }

    pub fn frame(&self, now: Duration) -> SplashFrame {
        let secs = now.as_secs_f32();
        let opacity = 1.0 - progress(now, self.fade_start(), SPLASH_FADE);

        let mut spring = Spring::new(260.0, 20.0, 0.0);
        spring.target = 1.0;
        spring.tick(now.min(Duration::from_secs(1)));
        // The spring settles within the first second.
        let logo_scale = if now >= Duration::from_secs(1) { 1.0 } else { spring.value };

        let dots = [0, 1, 2].map(|i| {
            let t = secs - i as f32 * DOT_DELAY;
            if t < 0.0 {
                0.0
            } else {
                let phase = (t / DOT_PERIOD).fract();
                // up and back down once per period
                1.0 - (phase * 2.0 - 1.0).abs()
            }
        });

        SplashFrame {
            opacity,
            logo_scale,
            logo_rotation: -180.0 * (1.0 - logo_scale),
            inner_ring: (secs / INNER_RING_PERIOD).fract() * 360.0,
            outer_ring: -(secs / OUTER_RING_PERIOD).fract() * 360.0,
            label_opacity: progress(now, LABEL_DELAY, LABEL_FADE),
            dots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_visibility_timeline() {
        let splash = LoadingSplash::default();
        assert!(splash.is_visible(ms(0)));
        assert_eq!(splash.frame(ms(1000)).opacity, 1.0);
        assert!((splash.frame(ms(1750)).opacity - 0.5).abs() < 1e-3);
        assert!(!splash.is_visible(ms(2000)));
        assert_eq!(splash.frame(ms(2500)).opacity, 0.0);
    }

    #[test]
    fn test_skip_starts_fade_early() {
        let mut splash = LoadingSplash::default();
        splash.skip(ms(300));
        splash.skip(ms(600));
        assert_eq!(splash.finished_at(), ms(800));
        assert!(!splash.is_visible(ms(800)));
    }

    #[test]
    fn test_logo_springs_in() {
        let splash = LoadingSplash::default();
        let start = splash.frame(ms(0));
        assert_eq!(start.logo_scale, 0.0);
        assert_eq!(start.logo_rotation, -180.0);
        let settled = splash.frame(ms(1200));
        assert_eq!(settled.logo_scale, 1.0);
        assert_eq!(settled.logo_rotation, 0.0);
    }

    #[test]
    fn test_rings_and_dots() {
        let splash = LoadingSplash::default();
        let frame = splash.frame(ms(500));
        assert!((frame.inner_ring - 90.0).abs() < 1e-3);
        assert!((frame.outer_ring + 60.0).abs() < 1e-3);
        assert_eq!(frame.label_opacity, 0.0);
        // first dot at its peak, the others lag behind
        assert!((frame.dots[0] - 1.0).abs() < 1e-5);
        assert!(frame.dots[1] < frame.dots[0]);
        assert!(splash.frame(ms(100)).dots[2] == 0.0);
    }
}
