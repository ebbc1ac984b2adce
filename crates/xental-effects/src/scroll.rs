//! Scroll-driven effects: one-shot reveals, parallax and the progress bar.

use std::time::Duration;

use crate::easing::{power2_out, progress};

/// Reveal fires once the element's top is above this share of the viewport.
pub const TRIGGER_LINE: f32 = 0.85;
/// Reveal animation length.
pub const REVEAL_DURATION: Duration = Duration::from_millis(800);
/// Initial downward offset of a revealing element.
pub const REVEAL_OFFSET: f32 = 100.0;
/// Initial scale of a revealing element.
pub const REVEAL_SCALE: f32 = 0.9;

/// Interpolated style of a revealing element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    /// Offset below the resting position.
    pub offset_y: f32,
    pub scale: f32,
}

impl RevealStyle {
    pub const HIDDEN: RevealStyle = RevealStyle {
        opacity: 0.0,
        offset_y: REVEAL_OFFSET,
        scale: REVEAL_SCALE,
    };
    pub const SHOWN: RevealStyle = RevealStyle {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };
}

/// Element that fades up into place the first time it scrolls into view.
///
/// Plays once and never reverses.
#[derive(Debug, Clone, Default)]
pub struct ScrollReveal {
    delay: Duration,
    triggered_at: Option<Duration>,
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            triggered_at: None,
        }
    }

    /// Check the element's position. `element_top` is measured from the
    /// viewport top in the same units as `viewport_height`.
    ///
    /// Returns true on the call that triggers the reveal.
    pub fn observe(&mut self, element_top: f32, viewport_height: f32, now: Duration) -> bool {
        if self.triggered_at.is_some() || element_top > viewport_height * TRIGGER_LINE {
            return false;
        }
        self.triggered_at = Some(now);
        true
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    pub fn style(&self, now: Duration) -> RevealStyle {
        let Some(start) = self.triggered_at else {
            return RevealStyle::HIDDEN;
        };
        let t = power2_out(progress(now.saturating_sub(start), self.delay, REVEAL_DURATION));
        RevealStyle {
            opacity: t,
            offset_y: REVEAL_OFFSET * (1.0 - t),
            scale: REVEAL_SCALE + (1.0 - REVEAL_SCALE) * t,
        }
    }
}

/// Parallax offset, as a share of the element height.
///
/// Progress runs from 0.0 when the element's top meets the viewport bottom to
/// 1.0 when its bottom meets the viewport top.
pub fn parallax_offset(
    element_top: f32,
    element_height: f32,
    viewport_height: f32,
    speed: f32,
) -> f32 {
    let travel = viewport_height + element_height;
    if travel <= 0.0 {
        return 0.0;
    }
    let t = ((viewport_height - element_top) / travel).clamp(0.0, 1.0);
    -speed * t
}

/// Share of the document scrolled, 0.0-1.0.
pub fn scroll_progress(scroll: f32, content_height: f32, viewport_height: f32) -> f32 {
    let range = content_height - viewport_height;
    if range <= 0.0 {
        return 1.0;
    }
    (scroll / range).clamp(0.0, 1.0)
}

/// Hero (scale, opacity) shrinking over the first half of the page.
pub fn hero_shrink(progress: f32) -> (f32, f32) {
    let t = (progress / 0.5).clamp(0.0, 1.0);
    (1.0 - 0.05 * t, 1.0 - 0.2 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_reveal_triggers_once() {
        let mut reveal = ScrollReveal::new();
        assert!(!reveal.observe(90.0, 100.0, ms(0)));
        assert_eq!(reveal.style(ms(0)), RevealStyle::HIDDEN);

        assert!(reveal.observe(80.0, 100.0, ms(100)));
        assert!(!reveal.observe(10.0, 100.0, ms(200)));
        // scrolled back out: stays revealed
        assert!(!reveal.observe(500.0, 100.0, ms(300)));
        assert_eq!(reveal.style(ms(100 + 800)), RevealStyle::SHOWN);
    }

    #[test]
    fn test_reveal_eases() {
        let mut reveal = ScrollReveal::with_delay(ms(200));
        reveal.observe(0.0, 100.0, ms(0));
        assert_eq!(reveal.style(ms(100)), RevealStyle::HIDDEN);
        let mid = reveal.style(ms(600));
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
        assert!(mid.offset_y > 0.0 && mid.offset_y < REVEAL_OFFSET);
        assert!(mid.scale > REVEAL_SCALE && mid.scale < 1.0);
    }

    #[test]
    fn test_parallax_range() {
        assert_eq!(parallax_offset(100.0, 50.0, 100.0, 0.5), -0.0);
        assert_eq!(parallax_offset(-50.0, 50.0, 100.0, 0.5), -0.5);
        assert!((parallax_offset(25.0, 50.0, 100.0, 0.5) + 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_scroll_progress_and_hero() {
        assert_eq!(scroll_progress(0.0, 300.0, 100.0), 0.0);
        assert_eq!(scroll_progress(100.0, 300.0, 100.0), 0.5);
        assert_eq!(scroll_progress(50.0, 80.0, 100.0), 1.0);
        assert_eq!(hero_shrink(0.0), (1.0, 1.0));
        let (scale, opacity) = hero_shrink(0.9);
        assert!((scale - 0.95).abs() < 1e-6);
        assert!((opacity - 0.8).abs() < 1e-6);
    }
}
