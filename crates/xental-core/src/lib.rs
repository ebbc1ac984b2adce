//! Core types shared by the Xental landing crates.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};
use std::time::Duration;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A 2D point or vector in surface units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance between two points.
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// Dimensions of a drawing surface in surface units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A surface with no area cannot be drawn on.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether a point lies inside `[0, width) x [0, height)`.
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

/// An RGB color with a separate alpha channel (0.0 - 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Composite this color over an opaque background pixel (source-over).
    pub fn blend_over(self, dst: [f32; 3]) -> [f32; 3] {
        let a = self.a;
        [
            self.r as f32 * a + dst[0] * (1.0 - a),
            self.g as f32 * a + dst[1] * (1.0 - a),
            self.b as f32 * a + dst[2] * (1.0 - a),
        ]
    }

    /// Linear interpolation between two colors, `t` clamped to 0.0-1.0.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Terminal color, ignoring alpha.
    pub fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Brand palette.
pub mod palette {
    use super::Rgba;

    /// Primary accent, used for particles and links.
    pub const TEAL: Rgba = Rgba::rgb(45, 212, 191);
    /// Secondary accent.
    pub const PURPLE: Rgba = Rgba::rgb(139, 92, 246);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const GRAY: Rgba = Rgba::rgb(156, 163, 175);
    /// Error messages.
    pub const RED: Rgba = Rgba::rgb(248, 113, 113);
}

/// Animation speed setting, mapped to a frame interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Time between two display frames.
    pub fn frame_interval(self) -> Duration {
        match self {
            AnimationSpeed::Slow => Duration::from_millis(33),
            AnimationSpeed::Medium => Duration::from_millis(16),
            AnimationSpeed::Fast => Duration::from_millis(8),
        }
    }
}
