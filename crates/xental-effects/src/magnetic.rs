//! A button that leans toward the pointer while hovered.

use std::time::Duration;

use xental_core::Vec2;

use crate::easing::Spring;

/// Share of the pointer's offset from center the button follows.
const PULL: f32 = 0.1;
const STIFFNESS: f32 = 150.0;
const DAMPING: f32 = 15.0;
const HOVER_SCALE: f32 = 1.05;
const PRESS_SCALE: f32 = 0.95;

/// Axis-aligned bounds in surface units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.x < self.origin.x + self.width
            && p.y >= self.origin.y
            && p.y < self.origin.y + self.height
    }
}

/// Magnetic button state.
#[derive(Debug, Clone)]
pub struct MagneticButton {
    bounds: Bounds,
    disabled: bool,
    hovered: bool,
    pressed: bool,
    x: Spring,
    y: Spring,
}

impl MagneticButton {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            disabled: false,
            hovered: false,
            pressed: false,
            x: Spring::new(STIFFNESS, DAMPING, 0.0),
            y: Spring::new(STIFFNESS, DAMPING, 0.0),
        }
    }

    /// Layout moved the button.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.release();
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Feed a pointer position. Leaving the bounds releases the button.
    pub fn pointer_moved(&mut self, pointer: Vec2) {
        if !self.bounds.contains(pointer) {
            self.release();
            return;
        }
        if self.disabled {
            return;
        }
        self.hovered = true;
        let pull = (pointer - self.bounds.center()) * PULL;
        self.x.target = pull.x;
        self.y.target = pull.y;
    }

    /// Pointer left: spring back to rest.
    pub fn release(&mut self) {
        self.hovered = false;
        self.pressed = false;
        self.x.target = 0.0;
        self.y.target = 0.0;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed && !self.disabled;
    }

    pub fn tick(&mut self, dt: Duration) {
        self.x.tick(dt);
        self.y.tick(dt);
    }

    /// Current displacement of the button.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.value, self.y.value)
    }

    /// Displacement of the gradient layer, which travels twice as far.
    pub fn backdrop_offset(&self) -> Vec2 {
        self.offset() * 2.0
    }

    pub fn scale(&self) -> f32 {
        if self.disabled {
            1.0
        } else if self.pressed {
            PRESS_SCALE
        } else if self.hovered {
            HOVER_SCALE
        } else {
            1.0
        }
    }
}
