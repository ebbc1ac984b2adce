//! A single drifting point of the particle field.

use rand::Rng;
use xental_core::{Size, Vec2};

/// Distance under which the pointer pulls a particle.
pub const ATTRACTION_RADIUS: f32 = 150.0;
/// Scale applied to the attraction force.
pub const ATTRACTION_STRENGTH: f32 = 0.02;
/// Per-axis velocity multiplier applied every frame.
pub const DAMPING: f32 = 0.99;

/// State for a single particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position in surface units.
    pub position: Vec2,
    /// Displacement applied per frame.
    pub velocity: Vec2,
    /// Drawn radius, fixed at creation.
    pub radius: f32,
    /// Fill alpha, fixed at creation.
    pub opacity: f32,
}

impl Particle {
    /// Spawn a particle somewhere on a surface of the given size.
    ///
    /// `size` must not be empty.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, size: Size) -> Self {
        Self {
            position: Vec2::new(rng.gen_range(0.0..size.width), rng.gen_range(0.0..size.height)),
            velocity: Vec2::new(rng.gen_range(-0.25..0.25), rng.gen_range(-0.25..0.25)),
            radius: rng.gen_range(1.0..3.0),
            opacity: rng.gen_range(0.2..0.7),
        }
    }

    /// Velocity impulse the pointer applies to a particle at `position`.
    ///
    /// Zero outside the attraction radius and when the pointer sits exactly
    /// on the particle.
    pub fn attraction(position: Vec2, pointer: Vec2) -> Vec2 {
        let delta = pointer - position;
        let distance = delta.length();
        if distance >= ATTRACTION_RADIUS || distance == 0.0 {
            return Vec2::ZERO;
        }
        let force = (ATTRACTION_RADIUS - distance) / ATTRACTION_RADIUS;
        delta * (force * ATTRACTION_STRENGTH / distance)
    }

    /// Advance one frame: attract, integrate, damp, wrap.
    pub fn update(&mut self, pointer: Option<Vec2>, bounds: Size) {
        if let Some(pointer) = pointer {
            self.velocity += Self::attraction(self.position, pointer);
        }
        self.position += self.velocity;
        self.velocity *= DAMPING;
        self.position.x = wrap(self.position.x, bounds.width);
        self.position.y = wrap(self.position.y, bounds.height);
    }

    /// Current speed.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Wrap a coordinate onto `[0, extent)`, re-entering from the opposite edge.
fn wrap(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 || (0.0..extent).contains(&value) {
        return value;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn still(x: f32, y: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            radius: 2.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn test_random_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let size = Size::new(800.0, 600.0);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, size);
            assert!(size.contains(p.position));
            assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
            assert!((1.0..3.0).contains(&p.radius));
            assert!((0.2..0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn test_attraction_direction_and_magnitude() {
        // pointer 30 right, 40 down: distance 50
        let impulse = Particle::attraction(Vec2::new(100.0, 100.0), Vec2::new(130.0, 140.0));
        let expected = (150.0 - 50.0) / 150.0 * 0.02;
        assert!((impulse.length() - expected).abs() < 1e-6);
        assert!((impulse.x - 0.6 * expected).abs() < 1e-6);
        assert!((impulse.y - 0.8 * expected).abs() < 1e-6);
    }

    #[test]
    fn test_attraction_cutoffs() {
        let p = Vec2::new(10.0, 10.0);
        assert_eq!(Particle::attraction(p, p), Vec2::ZERO);
        assert_eq!(Particle::attraction(p, Vec2::new(160.0, 10.0)), Vec2::ZERO);
        assert_ne!(Particle::attraction(p, Vec2::new(159.0, 10.0)), Vec2::ZERO);
    }

    #[test]
    fn test_update_integrates_then_damps() {
        let mut p = still(50.0, 50.0);
        p.velocity = Vec2::new(1.0, -2.0);
        p.update(None, Size::new(100.0, 100.0));
        assert_eq!(p.position, Vec2::new(51.0, 48.0));
        assert!((p.velocity.x - 0.99).abs() < 1e-6);
        assert!((p.velocity.y + 1.98).abs() < 1e-6);
    }

    #[test]
    fn test_update_wraps_edges() {
        let bounds = Size::new(100.0, 50.0);

        let mut left = still(0.2, 10.0);
        left.velocity = Vec2::new(-0.5, 0.0);
        left.update(None, bounds);
        assert!((left.position.x - 99.7).abs() < 1e-4);

        let mut bottom = still(10.0, 49.9);
        bottom.velocity = Vec2::new(0.0, 0.3);
        bottom.update(None, bounds);
        assert!((bottom.position.y - 0.2).abs() < 1e-4);

        let mut exact = still(99.5, 10.0);
        exact.velocity = Vec2::new(0.5, 0.0);
        exact.update(None, bounds);
        assert_eq!(exact.position.x, 0.0);
    }

    #[test]
    fn test_wrap_never_reaches_extent() {
        assert_eq!(wrap(-1e-9, 100.0), 0.0);
        assert!(wrap(-0.001, 100.0) < 100.0);
        assert_eq!(wrap(250.0, 100.0), 50.0);
    }
}
