//! The particle field: a fixed set of particles stepped once per frame.

use rand::Rng;
use tracing::debug;
use xental_core::{Rgba, Size, Vec2, palette};

use crate::grid::SpatialGrid;
use crate::particle::Particle;
use crate::surface::Surface;

/// Particles closer than this are joined by a line.
pub const LINK_DISTANCE: f32 = 100.0;
/// Line alpha at zero distance.
pub const LINK_MAX_OPACITY: f32 = 0.1;
/// Alpha of the black wash painted before each frame.
pub const TRAIL_FADE: f32 = 0.05;

/// Tunables for a particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOptions {
    /// Number of particles, fixed for the lifetime of the field.
    pub particle_count: usize,
    /// Above this count, links are found through a spatial grid.
    pub grid_threshold: usize,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            particle_count: 50,
            grid_threshold: 200,
        }
    }
}

/// Alpha of the link between two particles `distance` apart, if any.
pub fn link_opacity(distance: f32) -> Option<f32> {
    (distance < LINK_DISTANCE).then(|| LINK_MAX_OPACITY * (1.0 - distance / LINK_DISTANCE))
}

/// Particle field state.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    /// Drawable extent the particles wrap into.
    size: Size,
    /// Last known pointer position; `None` until the pointer first moves.
    pointer: Option<Vec2>,
    grid_threshold: usize,
    /// Scratch buffer for neighbor indices.
    neighbors: Vec<usize>,
}

impl ParticleField {
    /// Create a field with particles scattered over `size`.
    ///
    /// `size` must not be empty.
    pub fn new<R: Rng + ?Sized>(size: Size, options: FieldOptions, rng: &mut R) -> Self {
        let particles = (0..options.particle_count)
            .map(|_| Particle::random(rng, size))
            .collect();
        debug!(
            count = options.particle_count,
            width = size.width,
            height = size.height,
            "particle field created"
        );
        Self::from_particles(particles, size, options.grid_threshold)
    }

    /// Create a field from explicit particles.
    pub fn from_particles(particles: Vec<Particle>, size: Size, grid_threshold: usize) -> Self {
        Self {
            particles,
            size,
            pointer: None,
            grid_threshold,
            neighbors: Vec::new(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = Some(pointer);
    }

    /// Follow the viewport. Particles keep their positions.
    pub fn resize(&mut self, size: Size) {
        debug!(width = size.width, height = size.height, "particle field resized");
        self.size = size;
    }

    /// Update every particle and paint the frame.
    pub fn step(&mut self, surface: &mut dyn Surface) {
        surface.fade(palette::BLACK.with_alpha(TRAIL_FADE));

        // Particles after `i` have not moved yet this frame, so a grid over
        // the positions at frame start is exact for them.
        let grid = (self.particles.len() > self.grid_threshold).then(|| {
            SpatialGrid::build(self.particles.iter().map(|p| p.position), LINK_DISTANCE)
        });

        let mut neighbors = std::mem::take(&mut self.neighbors);
        for i in 0..self.particles.len() {
            let particle = &mut self.particles[i];
            particle.update(self.pointer, self.size);
            let origin = particle.position;
            surface.fill_circle(
                origin,
                particle.radius,
                palette::TEAL.with_alpha(particle.opacity),
            );

            match &grid {
                Some(grid) => grid.candidates_after(origin, i, &mut neighbors),
                None => {
                    neighbors.clear();
                    neighbors.extend(i + 1..self.particles.len());
                }
            }
            for &j in &neighbors {
                let other = self.particles[j].position;
                if let Some(alpha) = link_opacity(origin.distance(other)) {
                    surface.stroke_line(origin, other, link_color(alpha));
                }
            }
        }
        self.neighbors = neighbors;
    }
}

fn link_color(alpha: f32) -> Rgba {
    palette::TEAL.with_alpha(alpha)
}
