//! Particle field background for the Xental landing.
//!
//! A fixed set of drifting particles, pulled toward the pointer, wrapped at
//! the surface edges and joined by fading lines when close. The field paints
//! through the [`Surface`] trait; [`Raster`] is the terminal implementation.
//! [`Animator`] mounts a field onto a [`Stage`] and owns its listener
//! registrations.

mod animator;
mod field;
mod grid;
mod particle;
mod raster;
mod stage;
mod surface;

pub use animator::Animator;
pub use field::{FieldOptions, LINK_DISTANCE, ParticleField, TRAIL_FADE, link_opacity};
pub use grid::SpatialGrid;
pub use particle::{ATTRACTION_RADIUS, ATTRACTION_STRENGTH, DAMPING, Particle};
pub use raster::Raster;
pub use stage::{Stage, Subscription};
pub use surface::{DrawOp, Recorder, Surface};
