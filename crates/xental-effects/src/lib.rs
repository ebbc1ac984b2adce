//! Leaf UI effects for the Xental landing.
//!
//! Every effect here is independent of the others and of the particle field:
//! a small state value driven by elapsed time, pointer position or scroll
//! position, read back as plain numbers for the renderer.

pub mod banner;
pub mod easing;
pub mod magnetic;
pub mod reveal;
pub mod scroll;
pub mod splash;

pub use banner::{BANNER_HEIGHT, build_banner};
pub use magnetic::{Bounds, MagneticButton};
pub use reveal::{RevealKind, Segment, TextReveal};
pub use scroll::{RevealStyle, ScrollReveal};
pub use splash::{LoadingSplash, SplashFrame};
