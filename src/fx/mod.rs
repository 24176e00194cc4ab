//! Spark field
//!
//! Decorative particle animation overlaid on the schedule page. Independent
//! of the schedule data; started once per page load.
//!
//! - **ParticleField**: live particles, spawning under a hard cap, per-frame update
//! - **SparkRenderer**: start-once lifecycle around a field
//! - **Surface**: where frames are drawn

mod config;
mod field;
mod particle;
mod renderer;
mod surface;

pub use config::FxConfig;
pub use field::ParticleField;
pub use particle::{Particle, Rgba, Span};
pub use renderer::{Lifecycle, SparkRenderer};
pub use surface::{NullSurface, Surface};
