//! Spark particle and the small value types it is built from

use rand::Rng;
use serde::Deserialize;

/// Colour with a float alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same colour with its alpha scaled by `alpha`
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: self.a * alpha,
            ..self
        }
    }

    /// CSS `rgba(...)` string
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Half-open range `[min, max)` sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Degenerate or inverted spans always yield `min`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

/// A single decorative spark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Remaining ticks
    pub life: f64,
    /// Radius
    pub size: f64,
    /// Opacity derived from `life`
    pub alpha: f64,
}

impl Particle {
    /// Advance one tick: move, fall, age, fade.
    pub fn step(&mut self, gravity: f64, fade_ticks: f64) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += gravity;

        self.life -= 1.0;
        let alpha = self.life / fade_ticks;
        self.alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}
