//! Spark field tunables

use serde::Deserialize;

use super::particle::{Rgba, Span};

/// Spark field configuration, loaded from the `[fx]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Particles per burst, floored
    pub burst_size: Span,

    /// Initial velocity per axis
    pub velocity: Span,

    /// Initial life in ticks
    pub life: Span,

    /// Radius
    pub size: Span,

    /// Added to `vy` every tick
    pub gravity: f64,

    /// Life at which a particle is fully opaque
    pub fade_ticks: f64,

    /// Live particle cap; timer bursts are skipped at or above it
    pub max_particles: usize,

    /// Bursts spawned when the field starts
    pub initial_bursts: usize,

    /// Timer period between bursts
    pub spawn_interval_ms: u32,

    /// Bursts originate in the top fraction of the surface
    pub spawn_height_fraction: f64,

    pub fill: Rgba,

    pub glow: Rgba,

    pub glow_blur: f64,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            burst_size: Span::new(12.0, 24.0),
            velocity: Span::new(-2.2, 2.2),
            life: Span::new(25.0, 60.0),
            size: Span::new(1.0, 2.6),
            gravity: 0.02,
            fade_ticks: 60.0,
            max_particles: 900,
            initial_bursts: 6,
            spawn_interval_ms: 900,
            spawn_height_fraction: 0.7,
            fill: Rgba::rgb(255, 200, 120),
            glow: Rgba::rgb(120, 80, 255),
            glow_blur: 14.0,
        }
    }
}

impl FxConfig {
    /// Reject values the simulation cannot run with.
    ///
    /// Returns a message naming the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        check_span("velocity", self.velocity)?;
        for (name, span) in [
            ("burst_size", self.burst_size),
            ("life", self.life),
            ("size", self.size),
        ] {
            check_span(name, span)?;
            if span.min < 0.0 {
                return Err(format!("fx.{name} must not be negative, got min = {}", span.min));
            }
        }

        if !self.gravity.is_finite() {
            return Err(format!("fx.gravity must be finite, got {}", self.gravity));
        }
        if !(self.fade_ticks.is_finite() && self.fade_ticks > 0.0) {
            return Err(format!("fx.fade_ticks must be > 0, got {}", self.fade_ticks));
        }
        if !(0.0..=1.0).contains(&self.spawn_height_fraction) {
            return Err(format!(
                "fx.spawn_height_fraction must be within [0, 1], got {}",
                self.spawn_height_fraction
            ));
        }
        if self.spawn_interval_ms == 0 {
            return Err("fx.spawn_interval_ms must be > 0".to_string());
        }
        if !(self.glow_blur.is_finite() && self.glow_blur >= 0.0) {
            return Err(format!("fx.glow_blur must be >= 0, got {}", self.glow_blur));
        }
        for (name, colour) in [("fill", self.fill), ("glow", self.glow)] {
            if !(0.0..=1.0).contains(&colour.a) {
                return Err(format!("fx.{name}.a must be within [0, 1], got {}", colour.a));
            }
        }

        Ok(())
    }
}

fn check_span(name: &str, span: Span) -> Result<(), String> {
    if !(span.min.is_finite() && span.max.is_finite()) {
        return Err(format!("fx.{name} must be finite, got {}..{}", span.min, span.max));
    }
    if span.min > span.max {
        return Err(format!("fx.{name} min {} exceeds max {}", span.min, span.max));
    }
    Ok(())
}
