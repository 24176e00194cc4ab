//! Spark renderer lifecycle
//!
//! One renderer per page. `start` sizes the field and seeds the initial
//! bursts the first time it is called and does nothing afterwards; the
//! caller wires the resize listener, spawn timer and frame callback only
//! when `start` reports a fresh start.

use rand::Rng;

use super::config::FxConfig;
use super::field::ParticleField;
use super::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Running,
}

pub struct SparkRenderer<R> {
    state: Lifecycle,
    field: ParticleField<R>,
}

impl<R: Rng> SparkRenderer<R> {
    pub fn new(config: FxConfig, rng: R) -> Self {
        Self {
            state: Lifecycle::Idle,
            field: ParticleField::new(config, rng),
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == Lifecycle::Running
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    /// Start the field at the given viewport size.
    ///
    /// Returns `false` if it was already running.
    pub fn start(&mut self, width: f64, height: f64) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = Lifecycle::Running;

        self.field.resize(width, height);
        for _ in 0..self.field.config().initial_bursts {
            self.field.spawn_burst();
        }

        tracing::debug!(
            width,
            height,
            particles = self.field.len(),
            "Spark field started"
        );
        true
    }

    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    pub fn on_spawn_timer(&mut self) {
        if self.is_running() {
            self.field.on_spawn_timer();
        }
    }

    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.is_running() {
            self.field.frame(surface);
        }
    }

    pub fn tick(&mut self) {
        if self.is_running() {
            self.field.tick();
        }
    }
}
