//! Particle field simulation
//!
//! Owns the live particle set and the surface dimensions. Spawning, stepping
//! and drawing are driven from outside (timer, resize listener, frame
//! callback); the field itself never schedules anything.

use rand::Rng;

use super::config::FxConfig;
use super::particle::Particle;
use super::surface::{NullSurface, Surface};

pub struct ParticleField<R> {
    config: FxConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(config: FxConfig, rng: R) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Track the viewport size. Non-finite or negative sizes count as zero.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = extent(width);
        self.height = extent(height);
    }

    /// Spawn one burst at a random point; returns how many particles it added.
    ///
    /// A burst is truncated so the live count never passes `max_particles`.
    pub fn spawn_burst(&mut self) -> usize {
        let x = self.rng.random_range(0.0..=self.width);
        let y = self
            .rng
            .random_range(0.0..=extent(self.height * self.config.spawn_height_fraction));

        let wanted = self.config.burst_size.sample(&mut self.rng).floor().max(0.0) as usize;
        let room = self.config.max_particles.saturating_sub(self.particles.len());
        let count = wanted.min(room);

        for _ in 0..count {
            let particle = Particle {
                x,
                y,
                vx: self.config.velocity.sample(&mut self.rng),
                vy: self.config.velocity.sample(&mut self.rng),
                life: self.config.life.sample(&mut self.rng),
                size: self.config.size.sample(&mut self.rng),
                alpha: 1.0,
            };
            self.particles.push(particle);
        }

        count
    }

    /// The spawn timer fired. Spawns a burst only while under the cap.
    pub fn on_spawn_timer(&mut self) -> bool {
        if self.particles.len() >= self.config.max_particles {
            tracing::trace!(live = self.particles.len(), "Spark cap reached, skipping burst");
            return false;
        }
        self.spawn_burst();
        true
    }

    /// Step and draw every particle once, dropping the dead ones.
    ///
    /// Iterates backwards so `swap_remove` only moves already-visited
    /// particles into the freed slot.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);

        let gravity = self.config.gravity;
        let fade_ticks = self.config.fade_ticks;

        for i in (0..self.particles.len()).rev() {
            let p = &mut self.particles[i];
            p.step(gravity, fade_ticks);

            surface.fill_circle(
                p.x,
                p.y,
                p.size,
                self.config.fill.with_alpha(p.alpha),
                self.config.glow.with_alpha(p.alpha),
                self.config.glow_blur,
            );

            if !p.is_alive() {
                self.particles.swap_remove(i);
            }
        }
    }

    /// Step without drawing
    pub fn tick(&mut self) {
        self.frame(&mut NullSurface);
    }
}

fn extent(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::particle::Rgba;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(seed: u64) -> ParticleField<StdRng> {
        let mut field = ParticleField::new(FxConfig::default(), StdRng::seed_from_u64(seed));
        field.resize(1280.0, 720.0);
        field
    }

    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        circles: Vec<(f64, Rgba, Rgba)>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, _x: f64, _y: f64, _r: f64, fill: Rgba, glow: Rgba, _blur: f64) {
            self.circles.push((fill.a, fill, glow));
        }
    }

    #[test]
    fn test_burst_shape() {
        let mut field = field(1);

        for _ in 0..50 {
            let before = field.len();
            let added = field.spawn_burst();
            assert!((12..24).contains(&added), "burst of {added}");

            let burst = &field.particles()[before..];
            let (x, y) = (burst[0].x, burst[0].y);
            assert!((0.0..=1280.0).contains(&x));
            assert!((0.0..=720.0 * 0.7).contains(&y));

            for p in burst {
                assert_eq!((p.x, p.y), (x, y));
                assert!((-2.2..2.2).contains(&p.vx));
                assert!((-2.2..2.2).contains(&p.vy));
                assert!((25.0..60.0).contains(&p.life));
                assert!((1.0..2.6).contains(&p.size));
                assert_eq!(p.alpha, 1.0);
            }
        }
    }

    #[test]
    fn test_cap_never_exceeded() {
        let mut field = field(2);

        for round in 0..2000 {
            field.on_spawn_timer();
            if round % 3 == 0 {
                field.tick();
            }
            assert!(field.len() <= 900, "round {round}: {} live", field.len());
        }

        while field.on_spawn_timer() {}
        assert_eq!(field.len(), 900);
    }

    #[test]
    fn test_frame_ages_fades_and_removes() {
        let mut field = field(3);
        field.spawn_burst();
        field.spawn_burst();

        // Tag each particle through its size so it can be followed across
        // swap_remove reordering
        for (i, p) in field.particles.iter_mut().enumerate() {
            p.size = i as f64;
        }

        for _ in 0..70 {
            let before: Vec<Particle> = field.particles().to_vec();
            field.tick();

            for p in field.particles() {
                assert!(p.is_alive());
                assert!((0.0..=1.0).contains(&p.alpha));

                let prev = before.iter().find(|b| b.size == p.size).unwrap();
                assert_eq!(p.life, prev.life - 1.0, "particle {}", p.size);
                assert_eq!(p.alpha, (p.life / 60.0).clamp(0.0, 1.0));
            }

            // Exactly the particles whose life ran out are gone
            let expired = before.iter().filter(|b| b.life - 1.0 <= 0.0).count();
            assert_eq!(field.len(), before.len() - expired);
        }

        // Maximum life is 60 ticks
        assert!(field.is_empty());
    }

    #[test]
    fn test_frame_draws_every_particle_with_modulated_colours() {
        let mut field = field(4);
        let count = field.spawn_burst();
        let mut surface = RecordingSurface::default();

        field.frame(&mut surface);

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles.len(), count);
        for (alpha, fill, glow) in &surface.circles {
            assert!((0.0..=1.0).contains(alpha));
            assert_eq!((fill.r, fill.g, fill.b), (255, 200, 120));
            assert_eq!((glow.r, glow.g, glow.b), (120, 80, 255));
            assert_eq!(glow.a, *alpha);
        }
    }

    #[test]
    fn test_unusable_viewport_and_fraction_do_not_panic() {
        let config = FxConfig {
            spawn_height_fraction: -0.5,
            ..FxConfig::default()
        };
        let mut field = ParticleField::new(config, StdRng::seed_from_u64(6));
        field.resize(f64::INFINITY, f64::NAN);
        assert_eq!(field.size(), (0.0, 0.0));

        field.resize(800.0, 600.0);
        assert!(field.spawn_burst() >= 12);
        assert!(field.particles().iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn test_zero_sized_surface_still_spawns() {
        let mut field = ParticleField::new(FxConfig::default(), StdRng::seed_from_u64(5));
        assert!(field.spawn_burst() >= 12);
        assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }
}
