use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaCha8Rng,
};
use serde::{Deserialize, Serialize};

use crate::{
    draw_particle, next_float, next_int, Canvas, Color, Host, Paint, Paints, Particle,
    ParticlePool, ShapeType,
};

/// Longest step, in milliseconds, a single frame may integrate.
pub const MAX_FRAME_DT: u64 = 17;
/// Chance of a spawn on any frame is `1 - SPAWN_THRESHOLD`.
pub const SPAWN_THRESHOLD: f64 = 0.7;
/// Density-independent margin kept free of spawns at the bottom of the surface.
pub const BOTTOM_MARGIN: f64 = 20.0;

/// Visual parameters, fixed for the lifetime of a [`SnowEffect`].
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowConfig {
    /// Color of [`ShapeType::Dot`] particles.
    pub color: Color,
    /// Color of [`ShapeType::Thin`] particles.
    pub thin_color: Color,
    #[serde(default = "SnowConfig::default_stroke")]
    pub stroke: f64,
    #[serde(default = "SnowConfig::default_thin_stroke")]
    pub thin_stroke: f64,
    /// Pixels reserved at the top of the surface, e.g. for a status bar.
    pub inset_top: f64,
    /// Device pixels per density-independent unit.
    pub density: f64,
}

impl SnowConfig {
    pub const DEFAULT_STROKE: f64 = 1.5;
    pub const DEFAULT_THIN_STROKE: f64 = 0.5;

    /// Configuration with the default stroke widths.
    pub fn new(color: Color, thin_color: Color, inset_top: f64, density: f64) -> SnowConfig {
        SnowConfig {
            color,
            thin_color,
            stroke: Self::DEFAULT_STROKE,
            thin_stroke: Self::DEFAULT_THIN_STROKE,
            inset_top,
            density,
        }
    }

    pub fn with_strokes(self, stroke: f64, thin_stroke: f64) -> SnowConfig {
        SnowConfig {
            stroke,
            thin_stroke,
            ..self
        }
    }

    fn default_stroke() -> f64 {
        Self::DEFAULT_STROKE
    }

    fn default_thin_stroke() -> f64 {
        Self::DEFAULT_THIN_STROKE
    }
}

/// The falling snow simulation.
///
/// Call [`SnowEffect::step`] once per frame; the effect draws, maybe spawns a flake, integrates
/// and then asks the [`Host`] for another frame.
pub struct SnowEffect<R: RngCore = ChaCha8Rng> {
    config: SnowConfig,
    paints: Paints,
    pool: ParticlePool,
    rng: R,
    last_frame: u64,
}

impl SnowEffect<ChaCha8Rng> {
    /// Instantiates the effect with a seeded [`ChaCha8Rng`].
    pub fn new(config: SnowConfig, seed: u64) -> SnowEffect<ChaCha8Rng> {
        SnowEffect::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> SnowEffect<R> {
    pub fn with_rng(config: SnowConfig, rng: R) -> SnowEffect<R> {
        let paints = Paints {
            particle: Paint::stroke(config.color, config.stroke),
            thin: Paint::stroke(config.thin_color, config.thin_stroke),
        };

        SnowEffect {
            config,
            paints,
            pool: ParticlePool::default(),
            rng,
            last_frame: 0,
        }
    }

    pub fn config(&self) -> &SnowConfig {
        &self.config
    }

    pub fn paints(&self) -> &Paints {
        &self.paints
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Live particles in draw order.
    pub fn particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.pool.iter_live()
    }

    /// Renders one frame onto `canvas` and advances the simulation.
    ///
    /// Does nothing when either the host or the canvas is missing. `width` and `height` are the
    /// surface's measured size in pixels.
    pub fn step<H, C>(
        &mut self,
        host: Option<&mut H>,
        canvas: Option<&mut C>,
        width: f64,
        height: f64,
    ) -> Result<(), C::Error>
    where
        H: Host + ?Sized,
        C: Canvas + ?Sized,
    {
        let (Some(host), Some(canvas)) = (host, canvas) else {
            return Ok(());
        };

        for particle in self.pool.iter_live().filter(|particle| particle.is_alive()) {
            draw_particle(canvas, particle, &mut self.paints, self.config.density)?;
        }

        if next_float(&mut self.rng) > SPAWN_THRESHOLD && !self.pool.is_full() {
            self.spawn(width, height);
        }

        let now = host.now();
        let dt = now.saturating_sub(self.last_frame).min(MAX_FRAME_DT);
        self.update(dt as f64);
        self.last_frame = now;

        host.invalidate();

        Ok(())
    }

    fn spawn(&mut self, width: f64, height: f64) {
        let inset = self.config.inset_top;
        let x = next_float(&mut self.rng) * width;
        let y = inset
            + next_float(&mut self.rng)
                * (height - BOTTOM_MARGIN * self.config.density - inset);

        let angle = (90 - 20 + next_int(&mut self.rng, 40) as i32) as f64;
        let (sin, cos) = angle.to_radians().sin_cos();

        let scale = next_float(&mut self.rng) * 1.2;
        let shape = match next_int(&mut self.rng, 2) {
            0 => ShapeType::Dot,
            _ => ShapeType::Thin,
        };
        let life_time = (2000 + next_int(&mut self.rng, 100)) as f64;
        let velocity = 20.0 + next_float(&mut self.rng) * 4.0;

        self.pool.spawn(Particle::new(
            (x, y),
            (cos, sin),
            velocity,
            life_time,
            scale,
            shape,
        ));
    }

    fn update(&mut self, dt: f64) {
        self.pool.update(|particle| particle.tick(dt));
    }
}
