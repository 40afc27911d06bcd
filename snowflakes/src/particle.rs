use serde::{Deserialize, Serialize};

use crate::{accelerate, decelerate};

/// Milliseconds over which a fresh particle fades in.
pub const FADE_IN_MS: f64 = 200.0;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum ShapeType {
    /// A single round point.
    #[default]
    Dot,
    /// Six-armed snowflake glyph.
    Thin,
}

/// One snowflake. Records are recycled by the [`ParticlePool`](crate::ParticlePool), so every
/// field is rewritten on spawn.
#[derive(PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Particle {
    pub position: (f64, f64),
    /// Unit direction of travel.
    pub direction: (f64, f64),
    pub velocity: f64,
    pub alpha: f64,
    pub life_time: f64,
    pub current_time: f64,
    pub scale: f64,
    pub shape: ShapeType,
}

impl Particle {
    pub fn new(
        position: (f64, f64),
        direction: (f64, f64),
        velocity: f64,
        life_time: f64,
        scale: f64,
        shape: ShapeType,
    ) -> Particle {
        Particle {
            position,
            direction,
            velocity,
            alpha: 0.0,
            life_time,
            current_time: 0.0,
            scale,
            shape,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_time < self.life_time
    }

    /// Opacity for the particle's current age.
    pub fn fade(&self) -> f64 {
        if self.current_time < FADE_IN_MS {
            accelerate(self.current_time / FADE_IN_MS)
        } else {
            1.0 - decelerate((self.current_time - FADE_IN_MS) / (self.life_time - FADE_IN_MS))
        }
    }

    /// Advances by `dt` milliseconds.
    pub fn tick(&mut self, dt: f64) {
        self.alpha = self.fade();
        self.position.0 += self.direction.0 * self.velocity * dt / 500.0;
        self.position.1 += self.direction.1 * self.velocity * dt / 500.0;
        self.current_time += dt;
    }
}
