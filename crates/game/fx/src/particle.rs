//! A single decaying, drifting particle.

use rand::Rng;

use crate::color::Hsl;

/// Real-valued 2D point or vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One celebration particle.
///
/// Velocity, radius, color, and decay rate are drawn once at spawn and never
/// change; alpha only ever decreases. A particle is live while its alpha is
/// above zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    pub position: Vec2,
    velocity: Vec2,
    pub radius: f32,
    pub color: Hsl,
    pub alpha: f32,
    decay: f32,
}

impl Particle {
    /// Spawns a particle at `position` with randomized motion and fade.
    ///
    /// Draws: radius in `[2, 5)`, velocity components in `[-2, 2)`, decay in
    /// `[0.01, 0.03)`, and a vivid random hue. Alpha starts at 1.
    pub fn spawn(position: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            position,
            velocity: Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)),
            radius: rng.gen_range(2.0..5.0),
            color: Hsl::random_vivid(rng),
            alpha: 1.0,
            decay: rng.gen_range(0.01..0.03),
        }
    }

    /// Advances one frame: unit Euler step, then fade.
    ///
    /// The fade rule is deliberate: decrement first, then snap to zero when
    /// the decremented alpha is at or below one more decay step. The
    /// particle vanishes one step early instead of ever going negative.
    pub fn step(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.alpha -= self.decay;
        if self.alpha <= self.decay {
            self.alpha = 0.0;
        }
    }

    pub fn is_live(&self) -> bool {
        self.alpha > 0.0
    }

    #[cfg(test)]
    pub(crate) fn with_fade(alpha: f32, decay: f32) -> Self {
        Self {
            position: Vec2::default(),
            velocity: Vec2::default(),
            radius: 2.0,
            color: Hsl::new(0.0, 1.0, 0.5),
            alpha,
            decay,
        }
    }
}
