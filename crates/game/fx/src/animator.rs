//! Frame-stepped animator for the celebration particle field.
//!
//! The animator is a state machine (`Idle` → `Running` → `Idle`) advanced by
//! whoever owns the frame clock. One call to [`Animator::advance`] is one
//! full frame: clear, step, draw, drop expired. Scheduling and cancellation
//! policy live with the caller; the animator only reports whether it still
//! needs frames.

use rand::Rng;

use crate::particle::{Particle, Vec2};

/// Size of the batch spawned when a celebration starts.
pub const PARTICLE_COUNT: usize = 100;

/// Drawing collaborator the animator renders through.
///
/// A frame is a full-surface repaint: `clear` runs before any circle is
/// drawn. Implementations range from a terminal canvas to a test recorder.
pub trait Surface {
    /// Discards the previous frame's contents.
    fn clear(&mut self);

    /// Draws a filled circle composited at `alpha` (in `(0, 1]`).
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: crate::Hsl, alpha: f32);
}

/// Celebration animator: owns the live particle set.
///
/// `Idle` when no particles exist; `Running` while any particle is live.
/// Returns to `Idle` either by natural exhaustion (every particle faded
/// out) or by [`Animator::cancel`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animator {
    particles: Vec<Particle>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    /// Starts a celebration over a `width` x `height` surface.
    ///
    /// Spawns a fresh batch of `count` particles uniformly positioned in
    /// `[0, width) x [0, height)`. Restarting while running replaces the
    /// batch.
    pub fn start(&mut self, width: f32, height: f32, count: usize, rng: &mut impl Rng) {
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let position = Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
            self.particles.push(Particle::spawn(position, rng));
        }
    }

    /// Advances and renders one frame.
    ///
    /// Clears the surface, steps every particle, draws the ones still live,
    /// then drops expired particles. Returns `true` while further frames are
    /// needed; on `false` the animator has returned to `Idle`. Calling this
    /// while `Idle` is a no-op that leaves the surface untouched.
    pub fn advance(&mut self, surface: &mut impl Surface) -> bool {
        if self.particles.is_empty() {
            return false;
        }

        surface.clear();
        for particle in &mut self.particles {
            particle.step();
            if particle.is_live() {
                surface.fill_circle(
                    particle.position,
                    particle.radius,
                    particle.color,
                    particle.alpha,
                );
            }
        }
        self.particles.retain(Particle::is_live);

        !self.particles.is_empty()
    }

    /// Cancels the celebration immediately, discarding all particles.
    ///
    /// Idempotent when already `Idle`.
    pub fn cancel(&mut self) {
        self.particles.clear();
    }
}
