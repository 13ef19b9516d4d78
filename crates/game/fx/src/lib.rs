//! Win-celebration particle simulation.
//!
//! A small frame-stepped effect: a batch of colored particles drifts and
//! fades until every one has expired. The crate is deliberately free of any
//! scheduling or drawing backend - callers supply a [`Surface`] to draw on
//! and decide when a frame elapses, so the same simulation runs under a
//! terminal canvas, a test recorder, or any other renderer.
pub mod animator;
pub mod color;
pub mod particle;

pub use animator::{Animator, Surface, PARTICLE_COUNT};
pub use color::Hsl;
pub use particle::{Particle, Vec2};
