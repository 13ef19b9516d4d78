//! Session orchestration for the dice duel.
//!
//! This crate wires the pure rules (`game-core`) and the celebration
//! simulation (`game-fx`) into a single-threaded, frame-driven session.
//! Clients call into [`GameSession`] for every user action and supply the
//! frame clock and drawing surface; the session dispatches commands through
//! the engine, performs the animation directives, and emits [`GameEvent`]s
//! describing what the UI must show.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator
//! - [`event`] is the vocabulary clients consume
//! - [`roller`] provides the dice-draw seam (random in production, scripted
//!   in tests)
pub mod error;
pub mod event;
pub mod roller;
pub mod session;

pub use error::{Result, RuntimeError};
pub use event::GameEvent;
pub use roller::{DiceRoller, RandomRoller, ScriptedRoller};
pub use session::{Bounds, GameSession};
