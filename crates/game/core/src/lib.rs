//! Deterministic dice-duel rules shared across clients.
//!
//! `game-core` defines the canonical rules (dice, scoring, commands, engine)
//! and exposes pure APIs reused by the runtime and offline tools. Dice rolls
//! are inputs, never drawn here, so every state transition is replayable.
//! All state mutation flows through [`engine::GameEngine`], and supporting
//! crates depend on the types re-exported here.
pub mod command;
pub mod config;
pub mod dice;
pub mod engine;
pub mod score;
pub mod state;

pub use command::{
    Command, CommandTransition, Directive, DismissResultCommand, PlayRoundCommand, PlayRoundError,
    ResetGameCommand, ToggleHelpCommand,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, PhaseError, TransitionPhase};
pub use dice::{DicePair, Die, DieFace, InvalidDie};
pub use score::score;
pub use state::{GameState, HelpSection, ResultKind, Round, RoundRecord, RoundResult, Side};
