//! Runtime error taxonomy.

use game_core::ExecuteError;

/// Errors surfaced by session operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The engine rejected a command (e.g. rolling after the final round).
    #[error("command rejected: {0}")]
    Command(#[from] ExecuteError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
