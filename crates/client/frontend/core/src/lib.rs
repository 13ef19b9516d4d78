//! Framework-agnostic presentation layer.
//!
//! Holds the view model projected from session events, the player-facing
//! message log, and the redraw plumbing. Terminal widgets (and any future
//! UI) render exclusively from these types; nothing here depends on a
//! rendering framework.
pub mod event;
pub mod message;
pub mod view_model;

pub use event::EventImpact;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{HelpView, PopupView, RoundRow, ScoreboardView, ViewModel};
