//! Events emitted by the session for UI layers.

use game_core::{HelpSection, ResultKind, RoundRecord};

/// What just happened, with everything a frontend needs to render it.
///
/// Events carry data (rolled faces, scores, totals) rather than referencing
/// session internals, so consumers never reach back into game state
/// mid-update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A round completed; totals are the post-round cumulative scores.
    RoundPlayed {
        record: RoundRecord,
        player_total: u32,
        computer_total: u32,
    },
    /// Round 3 completed and the winner was determined.
    ResultDeclared(ResultKind),
    /// The win celebration started with this many live particles.
    CelebrationStarted { particles: usize },
    /// The celebration stopped (cancelled or exhausted).
    CelebrationStopped,
    /// The result popup was dismissed.
    ResultDismissed,
    /// The game was reset to round 1 with zeroed totals.
    GameReset,
    /// A collapsible help section was toggled.
    HelpToggled(HelpSection),
}
