//! Command domain - explicit handlers replacing ad-hoc UI callbacks.
//!
//! Each user action is a command implementing [`CommandTransition`]: a pure
//! state transition validated and applied against [`GameState`], returning
//! the [`Directive`]s (display/animation side effects) outer layers must
//! perform. The rolls inside [`PlayRoundCommand`] are inputs drawn by the
//! runtime, so applying a command never touches an RNG.

use std::convert::Infallible;

use crate::config::GameConfig;
use crate::dice::DicePair;
use crate::score::score;
use crate::state::{GameState, HelpSection, ResultKind, RoundResult};

/// Side effects a command requires from the display and animation layers.
///
/// The engine describes effects; it never performs them. This keeps the
/// state transition pure and the effects substitutable in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Directive {
    /// Repaint per-round and cumulative totals for both sides.
    RefreshScoreboard,
    /// Show the dice faces and scores just rolled.
    ShowRoundRolls {
        round: u8,
        player: RoundResult,
        computer: RoundResult,
    },
    /// Show the result popup with the given outcome's message.
    ShowResult(ResultKind),
    /// Start the win celebration animation.
    StartCelebration,
    /// Cancel any running celebration animation.
    StopCelebration,
    /// Hide the result popup.
    HideResult,
    /// Blank the scoreboard back to zeros.
    ClearScoreboard,
    /// Flip the visibility of one collapsible help section.
    ToggleSection(HelpSection),
}

/// Defines how a concrete command mutates game state.
///
/// Mirrors the engine pipeline: `pre_validate` inspects the state before
/// mutation, `apply` mutates and reports the required side effects.
pub trait CommandTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the command, returning the directives it produced.
    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<Vec<Directive>, Self::Error>;
}

/// Errors rejecting a round-play command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayRoundError {
    #[error("game already finished after round {rounds_per_game}")]
    GameFinished { rounds_per_game: u8 },
}

/// Plays one round: both sides' pairs are scored and accumulated, and the
/// round counter advances by exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayRoundCommand {
    pub player: DicePair,
    pub computer: DicePair,
}

impl PlayRoundCommand {
    pub fn new(player: DicePair, computer: DicePair) -> Self {
        Self { player, computer }
    }

    /// Whether a round may be played at all, independent of any rolls.
    ///
    /// Shared with callers that must decide before drawing dice: the
    /// session checks this first so a rejected round never consumes
    /// roller state.
    pub fn check(state: &GameState, config: &GameConfig) -> Result<(), PlayRoundError> {
        if state.is_finished() {
            return Err(PlayRoundError::GameFinished {
                rounds_per_game: config.rounds_per_game,
            });
        }
        Ok(())
    }
}

impl CommandTransition for PlayRoundCommand {
    type Error = PlayRoundError;

    fn pre_validate(&self, state: &GameState, config: &GameConfig) -> Result<(), Self::Error> {
        Self::check(state, config)
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Vec<Directive>, Self::Error> {
        let round = state.round().number();
        let player = RoundResult {
            pair: self.player,
            score: score(self.player),
        };
        let computer = RoundResult {
            pair: self.computer,
            score: score(self.computer),
        };
        state.record_round(player, computer);

        let mut directives = vec![
            Directive::ShowRoundRolls {
                round,
                player,
                computer,
            },
            Directive::RefreshScoreboard,
        ];

        // The final round also declares the winner.
        if let Some(outcome) = state.outcome() {
            directives.push(Directive::ShowResult(outcome));
            if outcome.is_win() {
                directives.push(Directive::StartCelebration);
            }
        }

        Ok(directives)
    }
}

/// Restores the initial (0, 0, round 1) state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetGameCommand;

impl CommandTransition for ResetGameCommand {
    type Error = Infallible;

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Vec<Directive>, Self::Error> {
        state.reset();
        Ok(vec![
            Directive::ClearScoreboard,
            Directive::HideResult,
            Directive::StopCelebration,
        ])
    }
}

/// Dismisses the result popup. Dismissal also cancels a running celebration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DismissResultCommand;

impl CommandTransition for DismissResultCommand {
    type Error = Infallible;

    fn apply(
        &self,
        _state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Vec<Directive>, Self::Error> {
        Ok(vec![Directive::HideResult, Directive::StopCelebration])
    }
}

/// Flips one collapsible help section. Presentation-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleHelpCommand {
    pub section: HelpSection,
}

impl CommandTransition for ToggleHelpCommand {
    type Error = Infallible;

    fn apply(
        &self,
        _state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Vec<Directive>, Self::Error> {
        Ok(vec![Directive::ToggleSection(self.section)])
    }
}

/// Top-level command enum dispatched by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    PlayRound(PlayRoundCommand),
    Reset(ResetGameCommand),
    DismissResult(DismissResultCommand),
    ToggleHelp(ToggleHelpCommand),
}

impl Command {
    pub fn play_round(player: DicePair, computer: DicePair) -> Self {
        Self::PlayRound(PlayRoundCommand::new(player, computer))
    }

    pub fn reset() -> Self {
        Self::Reset(ResetGameCommand)
    }

    pub fn dismiss_result() -> Self {
        Self::DismissResult(DismissResultCommand)
    }

    pub fn toggle_help(section: HelpSection) -> Self {
        Self::ToggleHelp(ToggleHelpCommand { section })
    }
}
