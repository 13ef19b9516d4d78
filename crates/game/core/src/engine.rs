//! Command execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! mutation flows through the same two-phase pipeline (pre_validate →
//! apply), and failures are tagged with the phase that produced them so the
//! runtime can report precisely where a command was rejected.

use std::convert::Infallible;

use crate::command::{Command, CommandTransition, Directive, PlayRoundError};
use crate::config::GameConfig;
use crate::state::GameState;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> PhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for PhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for PhaseError<E> {}

/// Errors surfaced while executing a command through the game engine.
///
/// Reset, dismissal, and help toggles cannot fail, so play-round rejection
/// is the only variant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("play round command failed: {0}")]
    PlayRound(PhaseError<PlayRoundError>),
}

/// Reducer that routes commands through the transition pipeline.
///
/// Holds the state and config for the duration of one dispatch; callers
/// construct it per call, which keeps borrows short.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Executes a command, returning the directives it produced.
    pub fn execute(&mut self, command: &Command) -> Result<Vec<Directive>, ExecuteError> {
        match command {
            Command::PlayRound(cmd) => {
                drive_transition(cmd, self.state, self.config).map_err(ExecuteError::PlayRound)
            }
            Command::Reset(cmd) => Ok(infallible(drive_transition(cmd, self.state, self.config))),
            Command::DismissResult(cmd) => {
                Ok(infallible(drive_transition(cmd, self.state, self.config)))
            }
            Command::ToggleHelp(cmd) => {
                Ok(infallible(drive_transition(cmd, self.state, self.config)))
            }
        }
    }
}

fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    config: &GameConfig,
) -> Result<Vec<Directive>, PhaseError<T::Error>>
where
    T: CommandTransition,
{
    transition
        .pre_validate(state, config)
        .map_err(|error| PhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, config)
        .map_err(|error| PhaseError::new(TransitionPhase::Apply, error))
}

fn infallible(result: Result<Vec<Directive>, PhaseError<Infallible>>) -> Vec<Directive> {
    match result {
        Ok(directives) => directives,
        Err(phase_error) => match phase_error.error {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{DicePair, Die};
    use crate::state::{HelpSection, ResultKind, Side};

    fn pair(a: u8, b: u8) -> DicePair {
        DicePair::new(Die::new(a).unwrap(), Die::new(b).unwrap())
    }

    fn play(state: &mut GameState, config: &GameConfig, p: (u8, u8), c: (u8, u8)) -> Vec<Directive> {
        GameEngine::new(state, config)
            .execute(&Command::play_round(pair(p.0, p.1), pair(c.0, c.1)))
            .expect("round should be accepted")
    }

    #[test]
    fn a_full_game_runs_exactly_three_rounds() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);

        play(&mut state, &config, (6, 5), (2, 3)); // 11 vs 5
        play(&mut state, &config, (4, 4), (1, 6)); // +16 vs +0
        let directives = play(&mut state, &config, (2, 6), (3, 4)); // +8 vs +7

        assert_eq!(state.total(Side::Player), 35);
        assert_eq!(state.total(Side::Computer), 12);
        assert!(state.is_finished());
        assert!(directives.contains(&Directive::ShowResult(ResultKind::Win { player_total: 35 })));
        assert!(directives.contains(&Directive::StartCelebration));
    }

    #[test]
    fn non_final_rounds_do_not_declare_a_result() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let directives = play(&mut state, &config, (6, 5), (2, 3));
        assert_eq!(
            directives,
            vec![
                Directive::ShowRoundRolls {
                    round: 1,
                    player: state.history()[0].player,
                    computer: state.history()[0].computer,
                },
                Directive::RefreshScoreboard,
            ]
        );
    }

    #[test]
    fn losing_and_tying_skip_the_celebration() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        play(&mut state, &config, (2, 3), (6, 5));
        play(&mut state, &config, (1, 6), (4, 4));
        let directives = play(&mut state, &config, (3, 4), (2, 6));
        assert!(directives.contains(&Directive::ShowResult(ResultKind::Loss)));
        assert!(!directives.contains(&Directive::StartCelebration));

        let mut state = GameState::new(&config);
        play(&mut state, &config, (2, 3), (3, 2));
        play(&mut state, &config, (4, 4), (4, 4));
        let directives = play(&mut state, &config, (2, 6), (6, 2));
        assert!(directives.contains(&Directive::ShowResult(ResultKind::Tie)));
        assert!(!directives.contains(&Directive::StartCelebration));
    }

    #[test]
    fn a_fourth_round_is_rejected_in_pre_validation() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        for _ in 0..3 {
            play(&mut state, &config, (2, 3), (4, 5));
        }

        let error = GameEngine::new(&mut state, &config)
            .execute(&Command::play_round(pair(2, 3), pair(4, 5)))
            .unwrap_err();
        let ExecuteError::PlayRound(phase_error) = error;
        assert_eq!(phase_error.phase, TransitionPhase::PreValidate);
        assert_eq!(
            phase_error.error,
            PlayRoundError::GameFinished { rounds_per_game: 3 }
        );
        // The rejected command must not have touched the state.
        assert_eq!(state.round().number(), 4);
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn reset_clears_state_and_stops_the_celebration() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        play(&mut state, &config, (6, 6), (2, 3));

        let directives = GameEngine::new(&mut state, &config)
            .execute(&Command::reset())
            .unwrap();
        assert_eq!(
            directives,
            vec![
                Directive::ClearScoreboard,
                Directive::HideResult,
                Directive::StopCelebration,
            ]
        );
        assert_eq!(state, GameState::new(&config));
    }

    #[test]
    fn dismissal_hides_the_popup_and_cancels_animation() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let directives = GameEngine::new(&mut state, &config)
            .execute(&Command::dismiss_result())
            .unwrap();
        assert_eq!(
            directives,
            vec![Directive::HideResult, Directive::StopCelebration]
        );
    }

    #[test]
    fn help_toggle_only_touches_presentation() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let before = state.clone();
        let directives = GameEngine::new(&mut state, &config)
            .execute(&Command::toggle_help(HelpSection::Rules))
            .unwrap();
        assert_eq!(
            directives,
            vec![Directive::ToggleSection(HelpSection::Rules)]
        );
        assert_eq!(state, before);
    }
}
