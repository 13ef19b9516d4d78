//! Authoritative game state representation.
//!
//! This module owns the data structures that describe totals, the round
//! counter, and the retained round history. Runtime layers clone or query
//! this state but mutate it exclusively through the engine.

use crate::config::GameConfig;
use crate::dice::DicePair;

/// Either the human or the computer player.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Player,
    Computer,
}

/// One-based round counter.
///
/// Counts `1..=rounds_per_game` while the game is live; the value one past
/// the final round marks the game as finished. Advances by exactly one per
/// completed round and is reset only by an explicit game reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(u8);

impl Round {
    pub const FIRST: Round = Round(1);

    pub fn number(self) -> u8 {
        self.0
    }

    fn advance(self) -> Round {
        Round(self.0 + 1)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One side's rolls and score for a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    pub pair: DicePair,
    pub score: u32,
}

/// Both sides' results for one completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRecord {
    pub round: u8,
    pub player: RoundResult,
    pub computer: RoundResult,
}

/// Final outcome shown in the result popup.
///
/// The win message carries the player's total; loss and tie use fixed texts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResultKind {
    Win { player_total: u32 },
    Loss,
    Tie,
}

impl ResultKind {
    pub fn message(&self) -> String {
        match self {
            ResultKind::Win { player_total } => {
                format!("Congratulations, you win! Your total score is {player_total}.")
            }
            ResultKind::Loss => "Tough luck! You lost.".to_string(),
            ResultKind::Tie => "It's a tie!".to_string(),
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, ResultKind::Win { .. })
    }
}

/// The two collapsible help sections in the client.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HelpSection {
    HowToPlay,
    Rules,
}

/// Canonical snapshot of the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Rounds per game, captured from config at construction so the state
    /// is self-describing in snapshots.
    rounds_per_game: u8,
    player_total: u32,
    computer_total: u32,
    round: Round,
    /// Completed rounds in play order. The running totals always equal the
    /// sums over this history.
    history: Vec<RoundRecord>,
}

impl GameState {
    /// Fresh state at round 1 with zeroed totals.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rounds_per_game: config.rounds_per_game,
            player_total: 0,
            computer_total: 0,
            round: Round::FIRST,
            history: Vec::new(),
        }
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn total(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_total,
            Side::Computer => self.computer_total,
        }
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// True once the final round has completed.
    pub fn is_finished(&self) -> bool {
        self.round.number() > self.rounds_per_game
    }

    /// Final outcome; defined only once the game is finished.
    pub fn outcome(&self) -> Option<ResultKind> {
        if !self.is_finished() {
            return None;
        }
        Some(if self.player_total > self.computer_total {
            ResultKind::Win {
                player_total: self.player_total,
            }
        } else if self.player_total < self.computer_total {
            ResultKind::Loss
        } else {
            ResultKind::Tie
        })
    }

    /// Accumulates one completed round and advances the round counter.
    ///
    /// Engine-internal; commands are the only callers.
    pub(crate) fn record_round(&mut self, player: RoundResult, computer: RoundResult) {
        self.player_total += player.score;
        self.computer_total += computer.score;
        self.history.push(RoundRecord {
            round: self.round.number(),
            player,
            computer,
        });
        self.round = self.round.advance();
    }

    /// Restores the initial (0, 0, round 1) state, discarding history.
    pub(crate) fn reset(&mut self) {
        self.player_total = 0;
        self.computer_total = 0;
        self.round = Round::FIRST;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{DicePair, Die};
    use crate::score::score;

    fn result(a: u8, b: u8) -> RoundResult {
        let pair = DicePair::new(Die::new(a).unwrap(), Die::new(b).unwrap());
        RoundResult {
            pair,
            score: score(pair),
        }
    }

    fn finished_state(totals: [(u8, u8, u8, u8); 3]) -> GameState {
        let mut state = GameState::new(&GameConfig::default());
        for (pa, pb, ca, cb) in totals {
            state.record_round(result(pa, pb), result(ca, cb));
        }
        state
    }

    #[test]
    fn totals_are_the_sum_of_history() {
        let state = finished_state([(2, 3, 4, 5), (6, 6, 2, 2), (5, 4, 1, 6)]);
        let player_sum: u32 = state.history().iter().map(|r| r.player.score).sum();
        let computer_sum: u32 = state.history().iter().map(|r| r.computer.score).sum();
        assert_eq!(state.total(Side::Player), player_sum);
        assert_eq!(state.total(Side::Computer), computer_sum);
        assert_eq!(state.history().len(), 3);
        assert!(state.is_finished());
    }

    #[test]
    fn round_counter_advances_once_per_round() {
        let mut state = GameState::new(&GameConfig::default());
        assert_eq!(state.round().number(), 1);
        state.record_round(result(2, 3), result(4, 5));
        assert_eq!(state.round().number(), 2);
        state.record_round(result(2, 3), result(4, 5));
        state.record_round(result(2, 3), result(4, 5));
        assert_eq!(state.round().number(), 4);
        assert!(state.is_finished());
    }

    #[test]
    fn outcome_is_undefined_while_live() {
        let mut state = GameState::new(&GameConfig::default());
        assert_eq!(state.outcome(), None);
        state.record_round(result(6, 5), result(2, 3));
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn outcome_compares_totals() {
        // 11 + 10 + 9 = 30 vs 5 + 0 + 6 = 11
        let win = finished_state([(6, 5, 2, 3), (6, 4, 1, 4), (5, 4, 2, 4)]);
        assert_eq!(win.outcome(), Some(ResultKind::Win { player_total: 30 }));

        let loss = finished_state([(2, 3, 6, 5), (1, 4, 6, 4), (2, 4, 5, 4)]);
        assert_eq!(loss.outcome(), Some(ResultKind::Loss));

        let tie = finished_state([(2, 3, 2, 3), (6, 4, 6, 4), (2, 4, 2, 4)]);
        assert_eq!(tie.outcome(), Some(ResultKind::Tie));
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut state = finished_state([(6, 5, 2, 3), (6, 4, 1, 4), (5, 4, 2, 4)]);
        state.reset();
        assert_eq!(state, GameState::new(&GameConfig::default()));
    }
}
