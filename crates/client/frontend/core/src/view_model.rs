//! View model projected from session events.
//!
//! The single source of truth for presentation state. The event loop feeds
//! every [`GameEvent`] through [`ViewModel::apply`]; widgets read the
//! resulting fields and never touch the session directly.

use game_core::{DieFace, GameConfig, HelpSection, RoundRecord};
use runtime::GameEvent;

use crate::event::EventImpact;
use crate::message::{MessageEntry, MessageLevel, MessageLog};

/// One completed round as the scoreboard shows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRow {
    pub round: u8,
    pub player_faces: [DieFace; 2],
    pub computer_faces: [DieFace; 2],
    pub player_score: u32,
    pub computer_score: u32,
}

impl RoundRow {
    fn from_record(record: &RoundRecord) -> Self {
        Self {
            round: record.round,
            player_faces: record.player.pair.faces(),
            computer_faces: record.computer.pair.faces(),
            player_score: record.player.score,
            computer_score: record.computer.score,
        }
    }
}

/// Per-round and cumulative totals for both sides.
#[derive(Clone, Debug, Default)]
pub struct ScoreboardView {
    pub rows: Vec<RoundRow>,
    pub player_total: u32,
    pub computer_total: u32,
}

impl ScoreboardView {
    /// The most recent round, i.e. the dice currently on the table.
    pub fn last_round(&self) -> Option<&RoundRow> {
        self.rows.last()
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.player_total = 0;
        self.computer_total = 0;
    }
}

/// Result popup state.
#[derive(Clone, Debug, Default)]
pub struct PopupView {
    pub visible: bool,
    pub message: String,
}

/// Visibility of the two collapsible help sections.
#[derive(Clone, Copy, Debug, Default)]
pub struct HelpView {
    pub how_to_play_shown: bool,
    pub rules_shown: bool,
}

impl HelpView {
    pub fn toggle(&mut self, section: HelpSection) {
        match section {
            HelpSection::HowToPlay => self.how_to_play_shown = !self.how_to_play_shown,
            HelpSection::Rules => self.rules_shown = !self.rules_shown,
        }
    }

    pub fn is_shown(&self, section: HelpSection) -> bool {
        match section {
            HelpSection::HowToPlay => self.how_to_play_shown,
            HelpSection::Rules => self.rules_shown,
        }
    }
}

/// Presentation state for the whole client.
#[derive(Clone, Debug)]
pub struct ViewModel {
    pub scoreboard: ScoreboardView,
    pub popup: PopupView,
    pub help: HelpView,
    pub celebrating: bool,
    pub log: MessageLog,
    rounds_per_game: u8,
    current_round: u8,
}

impl ViewModel {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            scoreboard: ScoreboardView::default(),
            popup: PopupView::default(),
            help: HelpView::default(),
            celebrating: false,
            log: MessageLog::new(64),
            rounds_per_game: config.rounds_per_game,
            current_round: 1,
        }
    }

    /// Header label for the round counter.
    pub fn round_label(&self) -> String {
        if self.current_round > self.rounds_per_game {
            "Game over".to_string()
        } else {
            format!("Round {} of {}", self.current_round, self.rounds_per_game)
        }
    }

    /// Folds one session event into the view state.
    pub fn apply(&mut self, event: &GameEvent) -> EventImpact {
        match event {
            GameEvent::RoundPlayed {
                record,
                player_total,
                computer_total,
            } => {
                let row = RoundRow::from_record(record);
                self.log.push_text(format!(
                    "Round {}: you rolled {} for {}; computer rolled {} for {}",
                    record.round,
                    record.player.pair,
                    record.player.score,
                    record.computer.pair,
                    record.computer.score,
                ));
                self.scoreboard.rows.push(row);
                self.scoreboard.player_total = *player_total;
                self.scoreboard.computer_total = *computer_total;
                self.current_round = record.round + 1;
                EventImpact::redraw()
            }
            GameEvent::ResultDeclared(kind) => {
                self.popup.visible = true;
                self.popup.message = kind.message();
                self.log
                    .push(MessageEntry::new(kind.message(), MessageLevel::Info));
                EventImpact::redraw()
            }
            GameEvent::CelebrationStarted { .. } => {
                self.celebrating = true;
                EventImpact::redraw()
            }
            GameEvent::CelebrationStopped => {
                self.celebrating = false;
                EventImpact::redraw()
            }
            GameEvent::ResultDismissed => {
                if self.popup.visible {
                    self.popup.visible = false;
                    EventImpact::redraw()
                } else {
                    EventImpact::none()
                }
            }
            GameEvent::GameReset => {
                self.scoreboard.clear();
                self.popup.visible = false;
                self.current_round = 1;
                self.log.push_text("New game: round 1");
                EventImpact::redraw()
            }
            GameEvent::HelpToggled(section) => {
                self.help.toggle(*section);
                EventImpact::redraw()
            }
        }
    }
}
