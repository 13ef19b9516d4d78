//! Application state and the frame-driven event loop.
//!
//! The loop is the scheduler for the whole client: it polls input with a
//! deadline, advances the celebration one frame per tick, and repaints when
//! something changed. Everything runs on this one thread; user actions and
//! animation frames never race.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use game_core::{GameConfig, HelpSection};

use client_frontend_core::{EventImpact, MessageEntry, MessageLevel, ViewModel};
use runtime::{Bounds, DiceRoller, GameEvent, GameSession, RandomRoller};

use crate::config::CliConfig;
use crate::input::{self, AppAction};
use crate::presentation::fx::FxSurface;
use crate::presentation::terminal::{self, Tui};
use crate::presentation::ui;

const FRAME_INTERVAL_MS: u64 = 16;

pub struct App {
    config: CliConfig,
    session: GameSession,
    view: ViewModel,
    fx: FxSurface,
    should_quit: bool,
}

impl App {
    pub fn new(config: CliConfig) -> Self {
        let game_config = GameConfig::default();
        let roller: Box<dyn DiceRoller> = match config.dice_seed {
            Some(seed) => Box::new(RandomRoller::seeded(seed)),
            None => Box::new(RandomRoller::new()),
        };
        Self {
            session: GameSession::new(game_config, roller),
            view: ViewModel::new(&game_config),
            fx: FxSurface::default(),
            config,
            should_quit: false,
        }
    }

    pub fn run(mut self) -> Result<()> {
        let mut terminal = terminal::init()?;
        let result = self.event_loop(&mut terminal);
        terminal::restore()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
        let mut last_frame = Instant::now();
        let mut needs_redraw = true;

        while !self.should_quit {
            self.sync_bounds(terminal)?;

            if needs_redraw || self.view.celebrating {
                let (view, fx, bounds, ui_config) = (
                    &self.view,
                    &self.fx,
                    self.session.bounds(),
                    &self.config.ui,
                );
                terminal.draw(|frame| ui::render(frame, view, fx, bounds, ui_config))?;
                needs_redraw = false;
            }

            let timeout = frame_interval.saturating_sub(last_frame.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(action) = input::map_key(key) {
                            needs_redraw |= self.handle_action(action).requires_redraw;
                        }
                    }
                    Event::Resize(..) => needs_redraw = true,
                    _ => {}
                }
            }

            if last_frame.elapsed() >= frame_interval {
                last_frame = Instant::now();
                if self.view.celebrating && !self.session.frame(&mut self.fx) {
                    // Exhausted naturally; no event fires for this, so sync
                    // the presentation flag here.
                    self.view.celebrating = false;
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    /// Keeps the session's drawable bounds matched to the braille canvas
    /// resolution (2 dots per cell column, 4 per row). Particles in flight
    /// keep their absolute coordinates across a resize.
    fn sync_bounds(&mut self, terminal: &Tui) -> Result<()> {
        let size = terminal.size()?;
        let bounds = Bounds::new(f32::from(size.width) * 2.0, f32::from(size.height) * 4.0);
        if bounds != self.session.bounds() {
            self.session.set_bounds(bounds);
        }
        Ok(())
    }

    fn handle_action(&mut self, action: AppAction) -> EventImpact {
        match action {
            AppAction::Roll => match self.session.play_round() {
                Ok(events) => self.apply_events(events),
                Err(error) => {
                    tracing::debug!(%error, "roll rejected");
                    self.view.log.push(MessageEntry::new(
                        "Game over - press n to start a new game",
                        MessageLevel::Warning,
                    ));
                    EventImpact::redraw()
                }
            },
            AppAction::Reset => self.dispatch(GameSession::reset),
            AppAction::DismissPopup => self.dispatch(GameSession::dismiss_result),
            AppAction::ToggleHowToPlay => {
                self.dispatch(|session| session.toggle_help(HelpSection::HowToPlay))
            }
            AppAction::ToggleRules => {
                self.dispatch(|session| session.toggle_help(HelpSection::Rules))
            }
            AppAction::Quit => {
                self.should_quit = true;
                EventImpact::none()
            }
        }
    }

    fn dispatch(
        &mut self,
        operation: impl FnOnce(&mut GameSession) -> runtime::Result<Vec<GameEvent>>,
    ) -> EventImpact {
        match operation(&mut self.session) {
            Ok(events) => self.apply_events(events),
            Err(error) => {
                tracing::warn!(%error, "session rejected command");
                EventImpact::none()
            }
        }
    }

    fn apply_events(&mut self, events: Vec<GameEvent>) -> EventImpact {
        events
            .into_iter()
            .fold(EventImpact::none(), |impact, event| {
                impact.combine(self.view.apply(&event))
            })
    }
}
