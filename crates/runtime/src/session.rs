//! The session orchestrator.

use game_core::{
    Command, Directive, ExecuteError, GameConfig, GameEngine, GameState, PhaseError,
    PlayRoundCommand, TransitionPhase,
};
use game_fx::{Animator, Surface};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::event::GameEvent;
use crate::roller::DiceRoller;

/// Drawable bounds of the celebration surface, in surface units.
///
/// Updated by the client on every viewport resize. Particles already in
/// flight keep their absolute coordinates; bounds only affect where a new
/// batch spawns and how the renderer clips.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Owns the game state, the celebration animator, and the dice provider.
///
/// All access is single-threaded and cooperative: user actions and frame
/// ticks arrive from the same event-processing loop, so no locking is
/// needed anywhere in the session.
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    animator: Animator,
    roller: Box<dyn DiceRoller>,
    fx_rng: StdRng,
    bounds: Bounds,
}

impl GameSession {
    pub fn new(config: GameConfig, roller: Box<dyn DiceRoller>) -> Self {
        Self {
            state: GameState::new(&config),
            config,
            animator: Animator::new(),
            roller,
            fx_rng: StdRng::from_entropy(),
            bounds: Bounds::default(),
        }
    }

    /// Session with a deterministic particle RNG, for tests and replays.
    pub fn with_fx_seed(config: GameConfig, roller: Box<dyn DiceRoller>, seed: u64) -> Self {
        let mut session = Self::new(config, roller);
        session.fx_rng = StdRng::seed_from_u64(seed);
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn is_celebrating(&self) -> bool {
        self.animator.is_running()
    }

    /// Plays one round: draws both sides' pairs (player first, the
    /// original play order) and runs the round through the engine.
    ///
    /// Validates before drawing: a rejected round must not consume roller
    /// state, so seeded and scripted games stay reproducible across the
    /// rejection.
    pub fn play_round(&mut self) -> Result<Vec<GameEvent>> {
        PlayRoundCommand::check(&self.state, &self.config).map_err(|error| {
            ExecuteError::PlayRound(PhaseError::new(TransitionPhase::PreValidate, error))
        })?;

        let player = self.roller.roll_pair();
        let computer = self.roller.roll_pair();

        let directives = GameEngine::new(&mut self.state, &self.config)
            .execute(&Command::play_round(player, computer))?;

        tracing::info!(
            round = self.state.history().len(),
            %player,
            %computer,
            "round played"
        );
        Ok(self.perform(directives))
    }

    /// Resets to round 1 with zeroed totals, cancelling any celebration.
    pub fn reset(&mut self) -> Result<Vec<GameEvent>> {
        let directives =
            GameEngine::new(&mut self.state, &self.config).execute(&Command::reset())?;
        tracing::info!("game reset");
        Ok(self.perform(directives))
    }

    /// Dismisses the result popup; also cancels a running celebration.
    pub fn dismiss_result(&mut self) -> Result<Vec<GameEvent>> {
        let directives =
            GameEngine::new(&mut self.state, &self.config).execute(&Command::dismiss_result())?;
        Ok(self.perform(directives))
    }

    /// Toggles one collapsible help section.
    pub fn toggle_help(&mut self, section: game_core::HelpSection) -> Result<Vec<GameEvent>> {
        let directives = GameEngine::new(&mut self.state, &self.config)
            .execute(&Command::toggle_help(section))?;
        Ok(self.perform(directives))
    }

    /// Advances the celebration one frame on `surface`.
    ///
    /// Returns `true` while the animation still needs frames; `false` once
    /// idle (exhausted, cancelled, or never started).
    pub fn frame(&mut self, surface: &mut impl Surface) -> bool {
        let was_running = self.animator.is_running();
        let still_running = self.animator.advance(surface);
        if was_running && !still_running {
            tracing::debug!("celebration exhausted");
        }
        still_running
    }

    /// Performs animation directives and translates the rest into events.
    fn perform(&mut self, directives: Vec<Directive>) -> Vec<GameEvent> {
        let mut events = Vec::with_capacity(directives.len());
        for directive in directives {
            match directive {
                Directive::ShowRoundRolls { .. } => {
                    // The freshly recorded round; record_round just pushed it.
                    if let Some(record) = self.state.history().last() {
                        events.push(GameEvent::RoundPlayed {
                            record: *record,
                            player_total: self.state.total(game_core::Side::Player),
                            computer_total: self.state.total(game_core::Side::Computer),
                        });
                    }
                }
                // Scoreboard data rides on RoundPlayed / GameReset.
                Directive::RefreshScoreboard => {}
                Directive::ShowResult(kind) => {
                    tracing::info!(result = ?kind, "winner declared");
                    events.push(GameEvent::ResultDeclared(kind));
                }
                Directive::StartCelebration => {
                    // Degenerate bounds collapse the spawn area to a point.
                    let width = self.bounds.width.max(1.0);
                    let height = self.bounds.height.max(1.0);
                    self.animator.start(
                        width,
                        height,
                        self.config.celebration_particles,
                        &mut self.fx_rng,
                    );
                    tracing::debug!(particles = self.animator.live_count(), "celebration started");
                    events.push(GameEvent::CelebrationStarted {
                        particles: self.animator.live_count(),
                    });
                }
                Directive::StopCelebration => {
                    if self.animator.is_running() {
                        self.animator.cancel();
                        tracing::debug!("celebration cancelled");
                        events.push(GameEvent::CelebrationStopped);
                    }
                }
                Directive::HideResult => events.push(GameEvent::ResultDismissed),
                Directive::ClearScoreboard => events.push(GameEvent::GameReset),
                Directive::ToggleSection(section) => events.push(GameEvent::HelpToggled(section)),
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roller::ScriptedRoller;
    use game_core::{HelpSection, ResultKind};
    use game_fx::{Hsl, Vec2};

    struct NullSurface;

    impl Surface for NullSurface {
        fn clear(&mut self) {}
        fn fill_circle(&mut self, _: Vec2, _: f32, _: Hsl, _: f32) {}
    }

    /// Player wins 35 to 12: (6,5)/(2,3), (4,4)/(1,6), (2,6)/(3,4).
    fn winning_session() -> GameSession {
        let roller = ScriptedRoller::new(&[6, 5, 2, 3, 4, 4, 1, 6, 2, 6, 3, 4]);
        let mut session =
            GameSession::with_fx_seed(GameConfig::default(), Box::new(roller), 1234);
        session.set_bounds(Bounds::new(200.0, 120.0));
        session
    }

    #[test]
    fn a_winning_game_starts_the_celebration() {
        let mut session = winning_session();

        let first = session.play_round().unwrap();
        assert!(matches!(
            first[0],
            GameEvent::RoundPlayed {
                player_total: 11,
                computer_total: 5,
                ..
            }
        ));
        assert_eq!(first.len(), 1);

        session.play_round().unwrap();
        let last = session.play_round().unwrap();

        assert!(last.contains(&GameEvent::ResultDeclared(ResultKind::Win {
            player_total: 35
        })));
        assert!(last.contains(&GameEvent::CelebrationStarted { particles: 100 }));
        assert!(session.is_celebrating());
    }

    #[test]
    fn the_celebration_exhausts_under_the_frame_loop() {
        let mut session = winning_session();
        for _ in 0..3 {
            session.play_round().unwrap();
        }

        let mut surface = NullSurface;
        let mut frames = 0;
        while session.frame(&mut surface) {
            frames += 1;
            assert!(frames <= 200, "celebration failed to exhaust");
        }
        assert!(!session.is_celebrating());
    }

    #[test]
    fn dismissal_cancels_and_is_idempotent() {
        let mut session = winning_session();
        for _ in 0..3 {
            session.play_round().unwrap();
        }
        assert!(session.is_celebrating());

        let events = session.dismiss_result().unwrap();
        assert_eq!(
            events,
            vec![GameEvent::ResultDismissed, GameEvent::CelebrationStopped]
        );
        assert!(!session.is_celebrating());

        // Already idle: no stop event the second time.
        let events = session.dismiss_result().unwrap();
        assert_eq!(events, vec![GameEvent::ResultDismissed]);
    }

    #[test]
    fn a_fourth_roll_is_rejected() {
        let mut session = winning_session();
        for _ in 0..3 {
            session.play_round().unwrap();
        }
        assert!(session.play_round().is_err());
        // The rejection leaves totals untouched.
        assert_eq!(session.state().total(game_core::Side::Player), 35);
    }

    #[test]
    fn a_rejected_roll_does_not_consume_roller_state() {
        let mut session = winning_session();
        for _ in 0..3 {
            session.play_round().unwrap();
        }

        // Rejected before any dice are drawn.
        assert!(session.play_round().is_err());

        // The cycling script is still aligned: the next game replays the
        // same rounds from the top.
        session.reset().unwrap();
        let replay = session.play_round().unwrap();
        assert!(matches!(
            replay[0],
            GameEvent::RoundPlayed {
                player_total: 11,
                computer_total: 5,
                ..
            }
        ));
    }

    #[test]
    fn reset_allows_a_fresh_game() {
        let mut session = winning_session();
        for _ in 0..3 {
            session.play_round().unwrap();
        }

        let events = session.reset().unwrap();
        assert!(events.contains(&GameEvent::GameReset));
        assert!(events.contains(&GameEvent::CelebrationStopped));
        assert!(!session.state().is_finished());

        // Scripted roller cycles, so the next game plays the same rounds.
        let replay = session.play_round().unwrap();
        assert!(matches!(
            replay[0],
            GameEvent::RoundPlayed { player_total: 11, .. }
        ));
    }

    #[test]
    fn help_toggles_pass_straight_through() {
        let mut session = winning_session();
        let events = session.toggle_help(HelpSection::Rules).unwrap();
        assert_eq!(events, vec![GameEvent::HelpToggled(HelpSection::Rules)]);
    }
}
