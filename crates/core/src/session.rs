//! Drives one `Game` at a time on behalf of an adapter: routes input events,
//! journals accepted actions and pushes every change to the renderer and HUD.

use log::{debug, info};

use crate::config::GameConfig;
use crate::dice::derive_restart_seed;
use crate::game::Game;
use crate::journal::InputJournal;
use crate::ports::{HudReporter, InputEvent, InputSource, Renderer};
use crate::types::{GameError, TurnOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Turn(TurnOutcome),
    /// The action arrived after the run ended and changed nothing.
    Ignored,
    Restarted { seed: u64 },
}

pub struct Session<R: Renderer, H: HudReporter> {
    config: GameConfig,
    run_seed: u64,
    restarts: u64,
    game: Game,
    journal: InputJournal,
    renderer: R,
    hud: H,
}

impl<R: Renderer, H: HudReporter> Session<R, H> {
    pub fn start(config: GameConfig, seed: u64, renderer: R, hud: H) -> Result<Self, GameError> {
        let game = Game::new(seed, &config)?;
        let journal = InputJournal::new(seed, &config);
        let mut session = Self { config, run_seed: seed, restarts: 0, game, journal, renderer, hud };
        session.present();
        Ok(session)
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<SessionEvent, GameError> {
        let Some(action) = event.action() else {
            return self.restart();
        };
        match self.game.apply_action(action) {
            Ok(outcome) => {
                self.journal.append_action(action);
                self.present();
                Ok(SessionEvent::Turn(outcome))
            }
            Err(GameError::InvalidAction { phase }) => {
                debug!("ignoring {action:?} in {phase:?}");
                Ok(SessionEvent::Ignored)
            }
            Err(other) => Err(other),
        }
    }

    /// Pumps `input` until it runs dry. Stops early only if a restart fails to generate.
    pub fn run(&mut self, input: &mut impl InputSource) -> Result<(), GameError> {
        while let Some(event) = input.next_input() {
            self.handle(event)?;
        }
        Ok(())
    }

    /// On failure the previous game stays in place.
    fn restart(&mut self) -> Result<SessionEvent, GameError> {
        let seed = derive_restart_seed(self.run_seed, self.restarts + 1);
        let game = Game::new(seed, &self.config)?;
        self.restarts += 1;
        self.game = game;
        self.journal = InputJournal::new(seed, &self.config);
        info!("restart #{} with seed {seed}", self.restarts);
        self.present();
        Ok(SessionEvent::Restarted { seed })
    }

    fn present(&mut self) {
        self.renderer.render(self.game.state());
        self.hud.update(self.game.hud_stats());
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Actions accepted since the current game was generated.
    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }
}
