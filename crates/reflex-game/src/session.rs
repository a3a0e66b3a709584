//! A game session: the single consumer of game events
//!
//! `Session` owns the board, the game state, and the three components that
//! mutate them. Events are applied one at a time through [`Session::dispatch`],
//! so no two mutations ever interleave.

use crate::board::Board;
use crate::countdown::{Countdown, CountdownOutcome};
use crate::game_state::{GameState, GameStatus};
use crate::hit::{HitOutcome, HitResolver};
use crate::presenter::{NullPresenter, TargetPresenter};
use crate::random::{RandomSource, SeededRandom};
use crate::spawner::Spawner;
use crate::status::{NullStatus, StatusDisplay};
use reflex_core::{GameConfig, Result, TargetId};
use reflex_runtime::GameEvent;
use serde::Serialize;

/// What applying one event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A spawn tick lit this target
    Activated(TargetId),
    /// A spawn tick found the active set full or nothing left to light
    Saturated,
    /// A click scored on this target
    Hit(TargetId),
    /// A click picked nothing, or an unlit target
    Miss,
    /// A countdown tick left this many seconds
    Ticked(u32),
    /// A countdown tick ran the clock out
    Ended,
    /// The session was restarted in place
    Reset,
    /// The round is over; the event had no effect
    Ignored,
}

/// End-of-round record
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub score: u32,
    pub hits: u32,
    pub misses: u32,
    pub spawns: u32,
    pub time_left: u32,
    pub is_over: bool,
    /// Rounds played, including the current one
    pub rounds: u32,
    pub config: GameConfig,
}

pub struct Session {
    config: GameConfig,
    board: Board,
    state: GameState,
    spawner: Spawner,
    hits: HitResolver,
    countdown: Countdown,
    presenter: Box<dyn TargetPresenter>,
    status: Box<dyn StatusDisplay>,
}

impl Session {
    /// Create a session using the config's seed for target selection
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = SeededRandom::new(config.seed);
        Self::with_random(config, Box::new(rng))
    }

    /// Create a session with an explicit random source
    pub fn with_random(config: GameConfig, rng: Box<dyn RandomSource>) -> Result<Self> {
        config.validate()?;
        tracing::info!(
            columns = config.grid_columns,
            rows = config.grid_rows,
            max_active = config.max_active,
            seconds = config.countdown_secs,
            "starting session"
        );

        Ok(Self {
            board: Board::new(
                config.grid_columns,
                config.grid_rows,
                config.max_active as usize,
            ),
            state: GameState::new(config.countdown_secs),
            spawner: Spawner::new(rng),
            hits: HitResolver::new(),
            countdown: Countdown::new(),
            presenter: Box::new(NullPresenter),
            status: Box::new(NullStatus),
            config,
        })
    }

    pub fn with_presenter(mut self, presenter: impl TargetPresenter + 'static) -> Self {
        self.presenter = Box::new(presenter);
        self
    }

    /// Attach a status display and show the initial status on it
    pub fn with_status(mut self, status: impl StatusDisplay + 'static) -> Self {
        self.status = Box::new(status);
        self.status.show(&self.state.status());
        self
    }

    /// Apply one event
    pub fn dispatch(&mut self, event: GameEvent) -> Outcome {
        match event {
            GameEvent::SpawnTick => {
                if self.state.is_over() {
                    return Outcome::Ignored;
                }
                match self.spawn_tick() {
                    Some(id) => Outcome::Activated(id),
                    None => Outcome::Saturated,
                }
            }
            GameEvent::Click(picked) => match self.resolve_click(picked) {
                HitOutcome::Hit(id) => Outcome::Hit(id),
                HitOutcome::Miss => Outcome::Miss,
                HitOutcome::Ignored => Outcome::Ignored,
            },
            GameEvent::CountdownTick => match self.countdown_tick() {
                CountdownOutcome::Ticked(left) => Outcome::Ticked(left),
                CountdownOutcome::Ended => Outcome::Ended,
                CountdownOutcome::Ignored => Outcome::Ignored,
            },
            GameEvent::Reset => {
                self.reset_session();
                Outcome::Reset
            }
        }
    }

    pub fn spawn_tick(&mut self) -> Option<TargetId> {
        self.spawner
            .tick(&mut self.board, &self.state, self.presenter.as_mut())
    }

    pub fn resolve_click(&mut self, picked: Option<TargetId>) -> HitOutcome {
        self.hits.resolve(
            picked,
            &mut self.board,
            &mut self.state,
            self.presenter.as_mut(),
            self.status.as_mut(),
        )
    }

    pub fn countdown_tick(&mut self) -> CountdownOutcome {
        self.countdown.tick(&mut self.state, self.status.as_mut())
    }

    /// Start a new round in place: every target goes dark, score and time
    /// return to their starting values, and the phase goes back to playing.
    pub fn reset_session(&mut self) {
        for id in self.board.deactivate_all() {
            self.presenter.deactivated(id);
        }
        self.state.reset();
        self.spawner.reset_stats();
        self.hits.reset_stats();
        self.status.show(&self.state.status());
        tracing::info!(round = self.state.generation() + 1, "session reset");
    }

    pub fn snapshot(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.state.score(),
            hits: self.hits.hits(),
            misses: self.hits.misses(),
            spawns: self.spawner.spawns(),
            time_left: self.state.time_left(),
            is_over: self.state.is_over(),
            rounds: self.state.generation() + 1,
            config: self.config.clone(),
        }
    }
}
