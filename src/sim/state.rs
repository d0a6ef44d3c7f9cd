//! Game state and phase transitions
//!
//! Everything a run mutates lives in [`GameState`]. Phase changes go through
//! the transition methods here; anything else is ignored.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::balloon::Balloon;
use super::catcher::Catcher;
use super::difficulty::Difficulty;
use super::scoring::RunSummary;
use super::tuning::Tuning;
use crate::events::{EventSink, GameEvent};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, final score on screen
    GameOver,
}

/// Play area size in pixels; the floor is at `height`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False until the host has reported a real size
    pub fn is_sized(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn floor_y(&self) -> f32 {
        self.height
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub score: u64,
    /// Seconds of play since the run started
    pub elapsed: f32,
    /// Seconds since the last spawn
    pub spawn_timer: f32,
    /// Active balloons
    pub balloons: Vec<Balloon>,
    /// Present once a run has started
    pub catcher: Option<Catcher>,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a game on the title screen with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            viewport: Viewport::default(),
            phase: GamePhase::Start,
            score: 0,
            elapsed: 0.0,
            spawn_timer: 0.0,
            balloons: Vec::new(),
            catcher: None,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn delay and fall speed for the current elapsed time
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::at(&self.tuning, self.elapsed)
    }

    /// Host reported a new play-area size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width.max(0.0), height.max(0.0));
        if let Some(catcher) = &mut self.catcher {
            catcher.fit_viewport(self.viewport.width, self.viewport.height, &self.tuning);
        }
    }

    /// Start -> Playing
    pub fn start_game(&mut self, sink: &mut impl EventSink) -> bool {
        if self.phase != GamePhase::Start {
            log::debug!("start_game ignored in {:?}", self.phase);
            return false;
        }
        if !self.viewport.is_sized() {
            log::debug!("start_game ignored before the viewport is sized");
            return false;
        }
        self.begin_run(sink);
        true
    }

    /// GameOver -> Playing, same reset as a fresh start
    pub fn restart_game(&mut self, sink: &mut impl EventSink) -> bool {
        if self.phase != GamePhase::GameOver {
            log::debug!("restart_game ignored in {:?}", self.phase);
            return false;
        }
        if !self.viewport.is_sized() {
            log::debug!("restart_game ignored before the viewport is sized");
            return false;
        }
        self.begin_run(sink);
        true
    }

    /// GameOver -> Start; the last score stays for display
    pub fn quit_game(&mut self, sink: &mut impl EventSink) -> bool {
        if self.phase != GamePhase::GameOver {
            log::debug!("quit_game ignored in {:?}", self.phase);
            return false;
        }
        self.phase = GamePhase::Start;
        sink.emit(GameEvent::Quit);
        log::info!("Returned to title (last score {})", self.score);
        true
    }

    /// Playing -> GameOver; only the simulation loop calls this
    pub(crate) fn end_run(&mut self, sink: &mut impl EventSink) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;
        sink.emit(GameEvent::GameOver {
            final_score: self.score,
        });
        log::info!(
            "Game over: score {} after {:.1}s",
            self.score,
            self.elapsed
        );
    }

    /// Final score and message, once the run has ended
    pub fn summary(&self) -> Option<RunSummary> {
        (self.phase == GamePhase::GameOver).then(|| RunSummary::new(self.score))
    }

    fn begin_run(&mut self, sink: &mut impl EventSink) {
        self.score = 0;
        self.elapsed = 0.0;
        self.spawn_timer = 0.0;
        self.time_ticks = 0;
        self.balloons.clear();
        self.catcher = Some(Catcher::centered(
            &self.tuning,
            self.viewport.width,
            self.viewport.height,
        ));
        self.phase = GamePhase::Playing;
        sink.emit(GameEvent::Started);
        log::info!("Run started (seed {})", self.seed);
    }
}
