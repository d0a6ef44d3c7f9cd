//! Composition root
//!
//! A [`Session`] owns one game, one input source and one event sink. Hosts
//! (the browser shell, the headless runner, tests) build one and call
//! [`Session::frame`] from their frame callback.

use crate::events::EventSink;
use crate::input::{InputSource, autopilot_target};
use crate::sim::{GamePhase, GameState, RunSummary, TickInput, tick};

pub struct Session<I: InputSource, S: EventSink> {
    state: GameState,
    input: I,
    sink: S,
    /// Demo mode: steer automatically instead of reading input
    autopilot: bool,
}

impl<I: InputSource, S: EventSink> Session<I, S> {
    pub fn new(state: GameState, input: I, sink: S) -> Self {
        Self {
            state,
            input,
            sink,
            autopilot: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Final score and message once the run is over
    pub fn summary(&self) -> Option<RunSummary> {
        self.state.summary()
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, on: bool) {
        if self.autopilot != on {
            log::info!("Autopilot: {}", on);
        }
        self.autopilot = on;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    pub fn start_game(&mut self) -> bool {
        self.discard_stale_input();
        self.state.start_game(&mut self.sink)
    }

    pub fn restart_game(&mut self) -> bool {
        self.discard_stale_input();
        self.state.restart_game(&mut self.sink)
    }

    pub fn quit_game(&mut self) -> bool {
        self.state.quit_game(&mut self.sink)
    }

    /// Run one simulation tick
    ///
    /// `dt` is the frame delta in seconds (clamped by the simulation);
    /// `cosmetic_time` is wall-clock seconds for the balloon bob.
    pub fn frame(&mut self, dt: f32, cosmetic_time: f64) {
        let polled = self.input.poll_target_x();
        let target_x = if self.autopilot {
            autopilot_target(&self.state)
        } else {
            polled
        };
        let input = TickInput {
            target_x,
            cosmetic_time,
        };
        tick(&mut self.state, &input, dt, &mut self.sink);
    }

    /// Pointer movement before a run starts must not yank the fresh catcher
    fn discard_stale_input(&mut self) {
        let _ = self.input.poll_target_x();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{GameEvent, LogSink};
    use crate::input::PointerTarget;

    fn session() -> Session<PointerTarget, Vec<GameEvent>> {
        let mut state = GameState::new(777);
        state.resize(800.0, 600.0);
        Session::new(state, PointerTarget::new(), Vec::new())
    }

    #[test]
    fn test_pointer_drives_catcher_once() {
        let pointer = PointerTarget::new();
        let mut state = GameState::new(1);
        state.resize(800.0, 600.0);
        let mut session = Session::new(state, pointer.clone(), ());
        session.start_game();

        pointer.set(200.0);
        session.frame(0.016, 0.0);
        let c = session.state().catcher.as_ref().expect("catcher");
        assert_eq!(c.pos.x, 160.0);
        let tilt_after_move = c.tilt;
        assert!(tilt_after_move < 0.0);

        // No new input: position holds and tilt keeps decaying
        session.frame(0.016, 0.0);
        let c = session.state().catcher.as_ref().expect("catcher");
        assert_eq!(c.pos.x, 160.0);
        assert!(c.tilt > tilt_after_move && c.tilt < 0.0);
    }

    #[test]
    fn test_stale_input_dropped_on_start() {
        let pointer = PointerTarget::new();
        let mut state = GameState::new(1);
        state.resize(800.0, 600.0);
        let mut session = Session::new(state, pointer.clone(), ());

        pointer.set(5.0);
        session.start_game();
        session.frame(0.016, 0.0);
        assert_eq!(session.state().catcher.as_ref().map(|c| c.pos.x), Some(360.0));
    }

    #[test]
    fn test_full_lifecycle_events() {
        let mut s = session();
        assert!(s.start_game());
        // Let balloons fall untouched until one lands
        let mut frames = 0;
        while s.phase() == GamePhase::Playing && frames < 10_000 {
            s.frame(0.016, frames as f64 * 0.016);
            frames += 1;
        }
        assert_eq!(s.phase(), GamePhase::GameOver);
        let summary = s.summary().expect("summary after game over");
        assert_eq!(summary.final_score, s.score());

        assert!(s.quit_game());
        assert_eq!(s.phase(), GamePhase::Start);
        assert!(s.summary().is_none());

        let events = s.sink();
        assert_eq!(events.first(), Some(&GameEvent::Started));
        assert_eq!(events.last(), Some(&GameEvent::Quit));
        assert!(events.contains(&GameEvent::FloorMiss));
    }

    #[test]
    fn test_restart_twice_matches_once() {
        let mut s = session();
        s.start_game();
        s.set_autopilot(true);
        for n in 0..500 {
            s.frame(0.016, n as f64 * 0.016);
        }
        s.set_autopilot(false);
        while s.phase() == GamePhase::Playing {
            s.frame(0.016, 0.0);
        }

        assert!(s.restart_game());
        let once = (s.score(), s.state().elapsed, s.state().balloons.len(), s.state().catcher.clone());
        s.restart_game();
        let twice = (s.score(), s.state().elapsed, s.state().balloons.len(), s.state().catcher.clone());
        assert_eq!(once, twice);
        assert_eq!(once.0, 0);
        assert_eq!(once.1, 0.0);
        assert_eq!(once.2, 0);
        assert_eq!(once.3.map(|c| c.pos.x), Some(360.0));
    }

    #[test]
    fn test_autopilot_catches() {
        let mut state = GameState::new(31337);
        state.resize(800.0, 600.0);
        let mut s = Session::new(state, (), LogSink::default());
        s.set_autopilot(true);
        s.start_game();
        for n in 0..1250 {
            s.frame(0.016, n as f64 * 0.016);
        }
        assert!(s.score() > 0);
        assert!(s.sink().catches > 0);
    }
}
