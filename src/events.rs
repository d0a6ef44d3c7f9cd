//! Outbound notifications from the simulation
//!
//! The simulation never waits on a sink. Audio, particles and the HUD all
//! hang off this port.

use glam::Vec2;
use serde::Serialize;

use crate::sim::color::Rgb;

/// Something gameplay-relevant that just happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// A run began (start or restart)
    Started,
    /// A balloon landed in the catcher
    Caught { points: u32, color: Rgb, pos: Vec2 },
    /// A balloon reached the floor
    FloorMiss,
    /// The run ended
    GameOver { final_score: u64 },
    /// Player left the game-over screen for the title screen
    Quit,
}

/// Receiver for [`GameEvent`]s
///
/// Every hook defaults to a no-op so a sink only overrides what it cares
/// about. `emit` fans out to the narrower hooks.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::Started => self.on_start(),
            GameEvent::Caught { points, .. } => self.on_catch(points > 1),
            GameEvent::FloorMiss => self.on_floor_miss(),
            GameEvent::GameOver { .. } => self.on_game_over(),
            GameEvent::Quit => self.on_quit(),
        }
    }

    fn on_start(&mut self) {}
    fn on_catch(&mut self, _is_bonus: bool) {}
    fn on_floor_miss(&mut self) {}
    fn on_game_over(&mut self) {}
    fn on_quit(&mut self) {}
}

/// Headless: drop everything
impl EventSink for () {}

/// Record events in order (tests, replays)
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

/// Sink that writes events to the `log` facade
#[derive(Debug, Default)]
pub struct LogSink {
    pub catches: u32,
    pub bonus_catches: u32,
}

impl EventSink for LogSink {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::Caught { points, pos, .. } => {
                self.catches += 1;
                if points > 1 {
                    self.bonus_catches += 1;
                }
                log::debug!("Caught balloon (+{}) at ({:.0}, {:.0})", points, pos.x, pos.y);
            }
            GameEvent::FloorMiss => log::info!("Balloon hit the floor"),
            GameEvent::GameOver { final_score } => log::info!("Game over, score {}", final_score),
            GameEvent::Started => log::info!("Game started"),
            GameEvent::Quit => log::info!("Back to title"),
        }
    }
}
