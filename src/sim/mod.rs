//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same seed, tuning, inputs and
//! delta times, a run plays out identically:
//! - Seeded RNG only
//! - Wall-clock time enters only as the cosmetic bob input
//! - No rendering or platform dependencies

pub mod balloon;
pub mod catcher;
pub mod collision;
pub mod color;
pub mod difficulty;
pub mod scoring;
pub mod state;
pub mod tick;
pub mod tuning;

pub use balloon::Balloon;
pub use catcher::{Catcher, Rect};
pub use collision::{balloon_caught, balloon_hit_floor, circle_rect_overlap};
pub use color::Rgb;
pub use difficulty::{Difficulty, current_fall_speed, current_spawn_delay};
pub use scoring::{RunSummary, ScoreTier};
pub use state::{GamePhase, GameState, Viewport};
pub use tick::{TickInput, tick};
pub use tuning::Tuning;
