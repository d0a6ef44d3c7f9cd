//! Balloon Catcher - a single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, game phase)
//! - `events`: Event port the simulation notifies (audio, particles, HUD)
//! - `input`: Pointer/touch to horizontal target mapping
//! - `session`: Composition root tying simulation, input and events together
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Player preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod events;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use events::{EventSink, GameEvent};
pub use input::{InputSource, PointerTarget};
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
///
/// These are the defaults for [`sim::Tuning`]; the simulation reads the
/// tuning values, never these directly.
pub mod consts {
    /// Upper bound on a single tick's delta time (seconds)
    pub const MAX_TICK_DT: f32 = 0.016;

    /// Seconds between spawns at the start of a run
    pub const BASE_SPAWN_DELAY: f32 = 2.0;
    /// Spawn delay floor
    pub const MIN_SPAWN_DELAY: f32 = 0.5;
    /// Spawn delay shrink per second of game time
    pub const SPAWN_DELAY_RAMP: f32 = 0.02;

    /// Fall speed at the start of a run (pixels/s)
    pub const BASE_FALL_SPEED: f32 = 100.0;
    /// Fall speed ceiling (pixels/s)
    pub const MAX_FALL_SPEED: f32 = 400.0;
    /// Fall speed growth (pixels/s²)
    pub const FALL_SPEED_RAMP: f32 = 20.0;
    /// Per-balloon speed jitter (±)
    pub const FALL_SPEED_JITTER: f32 = 25.0;

    /// Balloon radius band
    pub const BALLOON_MIN_RADIUS: f32 = 20.0;
    pub const BALLOON_MAX_RADIUS: f32 = 30.0;
    /// Bonus balloons are bigger by this much
    pub const BONUS_RADIUS_EXTRA: f32 = 5.0;
    pub const BONUS_CHANCE: f64 = 0.1;
    pub const NORMAL_POINTS: u32 = 1;
    pub const BONUS_POINTS: u32 = 5;
    /// Horizontal keep-out on both sides of the spawn band
    pub const SPAWN_MARGIN: f32 = 30.0;
    /// Balloons start above the top edge
    pub const SPAWN_Y: f32 = -30.0;
    /// Horizontal bob per tick (pixels)
    pub const BOB_AMPLITUDE: f32 = 0.5;
    /// Balloons this far past the floor are dropped
    pub const CLEANUP_MARGIN: f32 = 100.0;
    /// Balloon string length band (cosmetic)
    pub const STRING_MIN_LENGTH: f32 = 30.0;
    pub const STRING_MAX_LENGTH: f32 = 50.0;

    /// Catcher (jar) dimensions
    pub const CATCHER_WIDTH: f32 = 80.0;
    pub const CATCHER_HEIGHT: f32 = 60.0;
    /// Catcher top edge sits this far above the floor
    pub const CATCHER_FLOOR_OFFSET: f32 = 80.0;
    /// Tilt multiplier applied every tick (not time-normalized)
    pub const TILT_DECAY: f32 = 0.9;
    /// Radians of tilt per pixel moved
    pub const TILT_GAIN: f32 = 0.01;
    pub const TILT_LIMIT: f32 = 0.3;
    /// Color transition progress per second
    pub const COLOR_TRANSITION_RATE: f32 = 3.0;
    /// Glow decay per second after a catch
    pub const CHANGE_EFFECT_DECAY: f32 = 2.0;
    /// Rim is the body color scaled by this
    pub const RIM_DARKEN: f32 = 0.8;
}
