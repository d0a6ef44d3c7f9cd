//! Difficulty ramp
//!
//! Spawn delay and fall speed are pure functions of elapsed game time.
//! Nothing here holds state; the simulation recomputes both every tick.

use serde::Serialize;

use super::tuning::Tuning;

/// Spawn delay for the given elapsed time: linear decay floored at the minimum
pub fn current_spawn_delay(tuning: &Tuning, elapsed: f32) -> f32 {
    let elapsed = elapsed.max(0.0);
    (tuning.base_spawn_delay - elapsed * tuning.spawn_delay_ramp).max(tuning.min_spawn_delay)
}

/// Base fall speed for the given elapsed time: linear growth capped at the max
pub fn current_fall_speed(tuning: &Tuning, elapsed: f32) -> f32 {
    let elapsed = elapsed.max(0.0);
    (tuning.base_fall_speed + elapsed * tuning.fall_speed_ramp).min(tuning.max_fall_speed)
}

/// Snapshot of both difficulty values at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Difficulty {
    pub spawn_delay: f32,
    pub fall_speed: f32,
}

impl Difficulty {
    pub fn at(tuning: &Tuning, elapsed: f32) -> Self {
        Self {
            spawn_delay: current_spawn_delay(tuning, elapsed),
            fall_speed: current_fall_speed(tuning, elapsed),
        }
    }
}
