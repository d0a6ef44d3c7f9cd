//! Per-frame simulation tick
//!
//! Core game loop: difficulty, spawning, balloon motion, floor and catch
//! checks, in that order.

use super::balloon::Balloon;
use super::collision::{balloon_caught, balloon_hit_floor, balloon_out_of_play};
use super::state::{GamePhase, GameState};
use crate::events::{EventSink, GameEvent};

/// Inputs sampled once per tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Where the player wants the catcher centered (from pointer/touch)
    pub target_x: Option<f32>,
    /// Wall-clock seconds. Drives the cosmetic balloon bob only; gameplay
    /// never reads it.
    pub cosmetic_time: f64,
}

/// Advance the game by one frame
///
/// `dt` is clamped to `[0, tuning.max_tick_dt]`. Outside `Playing`, or
/// before the viewport has a size, this does nothing.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, sink: &mut impl EventSink) {
    if state.phase != GamePhase::Playing || !state.viewport.is_sized() {
        return;
    }
    let dt = if dt.is_finite() {
        dt.clamp(0.0, state.tuning.max_tick_dt)
    } else {
        0.0
    };
    let viewport = state.viewport;

    state.time_ticks += 1;
    state.elapsed += dt;

    // Catcher: input first, then easing
    if let Some(catcher) = &mut state.catcher {
        if let Some(target_x) = input.target_x {
            catcher.move_to(target_x, viewport.width, &state.tuning);
        }
        catcher.update(dt, &state.tuning);
    }

    let difficulty = state.difficulty();

    state.spawn_timer += dt;
    if state.spawn_timer >= difficulty.spawn_delay {
        let id = state.next_entity_id();
        let balloon = Balloon::spawn(
            id,
            &mut state.rng,
            &state.tuning,
            viewport.width,
            difficulty.fall_speed,
        );
        log::trace!("Spawned balloon {} at x={:.0}", id, balloon.pos.x);
        state.balloons.push(balloon);
        state.spawn_timer = 0.0;
    }

    let floor_y = viewport.floor_y();
    let bob = state.tuning.bob_amplitude;
    let cleanup_margin = state.tuning.cleanup_margin;
    let catch_rect = state.catcher.as_ref().map(|c| c.rect());

    // Newest first so removal by index stays valid
    let mut i = state.balloons.len();
    while i > 0 {
        i -= 1;
        let balloon = &mut state.balloons[i];
        balloon.advance(dt, input.cosmetic_time, bob);

        // Floor wins over a simultaneous catch
        if balloon_hit_floor(balloon, floor_y) {
            sink.emit(GameEvent::FloorMiss);
            state.end_run(sink);
            return;
        }

        if let Some(rect) = &catch_rect {
            if balloon_caught(balloon, rect) {
                let caught = state.balloons.remove(i);
                state.score += u64::from(caught.points);
                if let Some(catcher) = &mut state.catcher {
                    catcher.change_color(caught.color);
                }
                sink.emit(GameEvent::Caught {
                    points: caught.points,
                    color: caught.color,
                    pos: caught.pos,
                });
                continue;
            }
        }

        if balloon_out_of_play(balloon, floor_y, cleanup_margin) {
            log::warn!("Balloon {} fell past the floor unnoticed", balloon.id);
            state.balloons.remove(i);
        }
    }
}
