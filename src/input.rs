//! Pointer/touch input to a single horizontal target
//!
//! Input events arrive between frames and only ever overwrite one value.
//! The session polls it once per tick; polling consumes it, so a pointer
//! that stops moving stops steering.

use std::cell::Cell;
use std::rc::Rc;

use crate::sim::GameState;

/// Source of the catcher's target X (viewport pixels)
pub trait InputSource {
    /// Latest target since the previous poll, if any
    fn poll_target_x(&mut self) -> Option<f32>;
}

/// No input at all (headless runs)
impl InputSource for () {
    fn poll_target_x(&mut self) -> Option<f32> {
        None
    }
}

/// Shared last-write-wins target, written by event handlers
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct PointerTarget {
    target_x: Rc<Cell<Option<f32>>>,
}

impl PointerTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved/pressed at `x`
    pub fn set(&self, x: f32) {
        if x.is_finite() {
            self.target_x.set(Some(x));
        }
    }
}

impl InputSource for PointerTarget {
    fn poll_target_x(&mut self) -> Option<f32> {
        self.target_x.take()
    }
}

/// Maps client (CSS pixel) coordinates onto the canvas backing store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapper {
    /// Canvas left edge in client coordinates
    pub rect_left: f32,
    /// Canvas width in CSS pixels
    pub rect_width: f32,
    /// Canvas backing-store width in pixels
    pub canvas_width: f32,
}

impl PointerMapper {
    pub fn new(rect_left: f32, rect_width: f32, canvas_width: f32) -> Self {
        Self {
            rect_left,
            rect_width,
            canvas_width,
        }
    }

    /// Client X to canvas X; `None` until the canvas has a layout width
    pub fn to_canvas_x(&self, client_x: f32) -> Option<f32> {
        if self.rect_width <= 0.0 {
            return None;
        }
        Some((client_x - self.rect_left) * (self.canvas_width / self.rect_width))
    }
}

/// Demo-mode steering: chase the balloon closest to the floor
pub fn autopilot_target(state: &GameState) -> Option<f32> {
    state
        .balloons
        .iter()
        .max_by(|a, b| {
            a.bottom()
                .partial_cmp(&b.bottom())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|b| b.pos.x)
}
