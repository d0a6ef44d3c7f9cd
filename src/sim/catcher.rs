//! The player's catcher (a jar sliding along the bottom)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::{CATCHER_BROWN, Rgb};
use super::tuning::Tuning;

/// Axis-aligned rectangle (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// The container the player moves left and right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catcher {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Color currently shown
    pub color: Rgb,
    /// Color at the moment the last transition began
    pub from_color: Rgb,
    /// Color being transitioned toward
    pub target_color: Rgb,
    /// Transition progress, 0 (from) to 1 (target)
    pub transition: f32,
    /// Glow intensity after a catch, decays to 0
    pub change_effect: f32,
    /// Rotation in radians, decays toward 0
    pub tilt: f32,
    /// x after the previous move, for tilt
    pub last_x: f32,
    /// Rim shade factor applied to `color`
    pub rim_darken: f32,
}

impl Catcher {
    /// Create a catcher centered horizontally at the bottom of the viewport
    pub fn centered(tuning: &Tuning, viewport_width: f32, viewport_height: f32) -> Self {
        let max_x = (viewport_width - tuning.catcher_width).max(0.0);
        let x = (viewport_width / 2.0 - tuning.catcher_width / 2.0).clamp(0.0, max_x);
        Self {
            pos: Vec2::new(x, viewport_height - tuning.catcher_floor_offset),
            width: tuning.catcher_width,
            height: tuning.catcher_height,
            color: CATCHER_BROWN,
            from_color: CATCHER_BROWN,
            target_color: CATCHER_BROWN,
            transition: 1.0,
            change_effect: 0.0,
            tilt: 0.0,
            last_x: x,
            rim_darken: tuning.rim_darken,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Darker shade used for the rim
    pub fn rim_color(&self) -> Rgb {
        self.color.darken(self.rim_darken)
    }

    /// Center the catcher on `target_x`, clamped inside the viewport
    ///
    /// Tilt follows the signed distance moved, scaled and clamped.
    pub fn move_to(&mut self, target_x: f32, viewport_width: f32, tuning: &Tuning) {
        if !target_x.is_finite() {
            return;
        }
        let max_x = (viewport_width - self.width).max(0.0);
        let x = (target_x - self.width / 2.0).clamp(0.0, max_x);
        self.pos.x = x;

        let delta = x - self.last_x;
        self.tilt = (delta * tuning.tilt_gain).clamp(-tuning.tilt_limit, tuning.tilt_limit);
        self.last_x = x;
    }

    /// Keep the catcher on the floor line and inside the new width
    pub fn fit_viewport(&mut self, viewport_width: f32, viewport_height: f32, tuning: &Tuning) {
        self.pos.y = viewport_height - tuning.catcher_floor_offset;
        let max_x = (viewport_width - self.width).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
        self.last_x = self.pos.x;
    }

    /// Begin fading toward a caught balloon's color
    pub fn change_color(&mut self, color: Rgb) {
        self.from_color = self.color;
        self.target_color = color;
        self.transition = 0.0;
        self.change_effect = 1.0;
    }

    /// Per-tick easing: color transition, tilt decay, glow decay
    pub fn update(&mut self, dt: f32, tuning: &Tuning) {
        if self.transition < 1.0 {
            self.transition = (self.transition + dt * tuning.color_transition_rate).min(1.0);
            self.color = self.from_color.lerp(self.target_color, self.transition);
        }

        // Per call, not per second
        self.tilt *= tuning.tilt_decay;

        if self.change_effect > 0.0 {
            self.change_effect = (self.change_effect - dt * tuning.change_effect_decay).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    #[test]
    fn test_centered_spawn() {
        let c = Catcher::centered(&Tuning::default(), W, H);
        assert_eq!(c.pos, Vec2::new(360.0, 520.0));
        assert_eq!(c.rect(), Rect::new(360.0, 520.0, 80.0, 60.0));
        assert_eq!(c.color, CATCHER_BROWN);
        assert_eq!(c.transition, 1.0);
    }

    #[test]
    fn test_move_to_centers_and_clamps() {
        let tuning = Tuning::default();
        let mut c = Catcher::centered(&tuning, W, H);

        c.move_to(100.0, W, &tuning);
        assert_eq!(c.pos.x, 60.0);

        c.move_to(-500.0, W, &tuning);
        assert_eq!(c.pos.x, 0.0);

        c.move_to(5000.0, W, &tuning);
        assert_eq!(c.pos.x, W - 80.0);
    }

    #[test]
    fn test_tilt_from_movement() {
        let tuning = Tuning::default();
        let mut c = Catcher::centered(&tuning, W, H);

        // 10px right -> 0.1 rad
        c.move_to(c.pos.x + 40.0 + 10.0, W, &tuning);
        assert!((c.tilt - 0.1).abs() < 1e-5);

        // Large jump is clamped
        c.move_to(0.0, W, &tuning);
        assert_eq!(c.tilt, -0.3);
    }

    #[test]
    fn test_tilt_decays_per_tick() {
        let tuning = Tuning::default();
        let mut c = Catcher::centered(&tuning, W, H);
        c.tilt = 0.3;
        c.update(0.016, &tuning);
        assert!((c.tilt - 0.27).abs() < 1e-6);
        // Decay does not depend on dt
        c.update(0.0, &tuning);
        assert!((c.tilt - 0.243).abs() < 1e-6);
    }

    #[test]
    fn test_color_transition() {
        let tuning = Tuning::default();
        let mut c = Catcher::centered(&tuning, W, H);
        let target = Rgb::new(255, 215, 0);
        c.change_color(target);
        assert_eq!(c.transition, 0.0);
        assert_eq!(c.change_effect, 1.0);

        c.update(0.1, &tuning);
        assert!((c.transition - 0.3).abs() < 1e-5);
        assert_eq!(c.color, CATCHER_BROWN.lerp(target, 0.3));
        assert!((c.change_effect - 0.8).abs() < 1e-5);

        for _ in 0..10 {
            c.update(0.1, &tuning);
        }
        assert_eq!(c.transition, 1.0);
        assert_eq!(c.color, target);
        assert_eq!(c.change_effect, 0.0);
        assert_eq!(c.rim_color(), target.darken(0.8));
    }

    #[test]
    fn test_rim_shade_from_tuning() {
        let tuning = Tuning {
            rim_darken: 0.5,
            ..Tuning::default()
        };
        let c = Catcher::centered(&tuning, W, H);
        assert_eq!(c.rim_color(), CATCHER_BROWN.darken(0.5));
    }

    #[test]
    fn test_fit_viewport() {
        let tuning = Tuning::default();
        let mut c = Catcher::centered(&tuning, W, H);
        c.move_to(W, W, &tuning);
        c.fit_viewport(400.0, 300.0, &tuning);
        assert_eq!(c.pos, Vec2::new(320.0, 220.0));
    }

    #[test]
    fn test_non_finite_target_ignored() {
        let tuning = Tuning::default();
        let mut c = Catcher::centered(&tuning, W, H);
        c.move_to(f32::NAN, W, &tuning);
        assert_eq!(c.pos.x, 360.0);
    }

    proptest! {
        #[test]
        fn move_to_always_in_bounds(target in -1.0e6f32..1.0e6, width in 80.0f32..4000.0) {
            let tuning = Tuning::default();
            let mut c = Catcher::centered(&tuning, width, H);
            c.move_to(target, width, &tuning);
            prop_assert!(c.pos.x >= 0.0);
            prop_assert!(c.pos.x <= width - c.width);
            prop_assert!(c.tilt.abs() <= tuning.tilt_limit);
        }
    }
}
