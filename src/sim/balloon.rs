//! Falling balloon entity

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::{BALLOON_PALETTE, BONUS_GOLD, Rgb};
use super::tuning::Tuning;

/// A balloon falling toward the floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balloon {
    pub id: u32,
    /// Center position (y grows downward)
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical speed in pixels/s
    pub speed: f32,
    pub color: Rgb,
    /// 1 for a regular balloon, 5 for a bonus one
    pub points: u32,
    /// Phase offset for the horizontal bob (radians)
    pub bob_offset: f32,
    /// Cosmetic string hanging below the balloon
    pub string_length: f32,
}

impl Balloon {
    /// Roll a new balloon just above the viewport
    ///
    /// `base_speed` comes from the difficulty ramp; the per-balloon jitter is
    /// applied on top and may push the speed slightly past the ramp bounds.
    pub fn spawn<R: Rng>(
        id: u32,
        rng: &mut R,
        tuning: &Tuning,
        viewport_width: f32,
        base_speed: f32,
    ) -> Self {
        let band = viewport_width - 2.0 * tuning.spawn_margin;
        let x = if band > 0.0 {
            tuning.spawn_margin + rng.random::<f32>() * band
        } else {
            viewport_width / 2.0
        };

        let radius_span = tuning.balloon_max_radius - tuning.balloon_min_radius;
        let radius = tuning.balloon_min_radius + rng.random::<f32>() * radius_span;
        let jitter = (rng.random::<f32>() * 2.0 - 1.0) * tuning.fall_speed_jitter;
        let color = BALLOON_PALETTE[rng.random_range(0..BALLOON_PALETTE.len())];
        let bob_offset = rng.random::<f32>() * std::f32::consts::TAU;
        let string_span = tuning.string_max_length - tuning.string_min_length;
        let string_length = tuning.string_min_length + rng.random::<f32>() * string_span;

        let mut balloon = Self {
            id,
            pos: Vec2::new(x, tuning.spawn_y),
            radius,
            speed: base_speed + jitter,
            color,
            points: tuning.normal_points,
            bob_offset,
            string_length,
        };

        if rng.random_bool(tuning.bonus_chance.clamp(0.0, 1.0)) {
            balloon.points = tuning.bonus_points;
            balloon.color = BONUS_GOLD;
            balloon.radius += tuning.bonus_radius_extra;
        }

        balloon
    }

    pub fn is_bonus(&self) -> bool {
        self.points > 1
    }

    /// Fall by `speed * dt` and bob sideways
    ///
    /// The bob is keyed to `cosmetic_time` (wall-clock seconds), not game
    /// time, and moves a fixed amount per call.
    pub fn advance(&mut self, dt: f32, cosmetic_time: f64, bob_amplitude: f32) {
        self.pos.y += self.speed * dt;
        let phase = cosmetic_time + self.bob_offset as f64;
        self.pos.x += phase.sin() as f32 * bob_amplitude;
    }

    /// Lowest point of the balloon (its leading edge while falling)
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_within_band() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..500 {
            let b = Balloon::spawn(id, &mut rng, &tuning, 400.0, 100.0);
            assert!(b.pos.x >= 30.0 && b.pos.x <= 370.0, "x out of band: {}", b.pos.x);
            assert_eq!(b.pos.y, -30.0);
            assert!(b.radius > 0.0);
            assert!(b.points == 1 || b.points == 5);
            assert!((75.0..=125.0).contains(&b.speed));
            if b.is_bonus() {
                assert_eq!(b.color, BONUS_GOLD);
                assert!(b.radius >= 25.0 && b.radius <= 35.0);
            } else {
                assert!(BALLOON_PALETTE.contains(&b.color));
                assert!(b.radius >= 20.0 && b.radius <= 30.0);
            }
        }
    }

    #[test]
    fn test_narrow_viewport_spawns_centered() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let b = Balloon::spawn(1, &mut rng, &tuning, 40.0, 100.0);
        assert_eq!(b.pos.x, 20.0);
    }

    #[test]
    fn test_bonus_frequency_about_ten_percent() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2024);
        let total = 20_000;
        let bonus = (0..total)
            .map(|id| Balloon::spawn(id, &mut rng, &tuning, 800.0, 100.0))
            .filter(Balloon::is_bonus)
            .count();
        let freq = bonus as f64 / total as f64;
        assert!((freq - 0.1).abs() < 0.01, "bonus frequency {freq}");
    }

    #[test]
    fn test_advance_falls_and_bobs() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut b = Balloon::spawn(1, &mut rng, &tuning, 800.0, 100.0);
        b.speed = 100.0;
        b.bob_offset = 0.0;
        let start = b.pos;

        // sin(0) = 0: no sideways drift
        b.advance(0.01, 0.0, 0.5);
        assert!((b.pos.y - (start.y + 1.0)).abs() < 1e-4);
        assert_eq!(b.pos.x, start.x);

        // sin(pi/2) = 1: full amplitude
        b.advance(0.0, std::f64::consts::FRAC_PI_2, 0.5);
        assert!((b.pos.x - (start.x + 0.5)).abs() < 1e-4);
    }
}
