//! Data-driven game balance
//!
//! Every number the simulation uses lives here so tests and hosts can swap
//! in their own values. `Default` matches [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Timing ===
    /// Largest delta time a single tick will integrate
    pub max_tick_dt: f32,

    // === Difficulty ramp ===
    pub base_spawn_delay: f32,
    pub min_spawn_delay: f32,
    pub spawn_delay_ramp: f32,
    pub base_fall_speed: f32,
    pub max_fall_speed: f32,
    pub fall_speed_ramp: f32,

    // === Balloons ===
    pub fall_speed_jitter: f32,
    pub balloon_min_radius: f32,
    pub balloon_max_radius: f32,
    pub bonus_radius_extra: f32,
    pub bonus_chance: f64,
    pub normal_points: u32,
    pub bonus_points: u32,
    pub spawn_margin: f32,
    pub spawn_y: f32,
    pub bob_amplitude: f32,
    pub cleanup_margin: f32,
    pub string_min_length: f32,
    pub string_max_length: f32,

    // === Catcher ===
    pub catcher_width: f32,
    pub catcher_height: f32,
    pub catcher_floor_offset: f32,
    pub tilt_decay: f32,
    pub tilt_gain: f32,
    pub tilt_limit: f32,
    pub color_transition_rate: f32,
    pub change_effect_decay: f32,
    pub rim_darken: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_tick_dt: MAX_TICK_DT,

            base_spawn_delay: BASE_SPAWN_DELAY,
            min_spawn_delay: MIN_SPAWN_DELAY,
            spawn_delay_ramp: SPAWN_DELAY_RAMP,
            base_fall_speed: BASE_FALL_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            fall_speed_ramp: FALL_SPEED_RAMP,

            fall_speed_jitter: FALL_SPEED_JITTER,
            balloon_min_radius: BALLOON_MIN_RADIUS,
            balloon_max_radius: BALLOON_MAX_RADIUS,
            bonus_radius_extra: BONUS_RADIUS_EXTRA,
            bonus_chance: BONUS_CHANCE,
            normal_points: NORMAL_POINTS,
            bonus_points: BONUS_POINTS,
            spawn_margin: SPAWN_MARGIN,
            spawn_y: SPAWN_Y,
            bob_amplitude: BOB_AMPLITUDE,
            cleanup_margin: CLEANUP_MARGIN,
            string_min_length: STRING_MIN_LENGTH,
            string_max_length: STRING_MAX_LENGTH,

            catcher_width: CATCHER_WIDTH,
            catcher_height: CATCHER_HEIGHT,
            catcher_floor_offset: CATCHER_FLOOR_OFFSET,
            tilt_decay: TILT_DECAY,
            tilt_gain: TILT_GAIN,
            tilt_limit: TILT_LIMIT,
            color_transition_rate: COLOR_TRANSITION_RATE,
            change_effect_decay: CHANGE_EFFECT_DECAY,
            rim_darken: RIM_DARKEN,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document; absent fields keep defaults
    ///
    /// Values that would break the simulation (negative limits, inverted
    /// ranges, non-finite numbers) are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(tuning)
    }

    /// Check every value is one the simulation can run with
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("max_tick_dt", self.max_tick_dt),
            ("base_spawn_delay", self.base_spawn_delay),
            ("min_spawn_delay", self.min_spawn_delay),
            ("spawn_delay_ramp", self.spawn_delay_ramp),
            ("base_fall_speed", self.base_fall_speed),
            ("max_fall_speed", self.max_fall_speed),
            ("fall_speed_ramp", self.fall_speed_ramp),
            ("fall_speed_jitter", self.fall_speed_jitter),
            ("balloon_min_radius", self.balloon_min_radius),
            ("balloon_max_radius", self.balloon_max_radius),
            ("bonus_radius_extra", self.bonus_radius_extra),
            ("spawn_margin", self.spawn_margin),
            ("bob_amplitude", self.bob_amplitude),
            ("cleanup_margin", self.cleanup_margin),
            ("string_min_length", self.string_min_length),
            ("string_max_length", self.string_max_length),
            ("catcher_width", self.catcher_width),
            ("catcher_height", self.catcher_height),
            ("catcher_floor_offset", self.catcher_floor_offset),
            ("tilt_decay", self.tilt_decay),
            ("tilt_gain", self.tilt_gain),
            ("tilt_limit", self.tilt_limit),
            ("color_transition_rate", self.color_transition_rate),
            ("change_effect_decay", self.change_effect_decay),
            ("rim_darken", self.rim_darken),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a finite non-negative number, got {}", name, value));
            }
        }
        if !self.spawn_y.is_finite() {
            return Err(format!("spawn_y must be finite, got {}", self.spawn_y));
        }

        if self.min_spawn_delay <= 0.0 {
            return Err("min_spawn_delay must be positive".into());
        }
        if self.balloon_min_radius <= 0.0 {
            return Err("balloon_min_radius must be positive".into());
        }
        if self.catcher_width <= 0.0 || self.catcher_height <= 0.0 {
            return Err("catcher size must be positive".into());
        }
        let ordered = [
            ("spawn delay", self.min_spawn_delay, self.base_spawn_delay),
            ("fall speed", self.base_fall_speed, self.max_fall_speed),
            ("balloon radius", self.balloon_min_radius, self.balloon_max_radius),
            ("string length", self.string_min_length, self.string_max_length),
        ];
        for (name, low, high) in ordered {
            if low > high {
                return Err(format!("{} range is inverted ({} > {})", name, low, high));
            }
        }
        if !(0.0..=1.0).contains(&self.bonus_chance) {
            return Err(format!("bonus_chance must be in [0, 1], got {}", self.bonus_chance));
        }
        if self.tilt_decay > 1.0 {
            return Err(format!("tilt_decay must be at most 1, got {}", self.tilt_decay));
        }
        Ok(())
    }

    /// Tuning with the difficulty ramp switched off (constant delay and speed)
    pub fn flat() -> Self {
        Self {
            spawn_delay_ramp: 0.0,
            fall_speed_ramp: 0.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "bonus_chance": 0.5, "catcher_width": 120.0 }"#)
            .expect("valid tuning json");
        assert_eq!(tuning.bonus_chance, 0.5);
        assert_eq!(tuning.catcher_width, 120.0);
        assert_eq!(tuning.base_spawn_delay, BASE_SPAWN_DELAY);
        assert_eq!(tuning.max_tick_dt, MAX_TICK_DT);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("{ \"bonus_chance\": \"lots\" }").is_err());
    }

    #[test]
    fn test_defaults_validate() {
        assert_eq!(Tuning::default().validate(), Ok(()));
        assert_eq!(Tuning::flat().validate(), Ok(()));
    }

    #[test]
    fn test_negative_limits_rejected() {
        for json in [
            r#"{ "max_tick_dt": -1.0 }"#,
            r#"{ "tilt_limit": -0.3 }"#,
            r#"{ "fall_speed_jitter": -5.0 }"#,
        ] {
            assert!(Tuning::from_json(json).is_err(), "accepted {}", json);
        }
    }

    #[test]
    fn test_inverted_ranges_rejected() {
        assert!(Tuning::from_json(r#"{ "balloon_min_radius": 40.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "balloon_min_radius": 0.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "string_min_length": 60.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "min_spawn_delay": 3.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "base_fall_speed": 500.0 }"#).is_err());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Tuning::from_json(r#"{ "bonus_chance": 1.5 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "tilt_decay": 1.2 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "catcher_width": 0.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "min_spawn_delay": 0.0 }"#).is_err());
    }

    #[test]
    fn test_validated_tuning_runs_without_panic() {
        use crate::sim::{GameState, TickInput, tick};

        let tuning = Tuning::from_json(r#"{ "max_tick_dt": 0.0, "tilt_limit": 0.0 }"#)
            .expect("zero limits are valid");
        let mut state = GameState::with_tuning(3, tuning);
        state.resize(800.0, 600.0);
        state.start_game(&mut ());
        let input = TickInput {
            target_x: Some(10.0),
            cosmetic_time: 0.0,
        };
        tick(&mut state, &input, 0.016, &mut ());
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.catcher.as_ref().map(|c| c.tilt), Some(0.0));
    }

    #[test]
    fn test_flat_disables_ramp() {
        let tuning = Tuning::flat();
        assert_eq!(tuning.spawn_delay_ramp, 0.0);
        assert_eq!(tuning.fall_speed_ramp, 0.0);
        assert_eq!(tuning.base_fall_speed, BASE_FALL_SPEED);
    }
}
