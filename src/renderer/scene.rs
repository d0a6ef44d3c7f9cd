//! Scene assembly: game state to a triangle list
//!
//! Read-only over the simulation. Nothing here feeds back into gameplay.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use super::shapes::{arc_band, circle, line, rect, rotate_about, star, vertical_gradient};
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{Balloon, Catcher, GamePhase, GameState, Viewport};

const BALLOON_SEGMENTS: u32 = 32;
const SPARKLES: u32 = 5;

/// Cheap hash to a value in [0, 1) for per-frame sparkle placement
fn hash01(seed: u32) -> f32 {
    let h = seed.wrapping_mul(2654435761).rotate_left(13).wrapping_mul(0x9E3779B1);
    (h % 10_000) as f32 / 10_000.0
}

/// Horizontal, vertical and size fractions for one sparkle
fn sparkle_params(seed: u32) -> (f32, f32, f32) {
    (
        hash01(seed),
        hash01(seed.wrapping_add(1)),
        hash01(seed.wrapping_add(2)),
    )
}

/// Sky gradient covering the whole viewport
pub fn draw_background(viewport: Viewport) -> Vec<Vertex> {
    vertical_gradient(
        0.0,
        0.0,
        viewport.width,
        viewport.height,
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    )
}

/// One balloon with string, highlight, knot and bonus star
pub fn draw_balloon(balloon: &Balloon) -> Vec<Vertex> {
    let center = balloon.pos;
    let r = balloon.radius;
    let knot = Vec2::new(center.x, center.y + r);

    let mut v = line(
        knot,
        Vec2::new(knot.x, knot.y + balloon.string_length),
        2.0,
        colors::STRING,
    );
    v.extend(circle(center, r, balloon.color.to_rgba(1.0), BALLOON_SEGMENTS));
    v.extend(circle(
        center - Vec2::splat(r * 0.3),
        r * 0.3,
        colors::HIGHLIGHT,
        16,
    ));
    if balloon.is_bonus() {
        v.extend(star(center, r * 0.4, r * 0.16, colors::STAR));
    }
    v.extend(circle(knot, 3.0, colors::KNOT, 8));
    v
}

/// The jar: body, rim, handle, shine, plus glow and sparkles after a catch
pub fn draw_catcher(catcher: &Catcher, settings: &Settings, frame: u64) -> Vec<Vertex> {
    let (x, y, w, h) = (catcher.pos.x, catcher.pos.y, catcher.width, catcher.height);
    let glow = settings.effective_glow(catcher.change_effect);
    let body_alpha = if glow > 0.0 { 0.8 + 0.2 * glow } else { 1.0 };
    let body = catcher.color.to_rgba(body_alpha);

    let mut v = Vec::new();
    if glow > 0.0 {
        let spread = 20.0 * glow;
        v.extend(rect(
            x - spread / 2.0,
            y - spread / 2.0,
            w + spread,
            h + spread,
            catcher.color.to_rgba(0.3 * glow),
        ));
    }
    v.extend(rect(x, y + 10.0, w, h - 10.0, body));
    v.extend(rect(x - 5.0, y, w + 10.0, 15.0, catcher.rim_color().to_rgba(1.0)));
    v.extend(arc_band(
        Vec2::new(x + w + 10.0, y + 25.0),
        12.0,
        18.0,
        -FRAC_PI_2,
        FRAC_PI_2,
        catcher.color.to_rgba(1.0),
        12,
    ));
    v.extend(rect(x + 5.0, y + 15.0, 15.0, h - 20.0, colors::SHINE));

    if glow > 0.0 {
        let sparkle = [1.0, 1.0, 1.0, glow];
        let base = (frame as u32).wrapping_mul(SPARKLES * 3);
        for i in 0..SPARKLES {
            let (u, t, s) = sparkle_params(base.wrapping_add(i * 3));
            let pos = Vec2::new(x + u * w, y + t * h);
            v.extend(circle(pos, 2.0 + s * 3.0, sparkle, 8));
        }
    }

    let tilt = settings.effective_tilt(catcher.tilt);
    rotate_about(&mut v, catcher.rect().center(), tilt);
    v
}

/// Puffy cloud made of four circles
fn draw_cloud(center: Vec2, size: f32) -> Vec<Vertex> {
    let mut v = circle(center, size, colors::CLOUD, 24);
    v.extend(circle(center + Vec2::new(size * 0.6, 0.0), size * 0.8, colors::CLOUD, 24));
    v.extend(circle(center - Vec2::new(size * 0.6, 0.0), size * 0.8, colors::CLOUD, 24));
    v.extend(circle(center - Vec2::new(0.0, size * 0.5), size * 0.7, colors::CLOUD, 24));
    v
}

/// Three clouds drifting with game time
pub fn draw_clouds(viewport: Viewport, elapsed: f32) -> Vec<Vertex> {
    let t = elapsed * 0.5;
    let mut v = draw_cloud(Vec2::new(50.0 + t.sin() * 20.0, 80.0), 40.0);
    v.extend(draw_cloud(
        Vec2::new(viewport.width - 100.0 + (t * 0.7).cos() * 15.0, 120.0),
        35.0,
    ));
    v.extend(draw_cloud(
        Vec2::new(viewport.width * 0.3 + (t * 0.5).sin() * 25.0, 60.0),
        30.0,
    ));
    v
}

/// Full frame; outside a run only the sky is drawn
pub fn build_scene(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let mut v = draw_background(state.viewport);
    if state.phase != GamePhase::Playing {
        return v;
    }

    if let Some(catcher) = &state.catcher {
        v.extend(draw_catcher(catcher, settings, state.time_ticks));
    }
    for balloon in &state.balloons {
        v.extend(draw_balloon(balloon));
    }
    if settings.clouds {
        v.extend(draw_clouds(state.viewport, state.elapsed));
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_title_screen_is_background_only() {
        let mut state = GameState::new(1);
        state.resize(800.0, 600.0);
        assert_eq!(build_scene(&state, &Settings::default()).len(), 6);
    }

    #[test]
    fn test_playing_scene_contains_entities() {
        let mut state = GameState::new(1);
        state.resize(800.0, 600.0);
        state.start_game(&mut ());
        let mut rng = Pcg32::seed_from_u64(1);
        let balloon = Balloon::spawn(1, &mut rng, &Tuning::default(), 800.0, 100.0);
        let balloon_len = draw_balloon(&balloon).len();
        state.balloons.push(balloon);

        let settings = Settings {
            clouds: false,
            ..Settings::default()
        };
        let catcher_len = draw_catcher(state.catcher.as_ref().expect("catcher"), &settings, 0).len();
        assert_eq!(
            build_scene(&state, &settings).len(),
            6 + catcher_len + balloon_len
        );
    }

    #[test]
    fn test_bonus_balloon_has_star() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut balloon = Balloon::spawn(1, &mut rng, &Tuning::default(), 800.0, 100.0);
        balloon.points = 1;
        let plain = draw_balloon(&balloon).len();
        balloon.points = 5;
        assert_eq!(draw_balloon(&balloon).len(), plain + 30);
    }

    #[test]
    fn test_glow_adds_sparkles_unless_reduced_motion() {
        let tuning = Tuning::default();
        let mut catcher = Catcher::centered(&tuning, 800.0, 600.0);
        let calm = draw_catcher(&catcher, &Settings::default(), 0).len();
        catcher.change_color(crate::sim::color::BONUS_GOLD);
        let glowing = draw_catcher(&catcher, &Settings::default(), 0).len();
        assert_eq!(glowing, calm + 6 + (SPARKLES as usize) * 24);

        let reduced = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert_eq!(draw_catcher(&catcher, &reduced, 0).len(), calm);
    }

    #[test]
    fn test_sparkle_seed_wraps() {
        let (u, t, s) = sparkle_params(u32::MAX);
        for f in [u, t, s] {
            assert!((0.0..1.0).contains(&f));
        }
        assert_eq!(sparkle_params(u32::MAX).1, hash01(0));
    }

    #[test]
    fn test_hash_in_unit_range() {
        for seed in 0..1000 {
            let h = hash01(seed);
            assert!((0.0..1.0).contains(&h));
        }
    }
}
