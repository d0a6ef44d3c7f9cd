//! Collision tests between balloons, the catcher and the floor
//!
//! The catcher is a rectangle and balloons are circles. Overlap uses the
//! cheap form: the circle's bounding box against the rectangle.

use super::balloon::Balloon;
use super::catcher::Rect;

/// Circle (by its bounding box) vs rectangle overlap
///
/// Strict inequalities: touching edges do not count.
pub fn circle_rect_overlap(cx: f32, cy: f32, r: f32, rect: &Rect) -> bool {
    cx + r > rect.x && cx - r < rect.x + rect.w && cy + r > rect.y && cy - r < rect.y + rect.h
}

/// Whether a balloon is inside the catcher's bounds
pub fn balloon_caught(balloon: &Balloon, catcher: &Rect) -> bool {
    circle_rect_overlap(balloon.pos.x, balloon.pos.y, balloon.radius, catcher)
}

/// Whether a balloon's leading edge has reached the floor (inclusive)
pub fn balloon_hit_floor(balloon: &Balloon, floor_y: f32) -> bool {
    balloon.bottom() >= floor_y
}

/// Whether a balloon fell so far past the floor it should be dropped
pub fn balloon_out_of_play(balloon: &Balloon, floor_y: f32, margin: f32) -> bool {
    balloon.pos.y > floor_y + margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::color::BALLOON_PALETTE;
    use glam::Vec2;

    fn balloon_at(x: f32, y: f32, r: f32) -> Balloon {
        Balloon {
            id: 1,
            pos: Vec2::new(x, y),
            radius: r,
            speed: 0.0,
            color: BALLOON_PALETTE[0],
            points: 1,
            bob_offset: 0.0,
            string_length: 30.0,
        }
    }

    #[test]
    fn test_overlap_scenario() {
        let rect = Rect::new(80.0, 490.0, 80.0, 60.0);
        assert!(balloon_caught(&balloon_at(100.0, 500.0, 20.0), &rect));
    }

    #[test]
    fn test_overlap_each_side() {
        let rect = Rect::new(100.0, 100.0, 80.0, 60.0);
        // Left of the rect, reaching in by 1px
        assert!(circle_rect_overlap(81.0, 130.0, 20.0, &rect));
        // Exactly touching the left edge
        assert!(!circle_rect_overlap(80.0, 130.0, 20.0, &rect));
        // Right side
        assert!(circle_rect_overlap(199.0, 130.0, 20.0, &rect));
        assert!(!circle_rect_overlap(200.0, 130.0, 20.0, &rect));
        // Above
        assert!(circle_rect_overlap(140.0, 81.0, 20.0, &rect));
        assert!(!circle_rect_overlap(140.0, 80.0, 20.0, &rect));
        // Below
        assert!(circle_rect_overlap(140.0, 179.0, 20.0, &rect));
        assert!(!circle_rect_overlap(140.0, 180.0, 20.0, &rect));
    }

    #[test]
    fn test_corner_uses_bounding_box() {
        // Diagonal to the corner: true circle would miss, bounding box hits
        let rect = Rect::new(100.0, 100.0, 80.0, 60.0);
        assert!(circle_rect_overlap(85.0, 85.0, 20.0, &rect));
    }

    #[test]
    fn test_floor_inclusive() {
        assert!(balloon_hit_floor(&balloon_at(100.0, 580.0, 20.0), 600.0));
        assert!(!balloon_hit_floor(&balloon_at(100.0, 579.9, 20.0), 600.0));
    }

    #[test]
    fn test_out_of_play() {
        assert!(!balloon_out_of_play(&balloon_at(0.0, 700.0, 20.0), 600.0, 100.0));
        assert!(balloon_out_of_play(&balloon_at(0.0, 700.5, 20.0), 600.0, 100.0));
    }
}
