//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in viewport pixels (y down).

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a band between two radii over an angle range
pub fn arc_band(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    theta_start: f32,
    theta_end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let span = theta_end - theta_start;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = theta_start + span * (i as f32 / segments as f32);
        let theta2 = theta_start + span * ((i + 1) as f32 / segments as f32);

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Axis-aligned filled rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    vertical_gradient(x, y, w, h, color, color)
}

/// Rectangle shading from `top` to `bottom`
pub fn vertical_gradient(
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    top: [f32; 4],
    bottom: [f32; 4],
) -> Vec<Vertex> {
    vec![
        Vertex::new(x, y, top),
        Vertex::new(x + w, y, top),
        Vertex::new(x, y + h, bottom),
        Vertex::new(x, y + h, bottom),
        Vertex::new(x + w, y, top),
        Vertex::new(x + w, y + h, bottom),
    ]
}

/// Straight line of the given width as a quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Five-pointed star, point up
pub fn star(center: Vec2, outer_radius: f32, inner_radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    const POINTS: u32 = 5;
    let mut vertices = Vec::with_capacity((POINTS * 2 * 3) as usize);
    let step = PI / POINTS as f32;
    let corner = |k: u32| -> Vec2 {
        let r = if k % 2 == 0 { outer_radius } else { inner_radius };
        let theta = -PI / 2.0 + step * k as f32;
        center + Vec2::new(theta.cos(), theta.sin()) * r
    };

    for k in 0..POINTS * 2 {
        let p1 = corner(k);
        let p2 = corner(k + 1);
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Rotate vertices in place around `pivot` (positive = clockwise on screen)
pub fn rotate_about(vertices: &mut [Vertex], pivot: Vec2, angle: f32) {
    if angle == 0.0 {
        return;
    }
    let (sin, cos) = angle.sin_cos();
    for v in vertices.iter_mut() {
        let d = Vec2::new(v.position[0], v.position[1]) - pivot;
        v.position = [
            pivot.x + d.x * cos - d.y * sin,
            pivot.y + d.x * sin + d.y * cos,
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 10.0, WHITE, 16).len(), 48);
    }

    #[test]
    fn test_rect_corners() {
        let v = rect(10.0, 20.0, 30.0, 40.0, WHITE);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_star_tip_points_up() {
        let v = star(Vec2::new(0.0, 0.0), 10.0, 4.0, WHITE);
        let top = v
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MAX, f32::min);
        assert!((top + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut v = vec![Vertex::new(1.0, 0.0, WHITE)];
        rotate_about(&mut v, Vec2::ZERO, PI / 2.0);
        assert!(v[0].position[0].abs() < 1e-6);
        assert!((v[0].position[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_line_width() {
        let v = line(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 2.0, WHITE);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        assert!(xs.iter().all(|x| (x.abs() - 1.0).abs() < 1e-6));
    }
}
