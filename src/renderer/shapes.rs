//! Shape generation for 2D primitives
//!
//! All helpers emit triangle-list vertices in logical playfield coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Append an axis-aligned rectangle as two triangles
pub fn push_rect(out: &mut Vec<Vertex>, rect: &Rect, color: [f32; 4]) {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.right(), rect.bottom());

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x0, y1, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Append a rectangle rotated `angle_deg` degrees around its center.
/// Positive angles tilt counter-clockwise on screen (y grows downward).
pub fn push_rotated_rect(out: &mut Vec<Vertex>, rect: &Rect, angle_deg: f32, color: [f32; 4]) {
    let center = Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0);
    // flip the sign so positive reads as counter-clockwise in screen space
    let angle = -angle_deg.to_radians();
    let (sin, cos) = angle.sin_cos();

    let half = Vec2::new(rect.w / 2.0, rect.h / 2.0);
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| center + Vec2::new(c.x * cos - c.y * sin, c.x * sin + c.y * cos));

    out.push(Vertex::new(corners[0].x, corners[0].y, color));
    out.push(Vertex::new(corners[1].x, corners[1].y, color));
    out.push(Vertex::new(corners[3].x, corners[3].y, color));

    out.push(Vertex::new(corners[3].x, corners[3].y, color));
    out.push(Vertex::new(corners[1].x, corners[1].y, color));
    out.push(Vertex::new(corners[2].x, corners[2].y, color));
}

/// Append a filled circle as a triangle fan
pub fn push_circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_emits_two_triangles() {
        let mut v = Vec::new();
        push_rect(&mut v, &Rect::new(0.0, 0.0, 10.0, 20.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        // corners span the rect
        let xs: Vec<f32> = v.iter().map(|p| p.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|p| p.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 0.0 || x == 10.0));
        assert!(ys.iter().all(|&y| y == 0.0 || y == 20.0));
    }

    #[test]
    fn unrotated_rect_matches_plain_rect_corners() {
        let rect = Rect::new(5.0, 7.0, 10.0, 4.0);
        let mut plain = Vec::new();
        let mut rotated = Vec::new();
        push_rect(&mut plain, &rect, [1.0; 4]);
        push_rotated_rect(&mut rotated, &rect, 0.0, [1.0; 4]);

        for (a, b) in plain.iter().zip(rotated.iter()) {
            assert!((a.position[0] - b.position[0]).abs() < 1e-4);
            assert!((a.position[1] - b.position[1]).abs() < 1e-4);
        }
    }

    #[test]
    fn circle_vertex_count() {
        let mut v = Vec::new();
        push_circle(&mut v, Vec2::ZERO, 5.0, [1.0; 4], 16);
        assert_eq!(v.len(), 16 * 3);
    }
}
