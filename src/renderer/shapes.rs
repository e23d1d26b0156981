//! Shape generation for 2D primitives
//!
//! Coordinates are game units with y pointing down. Rotation angles are
//! radians, counter-clockwise as seen on screen.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Rotate a screen-space offset counter-clockwise (y down)
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}

fn quad(corners: [Vec2; 4], colors: [[f32; 4]; 4]) -> [Vertex; 6] {
    let v = |i: usize| Vertex::new(corners[i].x, corners[i].y, colors[i]);
    // Two triangles: 0-1-2, 2-1-3 (corners are tl, tr, bl, br)
    [v(0), v(1), v(2), v(2), v(1), v(3)]
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(x, y, w, h, color, color)
}

/// Rectangle with a vertical gradient from `top` to `bottom`
pub fn gradient_rect(x: f32, y: f32, w: f32, h: f32, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let corners = [
        Vec2::new(x, y),
        Vec2::new(x + w, y),
        Vec2::new(x, y + h),
        Vec2::new(x + w, y + h),
    ];
    quad(corners, [top, top, bottom, bottom]).to_vec()
}

/// Rectangle of `size` centred at `pivot + rotate(offset)`, rotated by `angle`
pub fn rotated_rect(pivot: Vec2, offset: Vec2, size: Vec2, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(-half.x, half.y),
        Vec2::new(half.x, half.y),
    ]
    .map(|c| pivot + rotate(offset + c, angle));
    quad(corners, [color; 4]).to_vec()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

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

/// Filled ellipse, rotated by `angle` around its centre
pub fn ellipse(center: Vec2, radii: Vec2, angle: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    circle(Vec2::ZERO, 1.0, color, segments)
        .into_iter()
        .map(|v| {
            let p = center + rotate(Vec2::from(v.position) * radii, angle);
            Vertex::new(p.x, p.y, v.color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_is_counter_clockwise_on_screen() {
        // Pointing right, a quarter turn CCW points up (negative y)
        let r = rotate(Vec2::new(1.0, 0.0), PI / 2.0);
        assert!(r.x.abs() < 1e-6);
        assert!((r.y - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rect_covers_bounds() {
        let v = rect(10.0, 20.0, 30.0, 40.0, [1.0; 4]);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_gradient_colors() {
        let top = [1.0, 0.0, 0.0, 1.0];
        let bottom = [0.0, 0.0, 1.0, 1.0];
        let v = gradient_rect(0.0, 0.0, 10.0, 10.0, top, bottom);
        for vert in &v {
            let expected = if vert.position[1] == 0.0 { top } else { bottom };
            assert_eq!(vert.color, expected);
        }
    }

    #[test]
    fn test_unrotated_rect_matches_rect() {
        let v = rotated_rect(Vec2::new(50.0, 50.0), Vec2::ZERO, Vec2::new(20.0, 10.0), 0.0, [1.0; 4]);
        assert_eq!(v, rect(40.0, 45.0, 20.0, 10.0, [1.0; 4]));
    }

    #[test]
    fn test_circle_triangle_count() {
        let v = circle(Vec2::ZERO, 5.0, [1.0; 4], 12);
        assert_eq!(v.len(), 36);
        assert!(v.iter().all(|v| Vec2::from(v.position).length() <= 5.0 + 1e-4));
    }
}
