use std::f32::consts::TAU;

use glam::Vec3;

use super::Geometry;

const HALF_WIDTH: f32 = 0.35;

/// Möbius strip with a half twist around a unit circle.
///
/// Vertices along `u = 0` and `u = 2π` coincide with the width reversed, but
/// are kept separate, so the strip has a seam where the computed normals
/// flip sides.
pub(crate) fn mobius(density: u32) -> Geometry {
    let segments = density.max(30);
    let strips = (density / 3).max(8);
    let mut geo = Geometry::indexed();

    for i in 0..=segments {
        let u = i as f32 / segments as f32 * TAU;
        let (half_sin, half_cos) = (u / 2.0).sin_cos();
        for j in 0..=strips {
            let v = j as f32 / strips as f32 * 2.0 - 1.0;
            let r = 1.0 + v * HALF_WIDTH * half_cos;
            let p = Vec3::new(r * u.cos(), v * HALF_WIDTH * half_sin, r * u.sin());
            geo.push_vertex(p, Vec3::ZERO);
        }
    }

    let stride = strips + 1;
    for i in 0..segments {
        for j in 0..strips {
            let a = i * stride + j;
            let b = a + 1;
            let c = (i + 1) * stride + j;
            let d = c + 1;
            geo.push_triangle(a, c, b);
            geo.push_triangle(b, c, d);
        }
    }

    geo.compute_vertex_normals();
    geo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_support::assert_unit_normals;

    #[test]
    fn segment_and_strip_minimums() {
        let geo = mobius(16);
        assert_eq!(geo.vertex_count(), 31 * 9);
        assert_eq!(geo.triangle_count(), 30 * 8 * 2);

        let geo = mobius(120);
        assert_eq!(geo.vertex_count(), 121 * 41);
    }

    #[test]
    fn centerline_is_the_unit_circle() {
        let geo = mobius(60);
        let strips = 20usize;
        for i in 0..=60usize {
            let mid = Vec3::from(geo.positions[i * (strips + 1) + strips / 2]);
            assert!((mid.length() - 1.0).abs() < 1e-5);
            assert!(mid.y.abs() < 1e-6);
        }
        assert_unit_normals(&geo);
    }

    #[test]
    fn seam_joins_with_reversed_width_and_flipped_normal() {
        let geo = mobius(100);
        let segments = 100usize;
        let strips = 33usize;
        let stride = strips + 1;

        for j in 0..=strips {
            let start = j;
            let end = segments * stride + (strips - j);
            let p0 = Vec3::from(geo.positions[start]);
            let p1 = Vec3::from(geo.positions[end]);
            assert!(p0.abs_diff_eq(p1, 1e-5), "seam vertex {j}");

            // One pass around lands on the other side of the surface.
            let n0 = Vec3::from(geo.normals[start]);
            let n1 = Vec3::from(geo.normals[end]);
            assert!(n0.dot(n1) < -0.9, "seam normal {j}: {}", n0.dot(n1));
        }
    }

    #[test]
    fn normals_vary_smoothly_away_from_the_seam() {
        let geo = mobius(60);
        let stride = 21;
        for i in 1..59 {
            let here = Vec3::from(geo.normals[i * stride + 10]);
            let next = Vec3::from(geo.normals[(i + 1) * stride + 10]);
            assert!(here.dot(next) > 0.9, "segment {i}");
        }
    }
}
