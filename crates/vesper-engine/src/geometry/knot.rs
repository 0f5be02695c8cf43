//! Torus and the (p, q) torus-knot family.

use std::f32::consts::TAU;

use glam::Vec3;

use super::Geometry;

pub(crate) fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Geometry {
    let mut geo = Geometry::indexed();

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let ring = radius + tube * v.cos();
            let p = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            geo.push_vertex(p, (p - center).normalize());
        }
    }

    let stride = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            geo.push_triangle(a, b, d);
            geo.push_triangle(b, c, d);
        }
    }
    geo
}

/// Point on the (p, q) knot curve at parameter `u`.
fn knot_point(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let qu_over_p = q as f32 / p as f32 * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

/// Tube of radius `tube` swept along the (p, q) torus knot. The frame at each
/// sample comes from a forward difference and the sum of neighboring points.
pub(crate) fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> Geometry {
    let mut geo = Geometry::indexed();

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * TAU;
        let p1 = knot_point(u, p, q, radius);
        let p2 = knot_point(u + 0.01, p, q, radius);

        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n);
        let n = b.cross(t).normalize();
        let b = b.normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let vertex = p1 + n * cx + b * cy;
            geo.push_vertex(vertex, (vertex - p1).normalize());
        }
    }

    let stride = radial_segments + 1;
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            geo.push_triangle(a, b, d);
            geo.push_triangle(b, c, d);
        }
    }
    geo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_support::{assert_unit_normals, inward_faces};

    #[test]
    fn torus_vertices_sit_on_the_tube() {
        let geo = torus(1.0, 0.4, 8, 16);
        assert_eq!(geo.vertex_count(), 9 * 17);
        assert_eq!(geo.triangle_count(), 8 * 16 * 2);
        for p in &geo.positions {
            let p = Vec3::from(*p);
            let ring = Vec3::new(p.x, p.y, 0.0).normalize();
            assert!(((p - ring).length() - 0.4).abs() < 1e-4);
        }
        assert_unit_normals(&geo);
    }

    #[test]
    fn torus_winding_follows_normals() {
        let geo = torus(1.0, 0.4, 12, 24);
        let outward = |c: Vec3| c - Vec3::new(c.x, c.y, 0.0).normalize();
        assert_eq!(inward_faces(&geo, outward), 0);
    }

    #[test]
    fn knot_is_a_closed_tube() {
        for (p, q) in [(2, 3), (2, 5), (3, 7)] {
            let geo = torus_knot(1.0, 0.3, 64, 8, p, q);
            assert_eq!(geo.vertex_count(), 65 * 9);
            assert_unit_normals(&geo);

            // The curve returns to its start after p turns.
            let first = Vec3::from(geo.positions[0]);
            let last = Vec3::from(geo.positions[64 * 9]);
            assert!(first.abs_diff_eq(last, 1e-3), "({p}, {q})");
        }
    }

    #[test]
    fn knot_tube_radius_is_constant() {
        let geo = torus_knot(1.0, 0.25, 32, 6, 2, 5);
        for (i, p) in geo.positions.iter().enumerate() {
            let n = Vec3::from(geo.normals[i]);
            let axis = Vec3::from(*p) - n * 0.25;
            let ring = i / 7;
            let u = ring as f32 / 32.0 * 2.0 * TAU;
            assert!(axis.abs_diff_eq(knot_point(u, 2, 5, 1.0), 1e-4));
        }
    }
}
