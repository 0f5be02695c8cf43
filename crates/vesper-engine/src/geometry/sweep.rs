//! Swept surfaces: the capsule as a lathe around Y and the spring as a tube
//! along a helix.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Quat, Vec2, Vec3};

use super::Geometry;

const HELIX_RADIUS: f32 = 0.7;
const HELIX_HEIGHT: f32 = 2.2;
const HELIX_TURNS: f32 = 3.0;

/// Capsule of `radius` whose straight middle section is `length` tall.
pub(crate) fn capsule(radius: f32, length: f32, cap_segments: u32, radial_segments: u32) -> Geometry {
    let half = length / 2.0;
    let arc_steps = cap_segments * 2;
    let mut profile = Vec::with_capacity(arc_steps as usize * 2 + 2);

    // Bottom quarter arc from the south pole to the equator.
    for k in 0..=arc_steps {
        let angle = 1.5 * PI + k as f32 / arc_steps as f32 * FRAC_PI_2;
        profile.push(Vec2::new(radius * angle.cos(), -half + radius * angle.sin()));
    }
    // Top quarter arc; its first point closes the straight section.
    for k in 0..=arc_steps {
        let angle = k as f32 / arc_steps as f32 * FRAC_PI_2;
        profile.push(Vec2::new(radius * angle.cos(), half + radius * angle.sin()));
    }

    lathe(&profile, radial_segments)
}

/// Revolves `profile` (x = distance from the axis, y = height) around Y.
fn lathe(profile: &[Vec2], segments: u32) -> Geometry {
    let normals = profile_normals(profile);
    let n = profile.len() as u32;
    let mut geo = Geometry::indexed();

    for i in 0..=segments {
        let phi = i as f32 / segments as f32 * TAU;
        let (sin, cos) = phi.sin_cos();
        for (p, nm) in profile.iter().zip(&normals) {
            geo.push_vertex(
                Vec3::new(p.x * sin, p.y, p.x * cos),
                Vec3::new(nm.x * sin, nm.y, nm.x * cos),
            );
        }
    }

    for i in 0..segments {
        for j in 0..n - 1 {
            let base = j + i * n;
            let (a, b, c, d) = (base, base + n, base + n + 1, base + 1);
            geo.push_triangle(a, b, d);
            geo.push_triangle(c, d, b);
        }
    }
    geo
}

/// Per-point normals of a 2D profile: the average of the adjacent segment
/// normals, or the single adjacent one at the ends.
fn profile_normals(profile: &[Vec2]) -> Vec<Vec2> {
    let segment = |j: usize| {
        let d = profile[j + 1] - profile[j];
        Vec2::new(d.y, -d.x)
    };

    let last = profile.len() - 1;
    (0..profile.len())
        .map(|j| {
            let n = match j {
                0 => segment(0),
                j if j == last => segment(j - 1),
                j => segment(j) + segment(j - 1),
            };
            n.normalize_or_zero()
        })
        .collect()
}

fn helix_point(t: f32) -> Vec3 {
    let a = t * TAU * HELIX_TURNS;
    Vec3::new(a.cos() * HELIX_RADIUS, (t - 0.5) * HELIX_HEIGHT, a.sin() * HELIX_RADIUS)
}

fn helix_tangent(t: f32) -> Vec3 {
    let w = TAU * HELIX_TURNS;
    let a = t * w;
    Vec3::new(-a.sin() * HELIX_RADIUS * w, HELIX_HEIGHT, a.cos() * HELIX_RADIUS * w).normalize()
}

/// Tube of radius `tube` around the three-turn helix.
pub(crate) fn spring(tube: f32, tubular_segments: u32, radial_segments: u32) -> Geometry {
    let frames = transport_frames(tubular_segments, helix_tangent);
    let mut geo = Geometry::indexed();

    for (i, (normal, binormal)) in frames.iter().enumerate() {
        let center = helix_point(i as f32 / tubular_segments as f32);
        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let n = (*normal * -v.cos() + *binormal * v.sin()).normalize();
            geo.push_vertex(center + n * tube, n);
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

/// Normal/binormal pairs at `segments + 1` samples, carried along the curve
/// by rotating each frame through the angle between consecutive tangents.
fn transport_frames(segments: u32, tangent: impl Fn(f32) -> Vec3) -> Vec<(Vec3, Vec3)> {
    let tangents: Vec<Vec3> = (0..=segments)
        .map(|i| tangent(i as f32 / segments as f32))
        .collect();

    // Start from the axis least aligned with the first tangent.
    let t0 = tangents[0];
    let abs = t0.abs();
    let seed = if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::X
    } else if abs.y <= abs.z {
        Vec3::Y
    } else {
        Vec3::Z
    };
    let side = t0.cross(seed).normalize();
    let mut normal = t0.cross(side);
    let mut frames = Vec::with_capacity(tangents.len());
    frames.push((normal, t0.cross(normal)));

    for pair in tangents.windows(2) {
        let axis = pair[0].cross(pair[1]);
        if axis.length() > f32::EPSILON {
            let theta = pair[0].dot(pair[1]).clamp(-1.0, 1.0).acos();
            normal = Quat::from_axis_angle(axis.normalize(), theta) * normal;
        }
        frames.push((normal, pair[1].cross(normal)));
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_support::{assert_unit_normals, inward_faces};

    // ── capsule ──────────────────────────────────────────────────────────

    #[test]
    fn capsule_profile_spans_both_caps() {
        let geo = capsule(0.7, 1.2, 8, 12);
        let ys: Vec<f32> = geo.positions.iter().map(|p| p[1]).collect();
        let top = ys.iter().copied().fold(f32::MIN, f32::max);
        let bottom = ys.iter().copied().fold(f32::MAX, f32::min);
        assert!((top - 1.3).abs() < 1e-5);
        assert!((bottom + 1.3).abs() < 1e-5);

        // 4 * cap + 2 profile points, revolved into radial + 1 columns.
        assert_eq!(geo.vertex_count(), (4 * 8 + 2) * 13);
        assert_unit_normals(&geo);
        assert_eq!(inward_faces(&geo, |c| c), 0);
    }

    #[test]
    fn straight_section_is_a_single_band() {
        let geo = capsule(0.7, 1.2, 4, 16);
        for p in &geo.positions {
            assert!(p[1].abs() >= 0.6 - 1e-4, "vertex inside the straight section");
            assert!(Vec2::new(p[0], p[2]).length() <= 0.7 + 1e-5);
        }
    }

    #[test]
    fn profile_normals_point_away_from_the_axis() {
        let profile = [Vec2::new(0.0, -1.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let normals = profile_normals(&profile);
        assert!(normals[0].y < 0.0);
        assert!(normals[1].abs_diff_eq(Vec2::X, 1e-6));
        assert!(normals[2].y > 0.0);
    }

    // ── spring ───────────────────────────────────────────────────────────

    #[test]
    fn spring_rings_surround_the_helix() {
        let tubular = 64;
        let radial = 8;
        let geo = spring(0.15, tubular, radial);
        assert_eq!(geo.vertex_count(), (tubular as usize + 1) * (radial as usize + 1));
        assert_unit_normals(&geo);

        for (k, p) in geo.positions.iter().enumerate() {
            let ring = k / (radial as usize + 1);
            let center = helix_point(ring as f32 / tubular as f32);
            let d = (Vec3::from(*p) - center).length();
            assert!((d - 0.15).abs() < 1e-4, "vertex {k} is {d} from the axis");
        }
    }

    #[test]
    fn transported_frames_stay_orthonormal() {
        let frames = transport_frames(90, helix_tangent);
        for (i, (n, b)) in frames.iter().enumerate() {
            let t = helix_tangent(i as f32 / 90.0);
            assert!(n.dot(t).abs() < 1e-3, "frame {i}");
            assert!(b.dot(t).abs() < 1e-3, "frame {i}");
            assert!((n.length() - 1.0).abs() < 1e-3, "frame {i}");
        }
    }

    #[test]
    fn spring_winding_follows_normals() {
        let geo = spring(0.15, 96, 12);
        let faces: Vec<_> = geo.triangles().collect();
        let mismatched = faces
            .iter()
            .filter(|&&[a, b, c]| {
                let p = |i: u32| Vec3::from(geo.positions[i as usize]);
                let n = |i: u32| Vec3::from(geo.normals[i as usize]);
                let face = (p(b) - p(a)).cross(p(c) - p(a));
                face.dot(n(a) + n(b) + n(c)) < 0.0
            })
            .count();
        assert_eq!(mismatched, 0);
    }
}
