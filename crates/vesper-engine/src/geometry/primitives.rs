//! UV sphere, subdivided box and capped cylinder/cone.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::Geometry;

/// UV sphere; the pole rows contribute one triangle per quad.
pub(crate) fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Geometry {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut geo = Geometry::indexed();

    let mut grid = Vec::with_capacity(hs as usize + 1);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * PI;
        let row: Vec<u32> = (0..=ws)
            .map(|ix| {
                let phi = ix as f32 / ws as f32 * TAU;
                let p = Vec3::new(
                    -radius * phi.cos() * theta.sin(),
                    radius * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                );
                geo.push_vertex(p, p.normalize_or_zero())
            })
            .collect();
        grid.push(row);
    }

    for iy in 0..hs as usize {
        for ix in 0..ws as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            if iy != 0 {
                geo.push_triangle(a, b, d);
            }
            if iy != hs as usize - 1 {
                geo.push_triangle(b, c, d);
            }
        }
    }
    geo
}

/// Axis permutation for one face of the box.
#[derive(Copy, Clone)]
struct Face {
    u: usize,
    v: usize,
    w: usize,
    u_dir: f32,
    v_dir: f32,
    /// Signed extent along `w`; the sign picks the face.
    depth: f32,
}

/// Cube of edge `size` with `segments` subdivisions per edge.
pub(crate) fn cuboid(size: f32, segments: u32) -> Geometry {
    const X: usize = 0;
    const Y: usize = 1;
    const Z: usize = 2;

    let faces = [
        Face { u: Z, v: Y, w: X, u_dir: -1.0, v_dir: -1.0, depth: size },
        Face { u: Z, v: Y, w: X, u_dir: 1.0, v_dir: -1.0, depth: -size },
        Face { u: X, v: Z, w: Y, u_dir: 1.0, v_dir: 1.0, depth: size },
        Face { u: X, v: Z, w: Y, u_dir: 1.0, v_dir: -1.0, depth: -size },
        Face { u: X, v: Y, w: Z, u_dir: 1.0, v_dir: -1.0, depth: size },
        Face { u: X, v: Y, w: Z, u_dir: -1.0, v_dir: -1.0, depth: -size },
    ];

    let mut geo = Geometry::indexed();
    for face in faces {
        build_plane(&mut geo, face, size, segments);
    }
    geo
}

fn build_plane(geo: &mut Geometry, face: Face, size: f32, segments: u32) {
    let step = size / segments as f32;
    let half = size / 2.0;
    let stride = segments + 1;
    let base = geo.vertex_count() as u32;

    let mut normal = Vec3::ZERO;
    normal[face.w] = face.depth.signum();

    for iy in 0..=segments {
        let y = iy as f32 * step - half;
        for ix in 0..=segments {
            let x = ix as f32 * step - half;
            let mut p = Vec3::ZERO;
            p[face.u] = x * face.u_dir;
            p[face.v] = y * face.v_dir;
            p[face.w] = face.depth / 2.0;
            geo.push_vertex(p, normal);
        }
    }

    for iy in 0..segments {
        for ix in 0..segments {
            let a = base + ix + stride * iy;
            let b = base + ix + stride * (iy + 1);
            let c = base + ix + 1 + stride * (iy + 1);
            let d = base + ix + 1 + stride * iy;
            geo.push_triangle(a, b, d);
            geo.push_triangle(b, c, d);
        }
    }
}

/// Capped cylinder along Y; a zero radius collapses that end to an apex and
/// omits its cap.
pub(crate) fn cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
) -> Geometry {
    let half_height = height / 2.0;
    let slope = (radius_bottom - radius_top) / height;
    let mut geo = Geometry::indexed();

    let mut rows = Vec::with_capacity(height_segments as usize + 1);
    for y in 0..=height_segments {
        let v = y as f32 / height_segments as f32;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        let row: Vec<u32> = (0..=radial_segments)
            .map(|x| {
                let theta = x as f32 / radial_segments as f32 * TAU;
                let (sin, cos) = theta.sin_cos();
                geo.push_vertex(
                    Vec3::new(radius * sin, -v * height + half_height, radius * cos),
                    Vec3::new(sin, slope, cos).normalize(),
                )
            })
            .collect();
        rows.push(row);
    }

    let last_row = height_segments as usize - 1;
    for x in 0..radial_segments as usize {
        for y in 0..height_segments as usize {
            let a = rows[y][x];
            let b = rows[y + 1][x];
            let c = rows[y + 1][x + 1];
            let d = rows[y][x + 1];
            if radius_top > 0.0 || y != 0 {
                geo.push_triangle(a, b, d);
            }
            if radius_bottom > 0.0 || y != last_row {
                geo.push_triangle(b, c, d);
            }
        }
    }

    if radius_top > 0.0 {
        cap(&mut geo, radius_top, half_height, radial_segments, true);
    }
    if radius_bottom > 0.0 {
        cap(&mut geo, radius_bottom, half_height, radial_segments, false);
    }
    geo
}

fn cap(geo: &mut Geometry, radius: f32, half_height: f32, segments: u32, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::new(0.0, sign, 0.0);
    let y = half_height * sign;

    // One center vertex per segment.
    let centers = geo.vertex_count() as u32;
    for _ in 0..segments {
        geo.push_vertex(Vec3::new(0.0, y, 0.0), normal);
    }

    let rim = geo.vertex_count() as u32;
    for x in 0..=segments {
        let theta = x as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        geo.push_vertex(Vec3::new(radius * sin, y, radius * cos), normal);
    }

    for x in 0..segments {
        let c = centers + x;
        let i = rim + x;
        if top {
            geo.push_triangle(i, i + 1, c);
        } else {
            geo.push_triangle(i + 1, i, c);
        }
    }
}
