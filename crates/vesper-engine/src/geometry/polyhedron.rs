//! Platonic solids by linear face subdivision, and the crystal built on top
//! of the octahedron.
//!
//! Each base triangle is split into `(detail + 1)^2` triangles and every
//! resulting vertex is pushed out to the unit sphere. Output is not indexed.

use glam::Vec3;

use super::Geometry;

const PHI: f32 = 1.618_034;
const INV_PHI: f32 = 1.0 / PHI;

const TETRAHEDRON_VERTICES: [[f32; 3]; 4] =
    [[1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, -1.0], [1.0, -1.0, -1.0]];
const TETRAHEDRON_FACES: [[usize; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];

const OCTAHEDRON_VERTICES: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];
const OCTAHEDRON_FACES: [[usize; 3]; 8] = [
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
    [1, 4, 2],
];

const ICOSAHEDRON_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

const DODECAHEDRON_VERTICES: [[f32; 3]; 20] = [
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [0.0, -INV_PHI, -PHI],
    [0.0, -INV_PHI, PHI],
    [0.0, INV_PHI, -PHI],
    [0.0, INV_PHI, PHI],
    [-INV_PHI, -PHI, 0.0],
    [-INV_PHI, PHI, 0.0],
    [INV_PHI, -PHI, 0.0],
    [INV_PHI, PHI, 0.0],
    [-PHI, 0.0, -INV_PHI],
    [PHI, 0.0, -INV_PHI],
    [-PHI, 0.0, INV_PHI],
    [PHI, 0.0, INV_PHI],
];
/// Twelve pentagons, three triangles each.
const DODECAHEDRON_FACES: [[usize; 3]; 36] = [
    [3, 11, 7],
    [3, 7, 15],
    [3, 15, 13],
    [7, 19, 17],
    [7, 17, 6],
    [7, 6, 15],
    [17, 4, 8],
    [17, 8, 10],
    [17, 10, 6],
    [8, 0, 16],
    [8, 16, 2],
    [8, 2, 10],
    [0, 12, 1],
    [0, 1, 18],
    [0, 18, 16],
    [6, 10, 2],
    [6, 2, 13],
    [6, 13, 15],
    [2, 16, 18],
    [2, 18, 3],
    [2, 3, 13],
    [18, 1, 9],
    [18, 9, 11],
    [18, 11, 3],
    [4, 14, 12],
    [4, 12, 0],
    [4, 0, 8],
    [11, 9, 5],
    [11, 5, 19],
    [11, 19, 7],
    [19, 5, 14],
    [19, 14, 4],
    [19, 4, 17],
    [1, 12, 14],
    [1, 14, 5],
    [1, 5, 9],
];

pub(crate) fn tetrahedron(detail: u32) -> Geometry {
    polyhedron(&TETRAHEDRON_VERTICES, &TETRAHEDRON_FACES, detail)
}

pub(crate) fn octahedron(detail: u32) -> Geometry {
    polyhedron(&OCTAHEDRON_VERTICES, &OCTAHEDRON_FACES, detail)
}

pub(crate) fn icosahedron(detail: u32) -> Geometry {
    polyhedron(&ICOSAHEDRON_VERTICES, &ICOSAHEDRON_FACES, detail)
}

pub(crate) fn dodecahedron(detail: u32) -> Geometry {
    polyhedron(&DODECAHEDRON_VERTICES, &DODECAHEDRON_FACES, detail)
}

/// Octahedron stretched 1.8x along Y, with flat normals for the facets.
pub(crate) fn crystal(detail: u32) -> Geometry {
    let mut geo = octahedron(detail);
    for p in &mut geo.positions {
        p[1] *= 1.8;
    }
    geo.compute_vertex_normals();
    geo
}

fn polyhedron(vertices: &[[f32; 3]], faces: &[[usize; 3]], detail: u32) -> Geometry {
    let mut geo = Geometry::default();
    for face in faces {
        let [a, b, c] = face.map(|i| Vec3::from(vertices[i]));
        subdivide_face(&mut geo, a, b, c, detail);
    }

    if detail == 0 {
        geo.compute_vertex_normals();
    }
    geo
}

fn subdivide_face(geo: &mut Geometry, a: Vec3, b: Vec3, c: Vec3, detail: u32) {
    let cols = detail as usize + 1;

    // grid[i][j]: row i runs from the a-c edge to the b-c edge.
    let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
    for i in 0..=cols {
        let t = i as f32 / cols as f32;
        let aj = a.lerp(c, t);
        let bj = b.lerp(c, t);
        let rows = cols - i;
        let row = (0..=rows)
            .map(|j| if rows == 0 { aj } else { aj.lerp(bj, j as f32 / rows as f32) })
            .collect();
        grid.push(row);
    }

    let mut push = |p: Vec3| {
        let p = p.normalize();
        geo.positions.push(p.to_array());
        geo.normals.push(p.to_array());
    };

    for i in 0..cols {
        for j in 0..2 * (cols - i) - 1 {
            let k = j / 2;
            if j % 2 == 0 {
                push(grid[i][k + 1]);
                push(grid[i + 1][k]);
                push(grid[i][k]);
            } else {
                push(grid[i][k + 1]);
                push(grid[i + 1][k + 1]);
                push(grid[i + 1][k]);
            }
        }
    }
}
