use std::fmt;
use std::str::FromStr;

use crate::error::UnknownNameError;

/// The closed catalog of base shapes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ShapeId {
    #[default]
    Sphere,
    Torus,
    TorusKnot,
    Cube,
    Cone,
    Cylinder,
    Octahedron,
    Icosahedron,
    Dodecahedron,
    Tetrahedron,
    Capsule,
    Cinquefoil,
    StarKnot,
    Crystal,
    Spring,
    Mobius,
}

impl ShapeId {
    /// Every shape, in catalog order.
    pub const ALL: [ShapeId; 16] = [
        ShapeId::Sphere,
        ShapeId::Torus,
        ShapeId::TorusKnot,
        ShapeId::Cube,
        ShapeId::Cone,
        ShapeId::Cylinder,
        ShapeId::Octahedron,
        ShapeId::Icosahedron,
        ShapeId::Dodecahedron,
        ShapeId::Tetrahedron,
        ShapeId::Capsule,
        ShapeId::Cinquefoil,
        ShapeId::StarKnot,
        ShapeId::Crystal,
        ShapeId::Spring,
        ShapeId::Mobius,
    ];

    /// Stable identifier used in commands and presets.
    pub const fn name(self) -> &'static str {
        match self {
            ShapeId::Sphere => "sphere",
            ShapeId::Torus => "torus",
            ShapeId::TorusKnot => "torusknot",
            ShapeId::Cube => "cube",
            ShapeId::Cone => "cone",
            ShapeId::Cylinder => "cylinder",
            ShapeId::Octahedron => "octahedron",
            ShapeId::Icosahedron => "icosahedron",
            ShapeId::Dodecahedron => "dodecahedron",
            ShapeId::Tetrahedron => "tetrahedron",
            ShapeId::Capsule => "capsule",
            ShapeId::Cinquefoil => "cinquefoil",
            ShapeId::StarKnot => "starknot",
            ShapeId::Crystal => "crystal",
            ShapeId::Spring => "spring",
            ShapeId::Mobius => "mobius",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ShapeId::Sphere => "Sphere",
            ShapeId::Torus => "Torus",
            ShapeId::TorusKnot => "Torus Knot",
            ShapeId::Cube => "Cube",
            ShapeId::Cone => "Cone",
            ShapeId::Cylinder => "Cylinder",
            ShapeId::Octahedron => "Octahedron",
            ShapeId::Icosahedron => "Icosahedron",
            ShapeId::Dodecahedron => "Dodecahedron",
            ShapeId::Tetrahedron => "Tetrahedron",
            ShapeId::Capsule => "Capsule",
            ShapeId::Cinquefoil => "Cinquefoil",
            ShapeId::StarKnot => "Star Knot",
            ShapeId::Crystal => "Crystal",
            ShapeId::Spring => "Spring",
            ShapeId::Mobius => "Möbius",
        }
    }

    /// Resolves a name, substituting the default sphere for anything unknown.
    ///
    /// Shapes never fail to resolve; compare [`crate::StyleId::from_name`].
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// The shape after `self` in catalog order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// The shape before `self` in catalog order, wrapping around.
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeId {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|shape| shape.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownNameError::new("shape", s))
    }
}
