//! Keyword tables for the prompt parser.
//!
//! Order matters only among keys of equal length: the earlier entry wins.

use crate::color::Rgb;
use crate::shape::ShapeId;
use crate::style::StyleId;

pub(crate) static SHAPE_KEYWORDS: &[(&str, ShapeId)] = &[
    ("torus knot", ShapeId::TorusKnot),
    ("star knot", ShapeId::StarKnot),
    ("mobius strip", ShapeId::Mobius),
    ("torusknot", ShapeId::TorusKnot),
    ("sphere", ShapeId::Sphere),
    ("globe", ShapeId::Sphere),
    ("ball", ShapeId::Sphere),
    ("orb", ShapeId::Sphere),
    ("torus", ShapeId::Torus),
    ("donut", ShapeId::Torus),
    ("doughnut", ShapeId::Torus),
    ("ring", ShapeId::Torus),
    ("knot", ShapeId::TorusKnot),
    ("twisted", ShapeId::TorusKnot),
    ("cube", ShapeId::Cube),
    ("box", ShapeId::Cube),
    ("square", ShapeId::Cube),
    ("block", ShapeId::Cube),
    ("cone", ShapeId::Cone),
    ("pyramid", ShapeId::Cone),
    ("triangle", ShapeId::Cone),
    ("cylinder", ShapeId::Cylinder),
    ("tube", ShapeId::Cylinder),
    ("pipe", ShapeId::Cylinder),
    ("pillar", ShapeId::Cylinder),
    ("octahedron", ShapeId::Octahedron),
    ("diamond", ShapeId::Octahedron),
    ("icosahedron", ShapeId::Icosahedron),
    ("ico", ShapeId::Icosahedron),
    ("geodesic", ShapeId::Icosahedron),
    ("dodecahedron", ShapeId::Dodecahedron),
    ("dodeca", ShapeId::Dodecahedron),
    ("pentagon", ShapeId::Dodecahedron),
    ("tetrahedron", ShapeId::Tetrahedron),
    ("capsule", ShapeId::Capsule),
    ("pill", ShapeId::Capsule),
    ("cinquefoil", ShapeId::Cinquefoil),
    ("starknot", ShapeId::StarKnot),
    ("crystal", ShapeId::Crystal),
    ("gem", ShapeId::Crystal),
    ("prism", ShapeId::Crystal),
    ("spring", ShapeId::Spring),
    ("helix", ShapeId::Spring),
    ("coil", ShapeId::Spring),
    ("spiral", ShapeId::Spring),
    ("mobius", ShapeId::Mobius),
];

pub(crate) static STYLE_KEYWORDS: &[(&str, StyleId)] = &[
    ("mesh line", StyleId::MeshLines),
    ("mesh lines", StyleId::MeshLines),
    ("x-ray", StyleId::Xray),
    ("sci-fi", StyleId::Futuristic),
    ("oil slick", StyleId::Iridescent),
    ("thin film", StyleId::Iridescent),
    ("topo map", StyleId::Topographic),
    ("particle", StyleId::Particles),
    ("particles", StyleId::Particles),
    ("dot", StyleId::Particles),
    ("dots", StyleId::Particles),
    ("points", StyleId::Particles),
    ("cloud", StyleId::Particles),
    ("holographic", StyleId::Holographic),
    ("holo", StyleId::Holographic),
    ("rainbow", StyleId::Holographic),
    ("gradient", StyleId::Gradient),
    ("pastel", StyleId::Gradient),
    ("dreamy", StyleId::Gradient),
    ("glass", StyleId::Glass),
    ("liquid", StyleId::Glass),
    ("transparent", StyleId::Glass),
    ("water", StyleId::Glass),
    ("ice", StyleId::Glass),
    ("jelly", StyleId::Glass),
    ("gel", StyleId::Glass),
    ("wireframe", StyleId::MeshLines),
    ("wire", StyleId::MeshLines),
    ("outline", StyleId::MeshLines),
    ("skeleton", StyleId::MeshLines),
    ("futuristic", StyleId::Futuristic),
    ("chrome", StyleId::Futuristic),
    ("neon", StyleId::Futuristic),
    ("metallic", StyleId::Futuristic),
    ("metal", StyleId::Futuristic),
    ("scifi", StyleId::Futuristic),
    ("cyber", StyleId::Futuristic),
    ("toon", StyleId::Toon),
    ("cartoon", StyleId::Toon),
    ("cel", StyleId::Toon),
    ("comic", StyleId::Toon),
    ("plasma", StyleId::Plasma),
    ("psychedelic", StyleId::Plasma),
    ("xray", StyleId::Xray),
    ("blueprint", StyleId::Xray),
    ("scan", StyleId::Xray),
    ("fresnel", StyleId::Fresnel),
    ("rim", StyleId::Fresnel),
    ("edge", StyleId::Fresnel),
    ("voronoi", StyleId::Voronoi),
    ("cell", StyleId::Voronoi),
    ("cellular", StyleId::Voronoi),
    ("marble", StyleId::Marble),
    ("stone", StyleId::Marble),
    ("veins", StyleId::Marble),
    ("aurora", StyleId::Aurora),
    ("northern", StyleId::Aurora),
    ("borealis", StyleId::Aurora),
    ("lava", StyleId::Lava),
    ("magma", StyleId::Lava),
    ("molten", StyleId::Lava),
    ("volcanic", StyleId::Lava),
    ("electric", StyleId::Electric),
    ("lightning", StyleId::Electric),
    ("bolt", StyleId::Electric),
    ("spark", StyleId::Electric),
    ("chromatic", StyleId::Chromatic),
    ("prismatic", StyleId::Chromatic),
    ("dispersion", StyleId::Chromatic),
    ("topographic", StyleId::Topographic),
    ("contour", StyleId::Topographic),
    ("topo", StyleId::Topographic),
    ("terrain", StyleId::Topographic),
    ("retro", StyleId::Retro),
    ("pixel", StyleId::Retro),
    ("8-bit", StyleId::Retro),
    ("crt", StyleId::Retro),
    ("vintage", StyleId::Retro),
    ("iridescent", StyleId::Iridescent),
    ("opal", StyleId::Iridescent),
    ("shimmer", StyleId::Iridescent),
    ("pearlescent", StyleId::Iridescent),
    ("emission", StyleId::Emission),
    ("pulse", StyleId::Emission),
    ("glow", StyleId::Emission),
    ("pulsing", StyleId::Emission),
    ("heartbeat", StyleId::Emission),
];

pub(crate) static COLOR_KEYWORDS: &[(&str, Rgb)] = &[
    ("dark red", Rgb::from_u32(0x991b1b)),
    ("dark blue", Rgb::from_u32(0x1e3a8a)),
    ("dark green", Rgb::from_u32(0x14532d)),
    ("light blue", Rgb::from_u32(0x93c5fd)),
    ("light green", Rgb::from_u32(0x86efac)),
    ("light pink", Rgb::from_u32(0xfbcfe8)),
    ("hot pink", Rgb::from_u32(0xec4899)),
    ("red", Rgb::from_u32(0xef4444)),
    ("blue", Rgb::from_u32(0x3b82f6)),
    ("green", Rgb::from_u32(0x22c55e)),
    ("yellow", Rgb::from_u32(0xeab308)),
    ("purple", Rgb::from_u32(0xa855f7)),
    ("pink", Rgb::from_u32(0xec4899)),
    ("orange", Rgb::from_u32(0xf97316)),
    ("cyan", Rgb::from_u32(0x06b6d4)),
    ("teal", Rgb::from_u32(0x14b8a6)),
    ("white", Rgb::from_u32(0xffffff)),
    ("black", Rgb::from_u32(0x111111)),
    ("gold", Rgb::from_u32(0xd4a017)),
    ("golden", Rgb::from_u32(0xd4a017)),
    ("silver", Rgb::from_u32(0x94a3b8)),
    ("indigo", Rgb::from_u32(0x6366f1)),
    ("rose", Rgb::from_u32(0xf43f5e)),
    ("emerald", Rgb::from_u32(0x10b981)),
    ("amber", Rgb::from_u32(0xf59e0b)),
    ("violet", Rgb::from_u32(0x8b5cf6)),
    ("lime", Rgb::from_u32(0x84cc16)),
    ("coral", Rgb::from_u32(0xf97171)),
    ("magenta", Rgb::from_u32(0xd946ef)),
    ("turquoise", Rgb::from_u32(0x2dd4bf)),
    ("navy", Rgb::from_u32(0x1e3a8a)),
    ("peach", Rgb::from_u32(0xfdba74)),
    ("lavender", Rgb::from_u32(0xc4b5fd)),
    ("mint", Rgb::from_u32(0x6ee7b7)),
    ("salmon", Rgb::from_u32(0xfca5a5)),
    ("cream", Rgb::from_u32(0xfef3c7)),
    ("burgundy", Rgb::from_u32(0x881337)),
];
