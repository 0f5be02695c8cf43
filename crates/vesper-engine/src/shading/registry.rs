//! The closed style table.

use vesper_pattern::StyleId;

use super::def::ShaderDef;

macro_rules! wgsl {
    ($($file:literal),+ $(,)?) => {
        concat!($(include_str!(concat!("shaders/", $file)), "\n"),+)
    };
}

const MESH_VERTEX: &str = wgsl!("common.wgsl", "noise.wgsl", "displace.wgsl", "mesh.wgsl");
const POINTS_VERTEX: &str = wgsl!("common.wgsl", "noise.wgsl", "displace.wgsl", "points.wgsl");

macro_rules! fragment {
    ($file:literal $(, $shared:literal)?) => {
        concat!(
            wgsl!("common.wgsl", "color.wgsl" $(, $shared)?),
            include_str!(concat!("shaders/fragments/", $file)),
        )
    };
}

static PARTICLES: ShaderDef =
    ShaderDef::mesh(StyleId::Particles, POINTS_VERTEX, fragment!("particles.wgsl"))
        .points()
        .transparent()
        .no_depth_write()
        .additive();
static HOLOGRAPHIC: ShaderDef =
    ShaderDef::mesh(StyleId::Holographic, MESH_VERTEX, fragment!("holographic.wgsl"))
        .transparent()
        .double_sided();
static GRADIENT: ShaderDef =
    ShaderDef::mesh(StyleId::Gradient, MESH_VERTEX, fragment!("gradient.wgsl"));
static GLASS: ShaderDef = ShaderDef::mesh(StyleId::Glass, MESH_VERTEX, fragment!("glass.wgsl"))
    .transparent()
    .no_depth_write()
    .double_sided();
static MESH_LINES: ShaderDef =
    ShaderDef::mesh(StyleId::MeshLines, MESH_VERTEX, fragment!("mesh_lines.wgsl"))
        .wireframe()
        .transparent()
        .double_sided();
static FUTURISTIC: ShaderDef =
    ShaderDef::mesh(StyleId::Futuristic, MESH_VERTEX, fragment!("futuristic.wgsl")).double_sided();
static TOON: ShaderDef = ShaderDef::mesh(StyleId::Toon, MESH_VERTEX, fragment!("toon.wgsl"));
static PLASMA: ShaderDef =
    ShaderDef::mesh(StyleId::Plasma, MESH_VERTEX, fragment!("plasma.wgsl")).double_sided();
static XRAY: ShaderDef = ShaderDef::mesh(StyleId::Xray, MESH_VERTEX, fragment!("xray.wgsl"))
    .transparent()
    .no_depth_write()
    .additive()
    .double_sided();
static FRESNEL: ShaderDef =
    ShaderDef::mesh(StyleId::Fresnel, MESH_VERTEX, fragment!("fresnel.wgsl"));
static VORONOI: ShaderDef =
    ShaderDef::mesh(StyleId::Voronoi, MESH_VERTEX, fragment!("voronoi.wgsl", "voronoi.wgsl"));
static MARBLE: ShaderDef =
    ShaderDef::mesh(StyleId::Marble, MESH_VERTEX, fragment!("marble.wgsl", "noise.wgsl"));
static AURORA: ShaderDef =
    ShaderDef::mesh(StyleId::Aurora, MESH_VERTEX, fragment!("aurora.wgsl")).double_sided();
static LAVA: ShaderDef =
    ShaderDef::mesh(StyleId::Lava, MESH_VERTEX, fragment!("lava.wgsl", "noise.wgsl"));
static ELECTRIC: ShaderDef =
    ShaderDef::mesh(StyleId::Electric, MESH_VERTEX, fragment!("electric.wgsl", "noise.wgsl"))
        .double_sided();
static CHROMATIC: ShaderDef =
    ShaderDef::mesh(StyleId::Chromatic, MESH_VERTEX, fragment!("chromatic.wgsl")).double_sided();
static TOPOGRAPHIC: ShaderDef =
    ShaderDef::mesh(StyleId::Topographic, MESH_VERTEX, fragment!("topographic.wgsl"));
static RETRO: ShaderDef = ShaderDef::mesh(StyleId::Retro, MESH_VERTEX, fragment!("retro.wgsl"));
static IRIDESCENT: ShaderDef =
    ShaderDef::mesh(StyleId::Iridescent, MESH_VERTEX, fragment!("iridescent.wgsl"))
        .transparent()
        .double_sided();
static EMISSION: ShaderDef =
    ShaderDef::mesh(StyleId::Emission, MESH_VERTEX, fragment!("emission.wgsl")).double_sided();

/// The descriptor for `style`. Every catalog style has one.
pub fn shader_for(style: StyleId) -> &'static ShaderDef {
    match style {
        StyleId::Particles => &PARTICLES,
        StyleId::Holographic => &HOLOGRAPHIC,
        StyleId::Gradient => &GRADIENT,
        StyleId::Glass => &GLASS,
        StyleId::MeshLines => &MESH_LINES,
        StyleId::Futuristic => &FUTURISTIC,
        StyleId::Toon => &TOON,
        StyleId::Plasma => &PLASMA,
        StyleId::Xray => &XRAY,
        StyleId::Fresnel => &FRESNEL,
        StyleId::Voronoi => &VORONOI,
        StyleId::Marble => &MARBLE,
        StyleId::Aurora => &AURORA,
        StyleId::Lava => &LAVA,
        StyleId::Electric => &ELECTRIC,
        StyleId::Chromatic => &CHROMATIC,
        StyleId::Topographic => &TOPOGRAPHIC,
        StyleId::Retro => &RETRO,
        StyleId::Iridescent => &IRIDESCENT,
        StyleId::Emission => &EMISSION,
    }
}

/// Looks a style up by name. Unknown names have no descriptor.
pub fn lookup(name: &str) -> Option<&'static ShaderDef> {
    StyleId::from_name(name).map(shader_for)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::def::{BlendMode, RenderMode, Side};
    use crate::shading::test_support::validate_shader;

    // ── table ────────────────────────────────────────────────────────────

    #[test]
    fn every_style_has_a_descriptor_for_itself() {
        for style in StyleId::ALL {
            let def = shader_for(style);
            assert_eq!(def.style, style);
            assert!(!def.vertex.trim().is_empty());
            assert!(!def.fragment.trim().is_empty());
            assert!(def.vertex.contains("fn vs_main"));
            assert!(def.fragment.contains("fn fs_main"));
        }
    }

    #[test]
    fn lookup_is_stable_and_rejects_unknown_names() {
        let a = lookup("glass").unwrap();
        let b = lookup("Glass").unwrap();
        assert_eq!(a, b);
        assert!(lookup("velvet").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn only_particles_draws_points() {
        for style in StyleId::ALL {
            let def = shader_for(style);
            let expected = if style == StyleId::Particles { RenderMode::Points } else { RenderMode::Mesh };
            assert_eq!(def.mode, expected, "{style}");
        }
        assert_eq!(shader_for(StyleId::Particles).vertex, POINTS_VERTEX);
        assert_eq!(shader_for(StyleId::Toon).vertex, MESH_VERTEX);
    }

    #[test]
    fn translucent_styles_keep_their_flags() {
        let glass = shader_for(StyleId::Glass);
        assert!(glass.transparent && !glass.depth_write);
        assert_eq!(glass.side, Side::Double);
        assert!(glass.split_back_faces());

        let xray = shader_for(StyleId::Xray);
        assert_eq!(xray.blend, BlendMode::Additive);
        assert!(!xray.depth_write);

        let particles = shader_for(StyleId::Particles);
        assert_eq!(particles.blend, BlendMode::Additive);
        assert!(!particles.split_back_faces());

        let lines = shader_for(StyleId::MeshLines);
        assert!(lines.wireframe && lines.transparent && lines.depth_write);
    }

    #[test]
    fn opaque_styles_do_not_blend() {
        for style in [
            StyleId::Toon,
            StyleId::Marble,
            StyleId::Gradient,
            StyleId::Fresnel,
            StyleId::Lava,
            StyleId::Retro,
        ] {
            let def = shader_for(style);
            assert!(!def.blends(), "{style}");
            assert!(def.depth_write, "{style}");
            assert_eq!(def.side, Side::Front, "{style}");
        }
        assert!(!shader_for(StyleId::Plasma).blends());
        assert_eq!(shader_for(StyleId::Plasma).side, Side::Double);
    }

    #[test]
    fn every_style_matches_the_flag_table() {
        use crate::shading::def::BlendMode::{Additive as Add, Normal as Nrm};
        use crate::shading::def::RenderMode::{Mesh, Points};
        use crate::shading::def::Side::{Double, Front};

        // (style, mode, transparent, depth write, blend, side, wireframe)
        let table = [
            (StyleId::Particles, Points, true, false, Add, Front, false),
            (StyleId::Holographic, Mesh, true, true, Nrm, Double, false),
            (StyleId::Gradient, Mesh, false, true, Nrm, Front, false),
            (StyleId::Glass, Mesh, true, false, Nrm, Double, false),
            (StyleId::MeshLines, Mesh, true, true, Nrm, Double, true),
            (StyleId::Futuristic, Mesh, false, true, Nrm, Double, false),
            (StyleId::Toon, Mesh, false, true, Nrm, Front, false),
            (StyleId::Plasma, Mesh, false, true, Nrm, Double, false),
            (StyleId::Xray, Mesh, true, false, Add, Double, false),
            (StyleId::Fresnel, Mesh, false, true, Nrm, Front, false),
            (StyleId::Voronoi, Mesh, false, true, Nrm, Front, false),
            (StyleId::Marble, Mesh, false, true, Nrm, Front, false),
            (StyleId::Aurora, Mesh, false, true, Nrm, Double, false),
            (StyleId::Lava, Mesh, false, true, Nrm, Front, false),
            (StyleId::Electric, Mesh, false, true, Nrm, Double, false),
            (StyleId::Chromatic, Mesh, false, true, Nrm, Double, false),
            (StyleId::Topographic, Mesh, false, true, Nrm, Front, false),
            (StyleId::Retro, Mesh, false, true, Nrm, Front, false),
            (StyleId::Iridescent, Mesh, true, true, Nrm, Double, false),
            (StyleId::Emission, Mesh, false, true, Nrm, Double, false),
        ];
        assert_eq!(table.len(), StyleId::ALL.len());

        for (style, mode, transparent, depth_write, blend, side, wireframe) in table {
            let def = shader_for(style);
            assert_eq!(
                (def.mode, def.transparent, def.depth_write, def.blend, def.side, def.wireframe),
                (mode, transparent, depth_write, blend, side, wireframe),
                "{style}"
            );
        }
    }

    #[test]
    fn only_mesh_lines_is_wireframe() {
        let wire: Vec<_> = StyleId::ALL
            .into_iter()
            .filter(|s| shader_for(*s).wireframe)
            .collect();
        assert_eq!(wire, [StyleId::MeshLines]);
    }

    // ── wgsl ─────────────────────────────────────────────────────────────

    #[test]
    fn retro_scanlines_are_phased_from_the_bottom() {
        let fragment = shader_for(StyleId::Retro).fragment;
        assert!(fragment.contains("sin((u.viewport.y - frag.y) * 1.5)"));
        assert!(!fragment.contains("sin(frag.y"));
    }

    #[test]
    fn vertex_programs_validate() {
        validate_shader("mesh vertex", MESH_VERTEX);
        validate_shader("points vertex", POINTS_VERTEX);
    }

    #[test]
    fn every_fragment_program_validates() {
        for style in StyleId::ALL {
            validate_shader(style.name(), shader_for(style).fragment);
        }
    }
}
