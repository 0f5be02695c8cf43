//! Named starting points covering every style and most shapes.

use crate::color::Rgb;
use crate::config::PartialConfig;
use crate::shape::ShapeId;
use crate::style::StyleId;

#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub config: PartialConfig,
}

impl Preset {
    /// Finds a preset by name, ignoring case and surrounding whitespace.
    pub fn find(name: &str) -> Option<&'static Preset> {
        let needle = name.trim();
        PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(needle))
    }
}

#[allow(clippy::too_many_arguments)]
const fn preset(
    name: &'static str,
    shape: ShapeId,
    style: StyleId,
    color: u32,
    secondary: u32,
    background: u32,
    (amplitude, frequency, speed): (f32, f32, f32),
    density: u32,
    size: f32,
    glow: f32,
) -> Preset {
    Preset {
        name,
        config: PartialConfig {
            shape: Some(shape),
            style: Some(style),
            primary_color: Some(Rgb::from_u32(color)),
            secondary_color: Some(Rgb::from_u32(secondary)),
            background_color: Some(Rgb::from_u32(background)),
            size: Some(size),
            noise_amplitude: Some(amplitude),
            noise_frequency: Some(frequency),
            noise_speed: Some(speed),
            point_size: None,
            density: Some(density),
            opacity: None,
            glow_intensity: Some(glow),
            rotation_speed: None,
        },
    }
}

pub static PRESETS: [Preset; 20] = [
    Preset {
        name: "Plasma Globe",
        config: PartialConfig {
            shape: Some(ShapeId::Sphere),
            style: Some(StyleId::Particles),
            primary_color: Some(Rgb::from_u32(0xf97316)),
            secondary_color: Some(Rgb::from_u32(0x7c3aed)),
            background_color: Some(Rgb::from_u32(0x000000)),
            size: Some(1.8),
            noise_amplitude: Some(0.6),
            noise_frequency: Some(2.5),
            noise_speed: Some(0.8),
            point_size: Some(3.0),
            density: Some(120),
            opacity: None,
            glow_intensity: Some(1.5),
            rotation_speed: None,
        },
    },
    preset("Holo Crystal", ShapeId::Crystal, StyleId::Holographic,
        0xe0e7ff, 0xc084fc, 0xc7d2e0, (0.3, 2.0, 0.4), 80, 1.6, 1.2),
    preset("Glass Blob", ShapeId::Sphere, StyleId::Glass,
        0xffffff, 0xe0e0e0, 0xb8c4cc, (0.8, 1.5, 0.5), 120, 1.6, 1.5),
    preset("Toon Capsule", ShapeId::Capsule, StyleId::Toon,
        0xef4444, 0xfbbf24, 0xfef3c7, (0.3, 2.0, 0.4), 80, 1.5, 1.0),
    preset("Neon Wire", ShapeId::TorusKnot, StyleId::MeshLines,
        0x06b6d4, 0x3b82f6, 0x050510, (0.25, 2.5, 0.6), 60, 1.4, 2.0),
    preset("Chrome Future", ShapeId::Torus, StyleId::Futuristic,
        0xef4444, 0x22c55e, 0x0d0d0d, (0.35, 2.0, 0.5), 100, 1.5, 1.8),
    preset("Lava Core", ShapeId::Sphere, StyleId::Lava,
        0xf97316, 0xef4444, 0x0a0000, (0.5, 2.0, 0.8), 100, 1.8, 2.0),
    preset("Electric Knot", ShapeId::Cinquefoil, StyleId::Electric,
        0x06b6d4, 0xa855f7, 0x000010, (0.3, 3.0, 1.0), 80, 1.4, 2.5),
    preset("Aurora Ring", ShapeId::Torus, StyleId::Aurora,
        0x22c55e, 0x3b82f6, 0x020810, (0.4, 2.0, 0.5), 100, 1.6, 1.5),
    preset("X-Ray Scan", ShapeId::Icosahedron, StyleId::Xray,
        0x22d3ee, 0x06b6d4, 0x000000, (0.3, 2.0, 0.3), 80, 1.6, 1.5),
    preset("Marble Sphere", ShapeId::Sphere, StyleId::Marble,
        0xf5f5f4, 0x57534e, 0xd6d3d1, (0.2, 2.0, 0.2), 100, 1.8, 0.5),
    preset("Plasma Torus", ShapeId::Torus, StyleId::Plasma,
        0xa855f7, 0xec4899, 0x0a001a, (0.4, 2.0, 1.0), 100, 1.5, 1.5),
    preset("Voronoi Shell", ShapeId::Dodecahedron, StyleId::Voronoi,
        0xf97316, 0x0d0d0d, 0x1a1a2e, (0.3, 2.0, 0.3), 80, 1.6, 1.0),
    preset("Retro Cube", ShapeId::Cube, StyleId::Retro,
        0x22c55e, 0x000000, 0x1a1a1a, (0.2, 2.0, 0.4), 60, 1.6, 1.0),
    preset("Fresnel Glow", ShapeId::Sphere, StyleId::Fresnel,
        0xa855f7, 0x1e1b4b, 0x000000, (0.5, 2.0, 0.5), 100, 1.8, 2.0),
    preset("Oil Slick", ShapeId::Sphere, StyleId::Iridescent,
        0x1e293b, 0x334155, 0xf1f5f9, (0.4, 2.0, 0.4), 120, 1.8, 1.2),
    preset("Topo Map", ShapeId::Sphere, StyleId::Topographic,
        0x22c55e, 0x065f46, 0xf0fdf4, (0.6, 2.0, 0.2), 120, 1.8, 0.5),
    preset("Emission Pulse", ShapeId::StarKnot, StyleId::Emission,
        0xf43f5e, 0xfb923c, 0x0a0000, (0.3, 2.0, 0.6), 80, 1.4, 2.0),
    preset("Chromatic Möbius", ShapeId::Mobius, StyleId::Chromatic,
        0xffffff, 0x000000, 0x111111, (0.2, 2.0, 0.5), 80, 1.6, 1.0),
    preset("Gradient Spring", ShapeId::Spring, StyleId::Gradient,
        0xf97316, 0xa78bfa, 0xf5e6d3, (0.3, 2.0, 0.3), 60, 1.4, 0.8),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatternConfig;

    #[test]
    fn every_style_has_a_preset() {
        for style in StyleId::ALL {
            assert!(
                PRESETS.iter().any(|p| p.config.style == Some(style)),
                "no preset for {style}"
            );
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = PRESETS.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PRESETS.len());
    }

    #[test]
    fn find_is_case_insensitive() {
        let p = Preset::find("  lava core ").unwrap();
        assert_eq!(p.config.style, Some(StyleId::Lava));
        assert!(Preset::find("Lava").is_none());
    }

    #[test]
    fn presets_stay_within_limits() {
        for p in &PRESETS {
            let merged = p.config.apply_to(&PatternConfig::default());
            assert_eq!(merged.sanitized(), merged, "{}", p.name);
        }
    }
}
