use std::fmt;
use std::str::FromStr;

use crate::error::UnknownNameError;

/// The closed catalog of shading styles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StyleId {
    Particles,
    Holographic,
    Gradient,
    Glass,
    MeshLines,
    Futuristic,
    Toon,
    Plasma,
    Xray,
    Fresnel,
    Voronoi,
    Marble,
    Aurora,
    Lava,
    Electric,
    Chromatic,
    Topographic,
    Retro,
    Iridescent,
    Emission,
}

/// Grouping used when presenting styles to a user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StyleGroup {
    Artistic,
    MetallicReflective,
    GlassOrganic,
    LightEnergy,
    StructureTechnical,
}

impl StyleGroup {
    /// Every group, in presentation order.
    pub const ALL: [StyleGroup; 5] = [
        StyleGroup::Artistic,
        StyleGroup::MetallicReflective,
        StyleGroup::GlassOrganic,
        StyleGroup::LightEnergy,
        StyleGroup::StructureTechnical,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            StyleGroup::Artistic => "Artistic",
            StyleGroup::MetallicReflective => "Metallic / Reflective",
            StyleGroup::GlassOrganic => "Glass / Organic",
            StyleGroup::LightEnergy => "Light / Energy",
            StyleGroup::StructureTechnical => "Structure / Technical",
        }
    }
}

impl StyleId {
    /// Every style, in catalog order.
    pub const ALL: [StyleId; 20] = [
        StyleId::Particles,
        StyleId::Holographic,
        StyleId::Gradient,
        StyleId::Glass,
        StyleId::MeshLines,
        StyleId::Futuristic,
        StyleId::Toon,
        StyleId::Plasma,
        StyleId::Xray,
        StyleId::Fresnel,
        StyleId::Voronoi,
        StyleId::Marble,
        StyleId::Aurora,
        StyleId::Lava,
        StyleId::Electric,
        StyleId::Chromatic,
        StyleId::Topographic,
        StyleId::Retro,
        StyleId::Iridescent,
        StyleId::Emission,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            StyleId::Particles => "particles",
            StyleId::Holographic => "holographic",
            StyleId::Gradient => "gradient",
            StyleId::Glass => "glass",
            StyleId::MeshLines => "meshLines",
            StyleId::Futuristic => "futuristic",
            StyleId::Toon => "toon",
            StyleId::Plasma => "plasma",
            StyleId::Xray => "xray",
            StyleId::Fresnel => "fresnel",
            StyleId::Voronoi => "voronoi",
            StyleId::Marble => "marble",
            StyleId::Aurora => "aurora",
            StyleId::Lava => "lava",
            StyleId::Electric => "electric",
            StyleId::Chromatic => "chromatic",
            StyleId::Topographic => "topographic",
            StyleId::Retro => "retro",
            StyleId::Iridescent => "iridescent",
            StyleId::Emission => "emission",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StyleId::Particles => "Particles",
            StyleId::Holographic => "Holographic",
            StyleId::Gradient => "Gradient",
            StyleId::Glass => "Glass",
            StyleId::MeshLines => "Wireframe",
            StyleId::Futuristic => "Futuristic",
            StyleId::Toon => "Toon",
            StyleId::Plasma => "Plasma",
            StyleId::Xray => "X-Ray",
            StyleId::Fresnel => "Fresnel",
            StyleId::Voronoi => "Voronoi",
            StyleId::Marble => "Marble",
            StyleId::Aurora => "Aurora",
            StyleId::Lava => "Lava",
            StyleId::Electric => "Electric",
            StyleId::Chromatic => "Chromatic",
            StyleId::Topographic => "Topographic",
            StyleId::Retro => "Retro",
            StyleId::Iridescent => "Iridescent",
            StyleId::Emission => "Emission",
        }
    }

    pub const fn group(self) -> StyleGroup {
        match self {
            StyleId::Particles | StyleId::Gradient | StyleId::Toon | StyleId::Retro => {
                StyleGroup::Artistic
            }
            StyleId::Holographic
            | StyleId::Iridescent
            | StyleId::Chromatic
            | StyleId::Futuristic => StyleGroup::MetallicReflective,
            StyleId::Glass | StyleId::Marble | StyleId::Plasma | StyleId::Lava => {
                StyleGroup::GlassOrganic
            }
            StyleId::Fresnel | StyleId::Emission | StyleId::Electric | StyleId::Aurora => {
                StyleGroup::LightEnergy
            }
            StyleId::MeshLines | StyleId::Topographic | StyleId::Voronoi | StyleId::Xray => {
                StyleGroup::StructureTechnical
            }
        }
    }

    /// Resolves a name. Unknown styles resolve to `None`, which the renderer
    /// treats as "draw nothing" rather than substituting a default.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// The style after `self` in catalog order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// The style before `self` in catalog order, wrapping around.
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleId {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownNameError::new("style", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for style in StyleId::ALL {
            assert_eq!(StyleId::from_name(style.name()), Some(style));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(StyleId::from_name("meshlines"), Some(StyleId::MeshLines));
        assert_eq!(StyleId::from_name("XRAY"), Some(StyleId::Xray));
    }

    #[test]
    fn unknown_style_has_no_fallback() {
        assert_eq!(StyleId::from_name("velvet"), None);
        let err = "velvet".parse::<StyleId>().unwrap_err();
        assert_eq!(err.kind, "style");
    }

    #[test]
    fn every_group_has_four_styles() {
        for group in StyleGroup::ALL {
            let n = StyleId::ALL.iter().filter(|s| s.group() == group).count();
            assert_eq!(n, 4, "{}", group.label());
        }
    }
}
