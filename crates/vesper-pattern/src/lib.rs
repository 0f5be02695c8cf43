//! Configuration model and prompt parser for the **vesper** pattern renderer.
//!
//! This crate has no dependencies so configuration writers (UIs, scripts,
//! tests) can share the vocabulary without pulling in wgpu or winit.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`shape`] | `ShapeId`, the closed catalog of 16 base shapes |
//! | [`style`] | `StyleId`, `StyleGroup`, the closed catalog of 20 shading styles |
//! | [`color`] | `Rgb` with `#rrggbb` parsing and formatting |
//! | [`config`] | `PatternConfig`, `PartialConfig`, value limits |
//! | [`presets`] | the named `PRESETS` |
//! | [`prompt`] | `parse_prompt` |
//! | [`error`] | `ColorParseError`, `UnknownNameError` |
//!
//! # Quick start
//!
//! ```rust
//! use vesper_pattern::{parse_prompt, PatternConfig, ShapeId};
//!
//! let partial = parse_prompt("wild coral torus");
//! let config = partial.apply_to(&PatternConfig::default());
//! assert_eq!(config.shape, ShapeId::Torus);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod presets;
pub mod prompt;
pub mod shape;
pub mod style;

pub use color::Rgb;
pub use config::{PartialConfig, PatternConfig};
pub use error::{ColorParseError, UnknownNameError};
pub use presets::{Preset, PRESETS};
pub use prompt::parse_prompt;
pub use shape::ShapeId;
pub use style::{StyleGroup, StyleId};

#[cfg(test)]
mod merge_tests {
    use super::*;

    #[test]
    fn prompt_then_merge_counts_changes() {
        let base = PatternConfig::default();
        let partial = parse_prompt("large golden spring on a black background");
        let merged = partial.apply_to(&base);

        assert_eq!(partial.len(), 4);
        assert_eq!(merged.shape, ShapeId::Spring);
        assert_eq!(merged.size, 2.5);
        assert_eq!(merged.primary_color, Rgb::from_u32(0xd4a017));
        assert_eq!(merged.background_color, Rgb::BLACK);
        assert_eq!(merged.style, base.style);
    }

    #[test]
    fn preset_then_prompt_keeps_unmentioned_fields() {
        let preset = Preset::find("Neon Wire").unwrap();
        let first = preset.config.apply_to(&PatternConfig::default());
        let second = parse_prompt("make it slow").apply_to(&first);

        assert_eq!(second.style, Some(StyleId::MeshLines));
        assert_eq!(second.noise_speed, 0.2);
        assert_eq!(second.noise_amplitude, first.noise_amplitude);
    }
}
