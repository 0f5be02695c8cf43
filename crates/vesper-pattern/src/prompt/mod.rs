//! Free text to [`PartialConfig`].
//!
//! The parser never fails. Anything it cannot recognize is simply left out of
//! the result.
//!
//! Resolution works in three independent passes:
//!
//! 1. Each keyword table (shapes, styles, named colors) is searched for the
//!    longest key occurring anywhere in the text. Position in the text does
//!    not matter; equal-length keys keep table order.
//! 2. An explicit `#rrggbb` overrides any named color.
//! 3. Descriptor rules (see [`rules`]) overwrite numeric fields in priority
//!    order.

mod rules;
mod tables;

use std::cmp::Reverse;

use crate::color::Rgb;
use crate::config::PartialConfig;

/// Parses a prompt like `"glass torus knot with glow"` into the fields it
/// implies.
pub fn parse_prompt(text: &str) -> PartialConfig {
    let lower = text.to_lowercase();
    let mut out = PartialConfig::default();

    out.shape = match_keyword(&lower, tables::SHAPE_KEYWORDS);
    out.style = match_keyword(&lower, tables::STYLE_KEYWORDS);
    out.primary_color =
        find_hex_color(&lower).or_else(|| match_keyword(&lower, tables::COLOR_KEYWORDS));

    rules::apply_rules(&lower, &mut out);
    out
}

/// Value of the longest key contained in `text`.
fn match_keyword<T: Copy>(text: &str, table: &[(&str, T)]) -> Option<T> {
    let mut keys: Vec<&(&str, T)> = table.iter().collect();
    // Stable: equal lengths keep table order.
    keys.sort_by_key(|(k, _)| Reverse(k.chars().count()));
    keys.into_iter().find(|(k, _)| text.contains(k)).map(|(_, v)| *v)
}

/// First `#` followed by six lower-case hex digits.
fn find_hex_color(text: &str) -> Option<Rgb> {
    let bytes = text.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'#')
        .find_map(|(i, _)| {
            let digits = bytes.get(i + 1..i + 7)?;
            if !digits.iter().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
                return None;
            }
            Rgb::from_hex(&text[i..i + 7]).ok()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeId;
    use crate::style::StyleId;

    // ── keyword tables ───────────────────────────────────────────────────

    #[test]
    fn longest_key_wins_over_earlier_position() {
        let p = parse_prompt("glass torus knot with glow");
        assert_eq!(p.shape, Some(ShapeId::TorusKnot));
        assert_eq!(p.style, Some(StyleId::Glass));
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn background_phrase_and_keywords() {
        let p = parse_prompt("lava sphere dark background");
        assert_eq!(p.shape, Some(ShapeId::Sphere));
        assert_eq!(p.style, Some(StyleId::Lava));
        assert_eq!(p.background_color, Some(Rgb::BLACK));
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn hex_color_and_spiky_noise() {
        let p = parse_prompt("#ff00ff spiky cube");
        assert_eq!(p.primary_color, Some(Rgb::new(0xff, 0x00, 0xff)));
        assert_eq!(p.shape, Some(ShapeId::Cube));
        assert_eq!(p.noise_amplitude, Some(1.0));
        assert_eq!(p.noise_frequency, Some(5.0));
        assert_eq!(p.noise_speed, Some(0.8));
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn longer_key_wins_within_a_table() {
        assert_eq!(parse_prompt("mesh lines").style, Some(StyleId::MeshLines));
        // "cellular" outranks "cell" and the unrelated "cel".
        assert_eq!(parse_prompt("cellular").style, Some(StyleId::Voronoi));
        // "neon" and "glow" are both four characters; "neon" comes first.
        assert_eq!(parse_prompt("glow neon").style, Some(StyleId::Futuristic));
    }

    #[test]
    fn case_is_ignored() {
        let p = parse_prompt("A Red MOBIUS STRIP");
        assert_eq!(p.shape, Some(ShapeId::Mobius));
        assert_eq!(p.primary_color, Some(Rgb::from_u32(0xef4444)));
    }

    #[test]
    fn multi_word_color_beats_single_word() {
        let p = parse_prompt("dark red orb");
        assert_eq!(p.primary_color, Some(Rgb::from_u32(0x991b1b)));
    }

    // ── hex colors ───────────────────────────────────────────────────────

    #[test]
    fn hex_overrides_named_color() {
        let p = parse_prompt("blue #00ff00 torus");
        assert_eq!(p.primary_color, Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn upper_case_hex_is_accepted() {
        let p = parse_prompt("#ABCDEF");
        assert_eq!(p.primary_color, Some(Rgb::from_u32(0xabcdef)));
    }

    #[test]
    fn short_hex_is_ignored() {
        assert_eq!(parse_prompt("#fff").primary_color, None);
        assert_eq!(parse_prompt("# ff00ff").primary_color, None);
    }

    // ── descriptor rules ─────────────────────────────────────────────────

    #[test]
    fn later_rule_wins_on_shared_field() {
        let p = parse_prompt("wild but slow");
        assert_eq!(p.noise_amplitude, Some(1.5));
        assert_eq!(p.noise_frequency, Some(4.0));
        assert_eq!(p.noise_speed, Some(0.2));

        let p = parse_prompt("tiny yet big");
        assert_eq!(p.size, Some(2.5));

        let p = parse_prompt("fast and still");
        assert_eq!(p.noise_speed, Some(0.0));
    }

    #[test]
    fn density_and_glow_rules() {
        let p = parse_prompt("dense bright");
        assert_eq!(p.density, Some(180));
        assert_eq!(p.glow_intensity, Some(2.5));
        assert_eq!(parse_prompt("low poly").density, Some(30));
    }

    #[test]
    fn light_background() {
        let p = parse_prompt("on a white background");
        assert_eq!(p.background_color, Some(Rgb::from_u32(0xe8e8e8)));
        // "white" is also a named color.
        assert_eq!(p.primary_color, Some(Rgb::WHITE));
    }

    // ── totality ─────────────────────────────────────────────────────────

    #[test]
    fn unmatched_text_yields_empty_partial() {
        assert!(parse_prompt("").is_empty());
        assert!(parse_prompt("qwerty zxcv").is_empty());
        assert!(parse_prompt("ünïcödé ✨ #").is_empty());
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = "wild neon coil with a dark background";
        assert_eq!(parse_prompt(text), parse_prompt(text));
    }
}
