//! Line commands read from stdin.
//!
//! Every command that edits the configuration stores a whole new record in
//! the shared cell; the viewer picks it up on its next frame.

use std::io::BufRead;
use std::thread;

use anyhow::{Context, Result};
use vesper_engine::shared::{ConfigCell, SnapshotRequest};
use vesper_pattern::{parse_prompt, PatternConfig, Preset, ShapeId, StyleGroup, StyleId, PRESETS};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Preset(&'a str),
    ListPresets,
    ListStyles,
    Show,
    Shape(&'a str),
    Style(&'a str),
    Reset,
    Snapshot,
    Prompt(&'a str),
}

impl<'a> Command<'a> {
    /// Parses one input line. Blank lines yield `None`; anything that is not
    /// a known keyword is a prompt.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        Some(match (head.to_ascii_lowercase().as_str(), rest.is_empty()) {
            ("presets", true) => Command::ListPresets,
            ("styles", true) => Command::ListStyles,
            ("show", true) => Command::Show,
            ("reset", true) => Command::Reset,
            ("snapshot", true) => Command::Snapshot,
            ("preset", false) => Command::Preset(rest),
            ("shape", false) => Command::Shape(rest),
            ("style", false) => Command::Style(rest),
            _ => Command::Prompt(line),
        })
    }
}

/// Merges a prompt into `current`, logging how many fields it set. The
/// result is clamped into the value limits.
pub fn apply_prompt(text: &str, current: &PatternConfig) -> PatternConfig {
    let partial = parse_prompt(text);
    if partial.is_empty() {
        log::warn!("nothing recognized in {text:?}");
    } else {
        log::info!("Applied {} change(s)", partial.len());
    }
    partial.apply_to(current).sanitized()
}

/// The record a command produces from `current`, clamped into the value
/// limits, or `None` when it does not edit the configuration.
pub fn edit(command: Command<'_>, current: &PatternConfig) -> Option<PatternConfig> {
    let next = match command {
        Command::Preset(name) => match Preset::find(name) {
            Some(preset) => {
                log::info!("preset {}", preset.name);
                Some(preset.config.apply_to(current))
            }
            None => {
                log::warn!("unknown preset {name:?}; try `presets`");
                None
            }
        },
        Command::Shape(name) => {
            let shape = ShapeId::from_name_or_default(name);
            if !shape.name().eq_ignore_ascii_case(name.trim()) {
                log::warn!("unknown shape {name:?}; using {shape}");
            }
            Some(PatternConfig { shape, ..current.clone() })
        }
        Command::Style(name) => {
            let style = StyleId::from_name(name);
            if style.is_none() {
                log::warn!("unknown style {name:?}; the scene will be empty");
            }
            Some(PatternConfig { style, ..current.clone() })
        }
        Command::Reset => Some(PatternConfig::default()),
        Command::Prompt(text) => Some(apply_prompt(text, current)),
        Command::ListPresets | Command::ListStyles | Command::Show | Command::Snapshot => None,
    };
    next.map(|config| config.sanitized())
}

/// Style names under their group headings.
pub fn style_listing() -> Vec<String> {
    let mut lines = Vec::with_capacity(StyleGroup::ALL.len() + StyleId::ALL.len());
    for group in StyleGroup::ALL {
        lines.push(format!("{}:", group.label()));
        lines.extend(
            StyleId::ALL
                .into_iter()
                .filter(|style| style.group() == group)
                .map(|style| format!("  {:<12} {}", style.name(), style.label())),
        );
    }
    lines
}

/// One-line summary of a record, colors as `#rrggbb`.
pub fn describe(config: &PatternConfig) -> String {
    format!(
        "shape={} style={} colors={} {} bg={} size={} density={} opacity={}",
        config.shape,
        config.style.map_or("none", |s| s.name()),
        config.primary_color.to_hex(),
        config.secondary_color.to_hex(),
        config.background_color.to_hex(),
        config.size,
        config.density,
        config.opacity,
    )
}

/// Runs one command against the shared state.
pub fn execute(command: Command<'_>, config: &ConfigCell, snapshots: &SnapshotRequest) {
    match command {
        Command::ListPresets => {
            for preset in &PRESETS {
                println!("  {}", preset.name);
            }
        }
        Command::ListStyles => {
            for line in style_listing() {
                println!("{line}");
            }
        }
        Command::Show => println!("{}", describe(&config.load())),
        Command::Snapshot => snapshots.request(),
        _ => {
            config.update(|current| edit(command, current).unwrap_or_else(|| current.clone()));
        }
    }
}

/// Starts the thread that feeds stdin lines to [`execute`] until EOF.
pub fn spawn_reader(config: ConfigCell, snapshots: SnapshotRequest) -> Result<()> {
    thread::Builder::new()
        .name("stdin-commands".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        log::warn!("stdin closed: {err}");
                        break;
                    }
                };
                if let Some(command) = Command::parse(&line) {
                    execute(command, &config, &snapshots);
                }
            }
            log::debug!("stdin reader finished");
        })
        .context("failed to spawn stdin reader")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use vesper_pattern::Rgb;

    use super::*;

    // ── parsing ──────────────────────────────────────────────────────────

    #[test]
    fn keywords_and_prompts() {
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("presets"), Some(Command::ListPresets));
        assert_eq!(Command::parse("RESET"), Some(Command::Reset));
        assert_eq!(Command::parse("snapshot"), Some(Command::Snapshot));
        assert_eq!(Command::parse("styles"), Some(Command::ListStyles));
        assert_eq!(Command::parse("Show"), Some(Command::Show));
        assert_eq!(Command::parse("preset  Lava Core "), Some(Command::Preset("Lava Core")));
        assert_eq!(Command::parse("shape torusknot"), Some(Command::Shape("torusknot")));
        assert_eq!(Command::parse("style xray"), Some(Command::Style("xray")));
        assert_eq!(Command::parse("red cube"), Some(Command::Prompt("red cube")));
    }

    #[test]
    fn keyword_without_argument_is_a_prompt() {
        assert_eq!(Command::parse("shape"), Some(Command::Prompt("shape")));
        assert_eq!(Command::parse("reset everything"), Some(Command::Prompt("reset everything")));
    }

    // ── editing ──────────────────────────────────────────────────────────

    #[test]
    fn unknown_shape_falls_back_to_sphere() {
        let current = PatternConfig { shape: ShapeId::Cube, ..PatternConfig::default() };
        let next = edit(Command::Shape("teapot"), &current).unwrap();
        assert_eq!(next.shape, ShapeId::Sphere);

        let next = edit(Command::Shape("Mobius"), &current).unwrap();
        assert_eq!(next.shape, ShapeId::Mobius);
    }

    #[test]
    fn unknown_style_empties_the_scene() {
        let current = PatternConfig::default();
        assert_eq!(edit(Command::Style("velvet"), &current).unwrap().style, None);
        assert_eq!(edit(Command::Style("toon"), &current).unwrap().style, Some(StyleId::Toon));
    }

    #[test]
    fn preset_merges_over_current() {
        let current = PatternConfig { point_size: 7.0, ..PatternConfig::default() };
        let next = edit(Command::Preset("neon wire"), &current).unwrap();
        assert_eq!(next.style, Some(StyleId::MeshLines));
        assert_eq!(next.point_size, 7.0);

        assert!(edit(Command::Preset("no such preset"), &current).is_none());
    }

    #[test]
    fn prompt_keeps_unmentioned_fields() {
        let current = PatternConfig { density: 150, ..PatternConfig::default() };
        let next = edit(Command::Prompt("black background"), &current).unwrap();
        assert_eq!(next.background_color, Rgb::BLACK);
        assert_eq!(next.density, 150);
    }

    #[test]
    fn edits_are_clamped_into_limits() {
        let current = PatternConfig { density: 5000, opacity: 0.0, ..PatternConfig::default() };
        let next = edit(Command::Shape("torus"), &current).unwrap();
        assert_eq!(next.shape, ShapeId::Torus);
        assert_eq!(next.density, 200);
        assert_eq!(next.opacity, 0.1);

        let next = edit(Command::Prompt("red"), &current).unwrap();
        assert_eq!(next.density, 200);
    }

    #[test]
    fn reset_restores_defaults() {
        let current = PatternConfig { shape: ShapeId::Spring, style: None, ..PatternConfig::default() };
        assert_eq!(edit(Command::Reset, &current), Some(PatternConfig::default()));
    }

    // ── listings ─────────────────────────────────────────────────────────

    #[test]
    fn styles_are_listed_under_their_groups() {
        let lines = style_listing();
        assert_eq!(lines.len(), 5 + 20);
        assert_eq!(lines[0], "Artistic:");
        assert!(lines[1].trim_start().starts_with("particles"));

        let structure = lines.iter().position(|l| l == "Structure / Technical:").unwrap();
        assert!(lines[structure + 1..].iter().any(|l| l.contains("meshLines")));
        assert!(!lines[structure + 1..].iter().any(|l| l.contains("toon")));
    }

    #[test]
    fn describe_prints_hex_colors() {
        let line = describe(&PatternConfig { style: None, ..PatternConfig::default() });
        assert!(line.starts_with("shape=sphere style=none"));
        assert!(line.contains("colors=#e0e7ff #c084fc bg=#c7d2e0"));
    }

    // ── shared state ─────────────────────────────────────────────────────

    #[test]
    fn execute_writes_whole_records_and_flags_snapshots() {
        let cell = ConfigCell::default();
        let snapshots = SnapshotRequest::default();

        execute(Command::Shape("cone"), &cell, &snapshots);
        execute(Command::Style("lava"), &cell, &snapshots);
        assert_eq!(cell.load().shape, ShapeId::Cone);
        assert_eq!(cell.load().style, Some(StyleId::Lava));

        assert!(!snapshots.take());
        execute(Command::Snapshot, &cell, &snapshots);
        assert!(snapshots.take());
        assert!(!snapshots.take());

        let before = cell.load();
        execute(Command::ListPresets, &cell, &snapshots);
        execute(Command::ListStyles, &cell, &snapshots);
        execute(Command::Show, &cell, &snapshots);
        assert_eq!(*cell.load(), *before);
    }
}
