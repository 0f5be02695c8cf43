use vesper_pattern::{PatternConfig, Preset, PRESETS, StyleId};
use winit::keyboard::KeyCode;

/// What a key press asks the viewer to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Preset { forward: bool },
    Shape { forward: bool },
    Style { forward: bool },
    Reset,
    Snapshot,
    Quit,
}

pub(crate) fn key_action(code: KeyCode) -> Option<KeyAction> {
    Some(match code {
        KeyCode::ArrowRight => KeyAction::Preset { forward: true },
        KeyCode::ArrowLeft => KeyAction::Preset { forward: false },
        KeyCode::ArrowUp => KeyAction::Shape { forward: true },
        KeyCode::ArrowDown => KeyAction::Shape { forward: false },
        KeyCode::PageUp => KeyAction::Style { forward: true },
        KeyCode::PageDown => KeyAction::Style { forward: false },
        KeyCode::KeyR => KeyAction::Reset,
        KeyCode::KeyS => KeyAction::Snapshot,
        KeyCode::Escape => KeyAction::Quit,
        _ => return None,
    })
}

/// Next preset position; starts at either end when nothing was selected.
pub(crate) fn step_preset(current: Option<usize>, forward: bool) -> usize {
    let len = PRESETS.len();
    match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    }
}

/// Applies a configuration-editing action, clamping the result into the
/// value limits. Returns `None` for actions that do not edit the
/// configuration.
pub(crate) fn edit(
    action: KeyAction,
    config: &PatternConfig,
    preset: &mut Option<usize>,
) -> Option<PatternConfig> {
    let mut next = config.clone();
    match action {
        KeyAction::Preset { forward } => {
            let index = step_preset(*preset, forward);
            *preset = Some(index);
            let Preset { name, config: partial } = &PRESETS[index];
            log::info!("preset {name}");
            next = partial.apply_to(config);
        }
        KeyAction::Shape { forward } => {
            next.shape = if forward { config.shape.next() } else { config.shape.prev() };
        }
        KeyAction::Style { forward } => {
            next.style = Some(match config.style {
                Some(style) if forward => style.next(),
                Some(style) => style.prev(),
                None => StyleId::ALL[0],
            });
        }
        KeyAction::Reset => {
            *preset = None;
            next = PatternConfig::default();
        }
        KeyAction::Snapshot | KeyAction::Quit => return None,
    }
    Some(next.sanitized())
}

#[cfg(test)]
mod tests {
    use vesper_pattern::ShapeId;

    use super::*;

    #[test]
    fn arrows_and_pages_map_to_cycles() {
        assert_eq!(key_action(KeyCode::ArrowUp), Some(KeyAction::Shape { forward: true }));
        assert_eq!(key_action(KeyCode::PageDown), Some(KeyAction::Style { forward: false }));
        assert_eq!(key_action(KeyCode::Escape), Some(KeyAction::Quit));
        assert_eq!(key_action(KeyCode::KeyQ), None);
    }

    #[test]
    fn preset_cycle_wraps_both_ways() {
        assert_eq!(step_preset(None, true), 0);
        assert_eq!(step_preset(None, false), PRESETS.len() - 1);
        assert_eq!(step_preset(Some(PRESETS.len() - 1), true), 0);
        assert_eq!(step_preset(Some(0), false), PRESETS.len() - 1);
    }

    #[test]
    fn preset_action_merges_and_remembers_position() {
        let mut preset = None;
        let base = PatternConfig::default();
        let next = edit(KeyAction::Preset { forward: true }, &base, &mut preset).unwrap();
        assert_eq!(preset, Some(0));
        assert_eq!(next, PRESETS[0].config.apply_to(&base));
    }

    #[test]
    fn style_cycle_recovers_from_unknown_style() {
        let mut preset = None;
        let config = PatternConfig { style: None, ..PatternConfig::default() };
        let next = edit(KeyAction::Style { forward: false }, &config, &mut preset).unwrap();
        assert_eq!(next.style, Some(StyleId::Particles));
    }

    #[test]
    fn key_edits_are_clamped_into_limits() {
        let mut preset = None;
        let config = PatternConfig { density: 900, glow_intensity: -2.0, ..PatternConfig::default() };
        let next = edit(KeyAction::Shape { forward: true }, &config, &mut preset).unwrap();
        assert_eq!(next.density, 200);
        assert_eq!(next.glow_intensity, 0.0);
    }

    #[test]
    fn shape_cycle_and_reset() {
        let mut preset = Some(3);
        let config = PatternConfig { shape: ShapeId::Mobius, ..PatternConfig::default() };
        let next = edit(KeyAction::Shape { forward: true }, &config, &mut preset).unwrap();
        assert_eq!(next.shape, ShapeId::Sphere);

        let reset = edit(KeyAction::Reset, &next, &mut preset).unwrap();
        assert_eq!(reset, PatternConfig::default());
        assert_eq!(preset, None);
        assert_eq!(edit(KeyAction::Snapshot, &reset, &mut preset), None);
    }
}
