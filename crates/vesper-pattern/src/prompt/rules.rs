//! Descriptor heuristics.
//!
//! Rules run top to bottom and every matching rule overwrites the fields it
//! targets, so a rule lower in [`RULES`] takes priority over any rule above it
//! that touches the same field. "wild and slow" therefore ends up with the wild
//! amplitude/frequency but the slow speed.

use crate::color::Rgb;
use crate::config::PartialConfig;

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Effect {
    /// Sets amplitude, frequency and speed together.
    Noise { amplitude: f32, frequency: f32, speed: f32 },
    Size(f32),
    Density(u32),
    Background(Rgb),
    Glow(f32),
    NoiseSpeed(f32),
}

impl Effect {
    fn apply(self, out: &mut PartialConfig) {
        match self {
            Effect::Noise { amplitude, frequency, speed } => {
                out.noise_amplitude = Some(amplitude);
                out.noise_frequency = Some(frequency);
                out.noise_speed = Some(speed);
            }
            Effect::Size(v) => out.size = Some(v),
            Effect::Density(v) => out.density = Some(v),
            Effect::Background(c) => out.background_color = Some(c),
            Effect::Glow(v) => out.glow_intensity = Some(v),
            Effect::NoiseSpeed(v) => out.noise_speed = Some(v),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Rule {
    /// Any one of these substrings triggers the rule.
    pub triggers: &'static [&'static str],
    pub effect: Effect,
}

impl Rule {
    fn matches(&self, lower: &str) -> bool {
        self.triggers.iter().any(|t| lower.contains(t))
    }
}

/// Ordered lowest priority first.
pub(crate) static RULES: &[Rule] = &[
    Rule {
        triggers: &["smooth", "calm"],
        effect: Effect::Noise { amplitude: 0.2, frequency: 1.5, speed: 0.3 },
    },
    Rule {
        triggers: &["wild", "chaotic", "crazy"],
        effect: Effect::Noise { amplitude: 1.5, frequency: 4.0, speed: 1.5 },
    },
    Rule {
        triggers: &["spiky", "sharp"],
        effect: Effect::Noise { amplitude: 1.0, frequency: 5.0, speed: 0.8 },
    },
    Rule { triggers: &["tiny", "small"], effect: Effect::Size(0.8) },
    Rule { triggers: &["large", "big"], effect: Effect::Size(2.5) },
    Rule { triggers: &["dense", "detailed"], effect: Effect::Density(180) },
    Rule { triggers: &["sparse", "low poly"], effect: Effect::Density(30) },
    Rule {
        triggers: &["dark background", "black background"],
        effect: Effect::Background(Rgb::BLACK),
    },
    Rule {
        triggers: &["white background", "light background"],
        effect: Effect::Background(Rgb::from_u32(0xe8e8e8)),
    },
    Rule { triggers: &["bright"], effect: Effect::Glow(2.5) },
    Rule { triggers: &["fast"], effect: Effect::NoiseSpeed(2.0) },
    Rule { triggers: &["slow"], effect: Effect::NoiseSpeed(0.2) },
    Rule { triggers: &["still", "static"], effect: Effect::NoiseSpeed(0.0) },
];

/// Applies every matching rule in priority order. `lower` must already be
/// lower-cased.
pub(crate) fn apply_rules(lower: &str, out: &mut PartialConfig) {
    for rule in RULES.iter().filter(|r| r.matches(lower)) {
        rule.effect.apply(out);
    }
}
