use crate::color::Rgb;
use crate::shape::ShapeId;
use crate::style::StyleId;

/// The complete configuration of the rendered pattern.
///
/// Writers replace the whole record; the renderer reads whole snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternConfig {
    pub shape: ShapeId,
    /// `None` when the writer asked for a style outside the catalog. The
    /// renderer shows an empty scene in that case.
    pub style: Option<StyleId>,
    pub primary_color: Rgb,
    pub secondary_color: Rgb,
    pub background_color: Rgb,
    pub size: f32,
    pub noise_amplitude: f32,
    pub noise_frequency: f32,
    pub noise_speed: f32,
    pub point_size: f32,
    /// Tessellation driver; each shape maps it to its own segment counts.
    pub density: u32,
    pub opacity: f32,
    pub glow_intensity: f32,
    pub rotation_speed: f32,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            shape: ShapeId::Sphere,
            style: Some(StyleId::Holographic),
            primary_color: Rgb::from_u32(0xe0e7ff),
            secondary_color: Rgb::from_u32(0xc084fc),
            background_color: Rgb::from_u32(0xc7d2e0),
            size: 1.8,
            noise_amplitude: 0.4,
            noise_frequency: 2.0,
            noise_speed: 0.5,
            point_size: 3.0,
            density: 100,
            opacity: 1.0,
            glow_intensity: 1.2,
            rotation_speed: 0.5,
        }
    }
}

/// Inclusive ranges accepted by [`PatternConfig::sanitized`].
pub mod limits {
    pub const SIZE: (f32, f32) = (0.5, 3.0);
    pub const POINT_SIZE: (f32, f32) = (1.0, 10.0);
    pub const DENSITY: (u32, u32) = (16, 200);
    pub const ROTATION_SPEED: (f32, f32) = (0.0, 5.0);
    pub const NOISE_AMPLITUDE: (f32, f32) = (0.0, 2.0);
    pub const NOISE_FREQUENCY: (f32, f32) = (0.5, 6.0);
    pub const NOISE_SPEED: (f32, f32) = (0.0, 3.0);
    pub const OPACITY: (f32, f32) = (0.1, 1.0);
    pub const GLOW_INTENSITY: (f32, f32) = (0.0, 3.0);
}

impl PatternConfig {
    /// Returns a copy with every numeric field clamped into [`limits`].
    pub fn sanitized(&self) -> Self {
        fn clamp(v: f32, (lo, hi): (f32, f32)) -> f32 {
            if v.is_nan() { lo } else { v.clamp(lo, hi) }
        }

        Self {
            size: clamp(self.size, limits::SIZE),
            point_size: clamp(self.point_size, limits::POINT_SIZE),
            density: self.density.clamp(limits::DENSITY.0, limits::DENSITY.1),
            rotation_speed: clamp(self.rotation_speed, limits::ROTATION_SPEED),
            noise_amplitude: clamp(self.noise_amplitude, limits::NOISE_AMPLITUDE),
            noise_frequency: clamp(self.noise_frequency, limits::NOISE_FREQUENCY),
            noise_speed: clamp(self.noise_speed, limits::NOISE_SPEED),
            opacity: clamp(self.opacity, limits::OPACITY),
            glow_intensity: clamp(self.glow_intensity, limits::GLOW_INTENSITY),
            ..self.clone()
        }
    }
}

/// A sparse set of field overrides.
///
/// Produced by the prompt parser and presets; merged onto a full
/// [`PatternConfig`] by shallow overwrite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialConfig {
    pub shape: Option<ShapeId>,
    pub style: Option<StyleId>,
    pub primary_color: Option<Rgb>,
    pub secondary_color: Option<Rgb>,
    pub background_color: Option<Rgb>,
    pub size: Option<f32>,
    pub noise_amplitude: Option<f32>,
    pub noise_frequency: Option<f32>,
    pub noise_speed: Option<f32>,
    pub point_size: Option<f32>,
    pub density: Option<u32>,
    pub opacity: Option<f32>,
    pub glow_intensity: Option<f32>,
    pub rotation_speed: Option<f32>,
}

impl PartialConfig {
    /// A partial with no fields set.
    pub const EMPTY: PartialConfig = PartialConfig {
        shape: None,
        style: None,
        primary_color: None,
        secondary_color: None,
        background_color: None,
        size: None,
        noise_amplitude: None,
        noise_frequency: None,
        noise_speed: None,
        point_size: None,
        density: None,
        opacity: None,
        glow_intensity: None,
        rotation_speed: None,
    };

    /// Number of fields this partial sets.
    pub fn len(&self) -> usize {
        [
            self.shape.is_some(),
            self.style.is_some(),
            self.primary_color.is_some(),
            self.secondary_color.is_some(),
            self.background_color.is_some(),
            self.size.is_some(),
            self.noise_amplitude.is_some(),
            self.noise_frequency.is_some(),
            self.noise_speed.is_some(),
            self.point_size.is_some(),
            self.density.is_some(),
            self.opacity.is_some(),
            self.glow_intensity.is_some(),
            self.rotation_speed.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrites every field set here onto `base`, leaving the rest alone.
    pub fn apply_to(&self, base: &PatternConfig) -> PatternConfig {
        let mut out = base.clone();
        if let Some(v) = self.shape { out.shape = v; }
        if let Some(v) = self.style { out.style = Some(v); }
        if let Some(v) = self.primary_color { out.primary_color = v; }
        if let Some(v) = self.secondary_color { out.secondary_color = v; }
        if let Some(v) = self.background_color { out.background_color = v; }
        if let Some(v) = self.size { out.size = v; }
        if let Some(v) = self.noise_amplitude { out.noise_amplitude = v; }
        if let Some(v) = self.noise_frequency { out.noise_frequency = v; }
        if let Some(v) = self.noise_speed { out.noise_speed = v; }
        if let Some(v) = self.point_size { out.point_size = v; }
        if let Some(v) = self.density { out.density = v; }
        if let Some(v) = self.opacity { out.opacity = v; }
        if let Some(v) = self.glow_intensity { out.glow_intensity = v; }
        if let Some(v) = self.rotation_speed { out.rotation_speed = v; }
        out
    }
}
