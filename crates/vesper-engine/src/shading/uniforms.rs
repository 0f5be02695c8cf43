use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use vesper_pattern::PatternConfig;

use crate::coords::Viewport;

/// Camera-dependent inputs, refreshed every frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewUniforms {
    pub view_proj: Mat4,
    pub view: Mat4,
    pub camera_position: Vec3,
    pub viewport: Viewport,
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            viewport: Viewport::default(),
        }
    }
}

/// CPU mirror of `Uniforms` in `shaders/common.wgsl`.
///
/// Scalars are packed into the fourth lane of each `vec3` so the layout is
/// identical under WGSL uniform rules.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PatternUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub time: f32,
    pub color: [f32; 3],
    pub noise_amplitude: f32,
    pub secondary_color: [f32; 3],
    pub noise_frequency: f32,
    pub size: f32,
    pub opacity: f32,
    pub glow_intensity: f32,
    pub point_size: f32,
    pub viewport: [f32; 2],
    pub _pad: [f32; 2],
}

impl PatternUniforms {
    /// Fills the block from a configuration snapshot.
    ///
    /// `time` is already scaled by the noise speed; `rotation` is the
    /// object's accumulated angle around Y.
    pub fn new(config: &PatternConfig, time: f32, rotation: f32, view: &ViewUniforms) -> Self {
        Self {
            view_proj: view.view_proj.to_cols_array_2d(),
            view: view.view.to_cols_array_2d(),
            model: Mat4::from_rotation_y(rotation).to_cols_array_2d(),
            camera_position: view.camera_position.to_array(),
            time,
            color: config.primary_color.to_f32(),
            noise_amplitude: config.noise_amplitude,
            secondary_color: config.secondary_color.to_f32(),
            noise_frequency: config.noise_frequency,
            size: config.size,
            opacity: config.opacity,
            glow_intensity: config.glow_intensity,
            point_size: config.point_size,
            viewport: view.viewport.to_f32(),
            _pad: [0.0; 2],
        }
    }

    /// Size in bytes; matches the WGSL struct.
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::offset_of;
    use vesper_pattern::Rgb;

    #[test]
    fn layout_matches_wgsl_block() {
        assert_eq!(PatternUniforms::SIZE, 272);
        assert_eq!(offset_of!(PatternUniforms, camera_position), 192);
        assert_eq!(offset_of!(PatternUniforms, time), 204);
        assert_eq!(offset_of!(PatternUniforms, color), 208);
        assert_eq!(offset_of!(PatternUniforms, secondary_color), 224);
        assert_eq!(offset_of!(PatternUniforms, size), 240);
        assert_eq!(offset_of!(PatternUniforms, point_size), 252);
        assert_eq!(offset_of!(PatternUniforms, viewport), 256);
    }

    #[test]
    fn colors_are_passed_unconverted() {
        let config = PatternConfig {
            primary_color: Rgb::from_u32(0xff8000),
            secondary_color: Rgb::BLACK,
            ..PatternConfig::default()
        };
        let u = PatternUniforms::new(&config, 0.0, 0.0, &ViewUniforms::default());
        assert_eq!(u.color, [1.0, 128.0 / 255.0, 0.0]);
        assert_eq!(u.secondary_color, [0.0; 3]);
        assert_eq!(u.size, config.size);
        assert_eq!(u.point_size, config.point_size);
    }

    #[test]
    fn model_matrix_rotates_about_y() {
        let config = PatternConfig::default();
        let u = PatternUniforms::new(&config, 1.5, std::f32::consts::FRAC_PI_2, &ViewUniforms::default());
        let model = Mat4::from_cols_array_2d(&u.model);
        let x = model.transform_point3(Vec3::X);
        assert!(x.abs_diff_eq(-Vec3::Z, 1e-6));
        assert_eq!(model.transform_point3(Vec3::Y), Vec3::Y);
        assert_eq!(u.time, 1.5);
    }
}
