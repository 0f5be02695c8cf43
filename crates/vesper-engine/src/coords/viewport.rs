use winit::dpi::PhysicalSize;

/// Drawable size in physical pixels, never smaller than 1x1.
///
/// Everything sized from the window (camera aspect, offscreen targets, the
/// sprite-size uniform) goes through this type so a minimized or zero-sized
/// window cannot produce a division by zero or an invalid texture.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }

    #[inline]
    pub fn from_size(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }

    #[inline]
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }

    #[inline]
    pub fn to_f32(self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_clamp_to_one() {
        let v = Viewport::from_size(PhysicalSize::new(0, 0));
        assert_eq!(v, Viewport::new(1, 1));
        assert_eq!(v.aspect(), 1.0);
    }

    #[test]
    fn aspect_ratio() {
        assert_eq!(Viewport::new(1920, 1080).aspect(), 1920.0 / 1080.0);
        assert_eq!(Viewport::new(800, 0).aspect(), 800.0);
    }
}
