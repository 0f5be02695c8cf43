use crate::coords::Viewport;

/// The current surface texture and the encoder recording the frame into it.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub view: &'a wgpu::TextureView,
    pub viewport: Viewport,
}
