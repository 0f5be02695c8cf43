//! Retained offscreen render target.
//!
//! The scene is drawn multisampled into the canvas, resolved into a texture
//! that survives until the next frame, and blitted to the surface. Snapshots
//! read the resolved texture, so they always see the last completed frame.

use anyhow::{Context, Result};
use vesper_pattern::Rgb;

use crate::coords::Viewport;

/// Canvas color format. RGBA order so snapshots need no swizzle.
pub const CANVAS_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const SAMPLE_COUNT: u32 = 4;

const BYTES_PER_PIXEL: u32 = 4;

/// Pixels of one completed frame, tightly packed RGBA8, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

struct Targets {
    size: Viewport,
    msaa_view: wgpu::TextureView,
    resolved: wgpu::Texture,
    resolved_view: wgpu::TextureView,
    depth_view: wgpu::TextureView,
}

impl Targets {
    fn new(device: &wgpu::Device, size: Viewport) -> Self {
        let extent = wgpu::Extent3d {
            width: size.width,
            height: size.height,
            depth_or_array_layers: 1,
        };
        let texture = |label, format, sample_count, usage| {
            device.create_texture(&wgpu::TextureDescriptor {
                label: Some(label),
                size: extent,
                mip_level_count: 1,
                sample_count,
                dimension: wgpu::TextureDimension::D2,
                format,
                usage,
                view_formats: &[],
            })
        };

        let msaa = texture(
            "vesper canvas msaa",
            CANVAS_FORMAT,
            SAMPLE_COUNT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let resolved = texture(
            "vesper canvas",
            CANVAS_FORMAT,
            1,
            wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_SRC,
        );
        let depth = texture(
            "vesper canvas depth",
            DEPTH_FORMAT,
            SAMPLE_COUNT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );

        Self {
            size,
            msaa_view: msaa.create_view(&wgpu::TextureViewDescriptor::default()),
            resolved_view: resolved.create_view(&wgpu::TextureViewDescriptor::default()),
            resolved,
            depth_view: depth.create_view(&wgpu::TextureViewDescriptor::default()),
        }
    }
}

pub struct Canvas {
    targets: Targets,
    blit_pipeline: wgpu::RenderPipeline,
    blit_layout: wgpu::BindGroupLayout,
    blit_bind_group: wgpu::BindGroup,
}

impl Canvas {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat, size: Viewport) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vesper blit shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
        });

        let blit_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("vesper blit bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: false },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("vesper blit pipeline layout"),
            bind_group_layouts: &[&blit_layout],
            immediate_size: 0,
        });

        let blit_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("vesper blit pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let targets = Targets::new(device, size);
        let blit_bind_group = blit_bind_group(device, &blit_layout, &targets.resolved_view);

        Self {
            targets,
            blit_pipeline,
            blit_layout,
            blit_bind_group,
        }
    }

    pub fn size(&self) -> Viewport {
        self.targets.size
    }

    /// Recreates the targets for `size`. The previous contents are lost.
    pub fn resize(&mut self, device: &wgpu::Device, size: Viewport) {
        if size == self.targets.size {
            return;
        }
        self.targets = Targets::new(device, size);
        self.blit_bind_group = blit_bind_group(device, &self.blit_layout, &self.targets.resolved_view);
        log::debug!("canvas resized to {}x{}", size.width, size.height);
    }

    /// Starts the scene pass: clears color to `clear` and depth to 1, and
    /// resolves into the retained texture when the pass ends.
    pub fn begin_scene_pass<'e>(
        &self,
        encoder: &'e mut wgpu::CommandEncoder,
        clear: Rgb,
    ) -> wgpu::RenderPass<'e> {
        let [r, g, b] = clear.to_f32();
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("vesper scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.targets.msaa_view,
                resolve_target: Some(&self.targets.resolved_view),
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Discard,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.targets.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }

    /// Copies the retained texture onto `surface_view`.
    pub fn blit(&self, encoder: &mut wgpu::CommandEncoder, surface_view: &wgpu::TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("vesper blit pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: surface_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        pass.set_pipeline(&self.blit_pipeline);
        pass.set_bind_group(0, &self.blit_bind_group, &[]);
        pass.draw(0..3, 0..1);
    }

    /// Reads back the last completed frame. Blocks until the copy is done.
    pub fn read_pixels(&self, device: &wgpu::Device, queue: &wgpu::Queue) -> Result<Snapshot> {
        let Viewport { width, height } = self.targets.size;
        let padded_row = padded_bytes_per_row(width);

        let staging = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vesper snapshot staging"),
            size: padded_row as u64 * height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("vesper snapshot encoder"),
        });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &self.targets.resolved,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &staging,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        queue.submit(std::iter::once(encoder.finish()));

        let slice = staging.slice(..);
        let (tx, rx) = futures::channel::oneshot::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        device
            .poll(wgpu::PollType::wait_indefinitely())
            .context("failed to wait for snapshot copy")?;
        pollster::block_on(rx)
            .context("snapshot mapping was cancelled")?
            .context("failed to map snapshot buffer")?;

        let rgba = {
            let data = slice.get_mapped_range();
            strip_row_padding(&data, width, height, padded_row)
        };
        staging.unmap();

        Ok(Snapshot { width, height, rgba })
    }
}

fn blit_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("vesper blit bind group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::TextureView(view),
        }],
    })
}

/// Row pitch for texture-to-buffer copies, rounded up to the copy alignment.
fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * BYTES_PER_PIXEL;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

fn strip_row_padding(data: &[u8], width: u32, height: u32, padded_row: u32) -> Vec<u8> {
    let row = (width * BYTES_PER_PIXEL) as usize;
    let mut out = Vec::with_capacity(row * height as usize);
    for chunk in data.chunks(padded_row as usize).take(height as usize) {
        out.extend_from_slice(&chunk[..row]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::test_support::validate_shader;

    #[test]
    fn rows_are_padded_to_copy_alignment() {
        assert_eq!(padded_bytes_per_row(1), 256);
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(1280), 5120);
    }

    #[test]
    fn padding_is_stripped_per_row() {
        let (width, height) = (3u32, 2u32);
        let padded = padded_bytes_per_row(width);
        let mut data = vec![0xeeu8; (padded * height) as usize];
        for y in 0..height {
            for x in 0..width * 4 {
                data[(y * padded + x) as usize] = (y * 100 + x) as u8;
            }
        }

        let out = strip_row_padding(&data, width, height, padded);
        assert_eq!(out.len(), 24);
        assert_eq!(&out[..3], &[0, 1, 2]);
        assert_eq!(&out[12..15], &[100, 101, 102]);
        assert!(!out.contains(&0xee));
    }

    #[test]
    fn blit_program_validates() {
        validate_shader("blit", include_str!("shaders/blit.wgsl"));
    }
}
