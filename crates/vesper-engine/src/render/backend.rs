use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::geometry::{Geometry, MeshVertex};
use crate::scene::{RenderObject, Renderable, ShadingBackend};
use crate::shading::{BlendMode, PatternUniforms, RenderMode, ShaderDef, Side};

use super::canvas::{CANVAS_FORMAT, DEPTH_FORMAT, SAMPLE_COUNT};

// ── sprite quad ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct Corner {
    offset: [f32; 2],
}

impl Corner {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Corner>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_CORNERS: [Corner; 4] = [
    Corner { offset: [-0.5, -0.5] },
    Corner { offset: [0.5, -0.5] },
    Corner { offset: [0.5, 0.5] },
    Corner { offset: [-0.5, 0.5] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── blend ─────────────────────────────────────────────────────────────────

fn blend_state(def: &ShaderDef) -> Option<wgpu::BlendState> {
    if !def.blends() {
        return None;
    }

    let component = |src, dst| wgpu::BlendComponent {
        src_factor: src,
        dst_factor: dst,
        operation: wgpu::BlendOperation::Add,
    };

    use wgpu::BlendFactor as F;
    Some(match def.blend {
        BlendMode::Normal => wgpu::BlendState {
            color: component(F::SrcAlpha, F::OneMinusSrcAlpha),
            alpha: component(F::One, F::OneMinusSrcAlpha),
        },
        BlendMode::Additive => wgpu::BlendState {
            color: component(F::SrcAlpha, F::One),
            alpha: component(F::SrcAlpha, F::One),
        },
    })
}

/// Cull mode of each pass, in draw order.
fn cull_passes(def: &ShaderDef) -> Vec<Option<wgpu::Face>> {
    if def.mode == RenderMode::Points || def.wireframe {
        return vec![None];
    }
    if def.split_back_faces() {
        return vec![Some(wgpu::Face::Front), Some(wgpu::Face::Back)];
    }
    match def.side {
        Side::Front => vec![Some(wgpu::Face::Back)],
        Side::Double => vec![None],
    }
}

// ── handles ───────────────────────────────────────────────────────────────

/// Uploaded vertex data. For wireframe styles the index buffer holds edges.
pub struct GpuGeometry {
    vertices: wgpu::Buffer,
    vertex_count: u32,
    indices: Option<(wgpu::Buffer, u32)>,
}

pub struct GpuProgram {
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// One pipeline per pass, drawn in order.
    passes: Vec<wgpu::RenderPipeline>,
}

/// [`ShadingBackend`] on top of wgpu, drawing into the canvas.
pub struct WgpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    bind_group_layout: wgpu::BindGroupLayout,
    pipeline_layout: wgpu::PipelineLayout,
    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,
}

impl WgpuBackend {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("vesper pattern bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(PatternUniforms::SIZE),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("vesper pattern pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let quad_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vesper sprite quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vesper sprite quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            device: device.clone(),
            queue: queue.clone(),
            bind_group_layout,
            pipeline_layout,
            quad_vbo,
            quad_ibo,
        }
    }

    /// Records the draw calls for `object` into a scene pass.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, object: &RenderObject<Self>) {
        let program = object.program();
        pass.set_bind_group(0, &program.bind_group, &[]);

        for pipeline in &program.passes {
            pass.set_pipeline(pipeline);
            match object.renderable() {
                Renderable::Mesh(geo) => {
                    pass.set_vertex_buffer(0, geo.vertices.slice(..));
                    match &geo.indices {
                        Some((ibo, count)) => {
                            pass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
                            pass.draw_indexed(0..*count, 0, 0..1);
                        }
                        None => pass.draw(0..geo.vertex_count, 0..1),
                    }
                }
                Renderable::Points(geo) => {
                    pass.set_vertex_buffer(0, geo.vertices.slice(..));
                    pass.set_vertex_buffer(1, self.quad_vbo.slice(..));
                    pass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
                    pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..geo.vertex_count);
                }
            }
        }
    }

    fn create_pipeline(
        &self,
        def: &ShaderDef,
        vertex: &wgpu::ShaderModule,
        fragment: &wgpu::ShaderModule,
        cull_mode: Option<wgpu::Face>,
    ) -> wgpu::RenderPipeline {
        let mesh_buffers = [MeshVertex::layout()];
        let point_buffers = [MeshVertex::instance_layout(), Corner::layout()];
        let buffers: &[wgpu::VertexBufferLayout<'_>] = match def.mode {
            RenderMode::Mesh => &mesh_buffers,
            RenderMode::Points => &point_buffers,
        };

        let topology = if def.wireframe {
            wgpu::PrimitiveTopology::LineList
        } else {
            wgpu::PrimitiveTopology::TriangleList
        };

        self.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(def.style.name()),
            layout: Some(&self.pipeline_layout),
            vertex: wgpu::VertexState {
                module: vertex,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers,
            },
            fragment: Some(wgpu::FragmentState {
                module: fragment,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: CANVAS_FORMAT,
                    blend: blend_state(def),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: def.depth_write,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: SAMPLE_COUNT,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview_mask: None,
            cache: None,
        })
    }
}

impl ShadingBackend for WgpuBackend {
    type Geometry = GpuGeometry;
    type Program = GpuProgram;

    fn upload_geometry(&mut self, geometry: &Geometry, def: &ShaderDef) -> GpuGeometry {
        let vertices = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vesper pattern vbo"),
            contents: bytemuck::cast_slice(&geometry.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_data = match def.mode {
            RenderMode::Points => None,
            RenderMode::Mesh if def.wireframe => Some(geometry.wireframe_indices()),
            RenderMode::Mesh => geometry.indices.clone(),
        };
        let indices = index_data.map(|data| {
            let buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("vesper pattern ibo"),
                contents: bytemuck::cast_slice(&data),
                usage: wgpu::BufferUsages::INDEX,
            });
            (buffer, data.len() as u32)
        });

        GpuGeometry {
            vertices,
            vertex_count: geometry.vertex_count() as u32,
            indices,
        }
    }

    fn compile_program(&mut self, def: &'static ShaderDef) -> GpuProgram {
        let vertex = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vesper pattern vertex"),
            source: wgpu::ShaderSource::Wgsl(def.vertex.into()),
        });
        let fragment = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(def.style.name()),
            source: wgpu::ShaderSource::Wgsl(def.fragment.into()),
        });

        let passes = cull_passes(def)
            .into_iter()
            .map(|cull| self.create_pipeline(def, &vertex, &fragment, cull))
            .collect();

        let uniforms = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vesper pattern ubo"),
            size: PatternUniforms::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("vesper pattern bind group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            }],
        });

        GpuProgram {
            uniforms,
            bind_group,
            passes,
        }
    }

    fn set_uniforms(&mut self, program: &mut GpuProgram, uniforms: &PatternUniforms) {
        self.queue
            .write_buffer(&program.uniforms, 0, bytemuck::bytes_of(uniforms));
    }

    fn release_geometry(&mut self, geometry: GpuGeometry) {
        geometry.vertices.destroy();
        if let Some((ibo, _)) = geometry.indices {
            ibo.destroy();
        }
    }

    fn release_program(&mut self, program: GpuProgram) {
        program.uniforms.destroy();
    }
}
