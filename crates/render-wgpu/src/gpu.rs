use crate::RenderError;
use crate::shader::{self, PipelineSpec};
use crate::shaders;
use crate::texture::GpuTexture;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use spincube_assets::{
    ColorVertex, Screenshot, TextureImage, TexturedVertex, mesh, noise_tint, tint_phase,
    wireframe_indices,
};
use spincube_common::Lesson;
use spincube_render::Scene;
use std::time::SystemTime;
use wgpu::util::DeviceExt;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    mvp: [[f32; 4]; 4],
}

const COLOR_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<ColorVertex>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
    ],
};

const TEXTURED_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<TexturedVertex>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x2,
    ],
};

const TINT_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<[f32; 3]>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &wgpu::vertex_attr_array![2 => Float32x3],
};

/// Which draw call a frame issues. Counts come from the uploaded geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPlan {
    /// Non-indexed triangle list.
    Triangles,
    /// Indexed triangle list.
    Indexed,
    /// Indexed line list built from the triangle edges.
    Wireframe,
}

/// Pick the draw call for a lesson. Wireframe only applies to the indexed lesson.
pub fn draw_plan(lesson: Lesson, wireframe: bool) -> DrawPlan {
    match lesson {
        Lesson::Triangle | Lesson::Cube | Lesson::Texture => DrawPlan::Triangles,
        Lesson::Indexed if wireframe => DrawPlan::Wireframe,
        Lesson::Indexed => DrawPlan::Indexed,
    }
}

enum Geometry {
    Colored {
        vertices: wgpu::Buffer,
        count: u32,
    },
    Textured {
        vertices: wgpu::Buffer,
        tint: wgpu::Buffer,
        count: u32,
    },
    Indexed {
        vertices: wgpu::Buffer,
        tint: wgpu::Buffer,
        tint_len: usize,
        triangles: wgpu::Buffer,
        triangle_count: u32,
        lines: wgpu::Buffer,
        line_count: u32,
    },
}

/// wgpu renderer for a single lesson.
///
/// Geometry and textures are uploaded once at construction; each frame only
/// rewrites the MVP uniform (and the noise tint for the indexed lesson).
pub struct WgpuRenderer {
    lesson: Lesson,
    pipeline: wgpu::RenderPipeline,
    wireframe_pipeline: Option<wgpu::RenderPipeline>,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    atlas: Option<GpuTexture>,
    geometry: Geometry,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
    size: (u32, u32),
}

impl WgpuRenderer {
    /// Build pipelines and upload geometry for `lesson`. Textured lessons
    /// need `texture`.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        lesson: Lesson,
        texture: Option<&TextureImage>,
    ) -> Result<Self, RenderError> {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                mvp: Mat4::IDENTITY.to_cols_array_2d(),
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let (pipeline, wireframe_pipeline, atlas, geometry) = if lesson.textured() {
            let image = texture.ok_or(RenderError::MissingTexture(lesson))?;
            let atlas_layout = GpuTexture::bind_group_layout(device);
            let atlas = GpuTexture::upload(device, queue, &atlas_layout, image);
            let module = shader::compile(device, "texture_shader", shaders::TEXTURE_SHADER)?;
            let layouts = [&uniform_layout, &atlas_layout];
            let buffers = [TEXTURED_LAYOUT, TINT_LAYOUT];
            let mut spec = PipelineSpec {
                label: "texture_pipeline",
                module: &module,
                bind_group_layouts: &layouts,
                vertex_buffers: &buffers,
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format: surface_format,
            };
            let pipeline = shader::link(device, &spec)?;
            let wireframe = if lesson.indexed() {
                spec.label = "wireframe_pipeline";
                spec.topology = wgpu::PrimitiveTopology::LineList;
                Some(shader::link(device, &spec)?)
            } else {
                None
            };
            let geometry = Self::upload_textured(device, lesson);
            (pipeline, wireframe, Some(atlas), geometry)
        } else {
            let module = shader::compile(device, "color_shader", shaders::COLOR_SHADER)?;
            let pipeline = shader::link(
                device,
                &PipelineSpec {
                    label: "color_pipeline",
                    module: &module,
                    bind_group_layouts: &[&uniform_layout],
                    vertex_buffers: &[COLOR_LAYOUT],
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    color_format: surface_format,
                },
            )?;
            let vertices = if lesson == Lesson::Triangle {
                mesh::triangle()
            } else {
                mesh::colored_cube()
            };
            let geometry = Geometry::Colored {
                vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("color_vertex_buffer"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                count: vertices.len() as u32,
            };
            (pipeline, None, None, geometry)
        };

        tracing::info!(%lesson, ?surface_format, width, height, "renderer ready");

        Ok(Self {
            lesson,
            pipeline,
            wireframe_pipeline,
            uniform_buffer,
            uniform_bind_group,
            atlas,
            geometry,
            depth_texture: Self::create_depth_texture(device, width, height),
            surface_format,
            size: (width.max(1), height.max(1)),
        })
    }

    fn upload_textured(device: &wgpu::Device, lesson: Lesson) -> Geometry {
        let tint_buffer = |len: usize| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("tint_buffer"),
                contents: bytemuck::cast_slice(&vec![[0.0f32; 3]; len]),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            })
        };

        if lesson.indexed() {
            let cube = mesh::indexed_cube();
            let lines = wireframe_indices(&cube.indices);
            let index_buffer = |label, data: &[u32]| {
                device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(label),
                    contents: bytemuck::cast_slice(data),
                    usage: wgpu::BufferUsages::INDEX,
                })
            };
            Geometry::Indexed {
                vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("indexed_vertex_buffer"),
                    contents: bytemuck::cast_slice(&cube.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                tint: tint_buffer(cube.vertices.len()),
                tint_len: cube.vertices.len(),
                triangles: index_buffer("triangle_index_buffer", &cube.indices),
                triangle_count: cube.indices.len() as u32,
                lines: index_buffer("wireframe_index_buffer", &lines),
                line_count: lines.len() as u32,
            }
        } else {
            let cube = mesh::textured_cube();
            Geometry::Textured {
                vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("textured_vertex_buffer"),
                    contents: bytemuck::cast_slice(&cube),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                tint: tint_buffer(cube.len()),
                count: cube.len() as u32,
            }
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.size = (width.max(1), height.max(1));
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    /// Render one frame of `scene` into `target`.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        scene: &Scene,
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                mvp: scene.model_view_projection().to_cols_array_2d(),
            }),
        );

        if let Geometry::Indexed { tint, tint_len, .. } = &self.geometry {
            let colors = noise_tint(*tint_len, tint_phase(SystemTime::now()));
            queue.write_buffer(tint, 0, bytemuck::cast_slice(&colors));
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            if let Some(atlas) = &self.atlas {
                pass.set_bind_group(1, &atlas.bind_group, &[]);
            }

            match &self.geometry {
                Geometry::Colored { vertices, count } => {
                    pass.set_pipeline(&self.pipeline);
                    pass.set_vertex_buffer(0, vertices.slice(..));
                    pass.draw(0..*count, 0..1);
                }
                Geometry::Textured {
                    vertices,
                    tint,
                    count,
                } => {
                    pass.set_pipeline(&self.pipeline);
                    pass.set_vertex_buffer(0, vertices.slice(..));
                    pass.set_vertex_buffer(1, tint.slice(..));
                    pass.draw(0..*count, 0..1);
                }
                Geometry::Indexed {
                    vertices,
                    tint,
                    triangles,
                    triangle_count,
                    lines,
                    line_count,
                    ..
                } => {
                    pass.set_vertex_buffer(0, vertices.slice(..));
                    pass.set_vertex_buffer(1, tint.slice(..));
                    match (
                        draw_plan(self.lesson, scene.wireframe),
                        &self.wireframe_pipeline,
                    ) {
                        (DrawPlan::Wireframe, Some(wireframe)) => {
                            pass.set_pipeline(wireframe);
                            pass.set_index_buffer(lines.slice(..), wgpu::IndexFormat::Uint32);
                            pass.draw_indexed(0..*line_count, 0, 0..1);
                        }
                        _ => {
                            pass.set_pipeline(&self.pipeline);
                            pass.set_index_buffer(triangles.slice(..), wgpu::IndexFormat::Uint32);
                            pass.draw_indexed(0..*triangle_count, 0, 0..1);
                        }
                    }
                }
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    /// Render `scene` offscreen and read the pixels back into an owned frame.
    ///
    /// Blocks until the GPU copy completes, so the returned buffer is
    /// independent of any later frame.
    pub fn capture(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &Scene,
    ) -> Result<Screenshot, RenderError> {
        let bgra = capture_is_bgra(self.surface_format)?;
        let (width, height) = self.size;
        let extent = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let target = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("capture_target"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.surface_format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = target.create_view(&wgpu::TextureViewDescriptor::default());
        self.render(device, queue, &view, scene);

        let bytes_per_row = padded_bytes_per_row(width);
        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("capture_readback"),
            size: bytes_per_row as u64 * height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("capture_encoder"),
        });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &target,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(bytes_per_row),
                    rows_per_image: Some(height),
                },
            },
            extent,
        );
        queue.submit(std::iter::once(encoder.finish()));

        let slice = readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        let _ = device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .map_err(|_| RenderError::Readback("map callback was dropped".into()))?
            .map_err(|e| RenderError::Readback(e.to_string()))?;

        let shot = {
            let data = slice.get_mapped_range();
            Screenshot::from_padded_rows(&data, width, height, bytes_per_row, bgra)?
        };
        readback.unmap();

        tracing::debug!(width, height, "frame captured");
        Ok(shot)
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

/// Row pitch for texture-to-buffer copies, rounded up to wgpu's alignment.
pub fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * 4;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

/// Whether captured bytes need a BGRA to RGBA swap. Only 8-bit four-channel
/// formats can be captured.
pub fn capture_is_bgra(format: wgpu::TextureFormat) -> Result<bool, RenderError> {
    match format {
        wgpu::TextureFormat::Rgba8Unorm | wgpu::TextureFormat::Rgba8UnormSrgb => Ok(false),
        wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Bgra8UnormSrgb => Ok(true),
        other => Err(RenderError::UnsupportedCaptureFormat(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_padding_is_aligned() {
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(800), 3328);
        assert_eq!(padded_bytes_per_row(800) % wgpu::COPY_BYTES_PER_ROW_ALIGNMENT, 0);
    }

    #[test]
    fn capture_formats() {
        assert!(!capture_is_bgra(wgpu::TextureFormat::Rgba8UnormSrgb).unwrap());
        assert!(capture_is_bgra(wgpu::TextureFormat::Bgra8UnormSrgb).unwrap());
        assert!(capture_is_bgra(wgpu::TextureFormat::Rgba16Float).is_err());
    }

    #[test]
    fn only_indexed_lesson_draws_wireframe() {
        assert_eq!(draw_plan(Lesson::Indexed, false), DrawPlan::Indexed);
        assert_eq!(draw_plan(Lesson::Indexed, true), DrawPlan::Wireframe);
        for lesson in [Lesson::Triangle, Lesson::Cube, Lesson::Texture] {
            assert_eq!(draw_plan(lesson, true), DrawPlan::Triangles);
        }
    }

    #[test]
    fn uniform_is_one_matrix() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 64);
    }

    #[test]
    fn vertex_layout_strides() {
        assert_eq!(COLOR_LAYOUT.array_stride, 24);
        assert_eq!(TEXTURED_LAYOUT.array_stride, 20);
        assert_eq!(TINT_LAYOUT.array_stride, 12);
    }
}
