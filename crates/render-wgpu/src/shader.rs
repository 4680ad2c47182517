//! Compile-and-link helper: WGSL source in, validated render pipeline out.
//!
//! wgpu reports validation failures asynchronously through error scopes.
//! Each step runs inside its own scope so a broken shader or mismatched
//! pipeline layout comes back as a `RenderError` instead of reaching the
//! device's uncaptured-error handler.

use crate::RenderError;

/// Compile WGSL source into a shader module.
pub fn compile(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, RenderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        return Err(RenderError::ShaderCompile {
            label: label.to_string(),
            message: err.to_string(),
        });
    }
    tracing::debug!(label, "shader compiled");
    Ok(module)
}

/// Everything that varies between the lesson pipelines.
pub struct PipelineSpec<'a> {
    pub label: &'a str,
    pub module: &'a wgpu::ShaderModule,
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    pub vertex_buffers: &'a [wgpu::VertexBufferLayout<'a>],
    pub topology: wgpu::PrimitiveTopology,
    pub color_format: wgpu::TextureFormat,
}

/// Link a compiled module's `vs_main`/`fs_main` into a render pipeline.
pub fn link(
    device: &wgpu::Device,
    spec: &PipelineSpec<'_>,
) -> Result<wgpu::RenderPipeline, RenderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(spec.label),
        bind_group_layouts: spec.bind_group_layouts,
        push_constant_ranges: &[],
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(spec.label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: spec.module,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: spec.vertex_buffers,
        },
        fragment: Some(wgpu::FragmentState {
            module: spec.module,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: spec.color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        // The lesson meshes do not share a consistent winding, so nothing is culled.
        primitive: wgpu::PrimitiveState {
            topology: spec.topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: crate::gpu::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: Default::default(),
            bias: Default::default(),
        }),
        multisample: Default::default(),
        multiview: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        return Err(RenderError::PipelineLink {
            label: spec.label.to_string(),
            message: err.to_string(),
        });
    }
    tracing::debug!(label = spec.label, topology = ?spec.topology, "pipeline linked");
    Ok(pipeline)
}
