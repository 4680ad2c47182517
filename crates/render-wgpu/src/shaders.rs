/// WGSL shader for vertex-colored geometry (triangle and flat-colored cube).
pub const COLOR_SHADER: &str = r#"
struct Uniforms {
    mvp: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.mvp * vec4<f32>(vertex.position, 1.0);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color, 1.0);
}
"#;

/// WGSL shader for atlas-textured cubes with an additive per-vertex tint.
pub const TEXTURE_SHADER: &str = r#"
struct Uniforms {
    mvp: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@group(1) @binding(0)
var atlas: texture_2d<f32>;
@group(1) @binding(1)
var atlas_sampler: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
    @location(2) tint: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) tint: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.mvp * vec4<f32>(vertex.position, 1.0);
    out.uv = vertex.uv;
    out.tint = vertex.tint;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let texel = textureSample(atlas, atlas_sampler, in.uv);
    let rgb = clamp(texel.rgb + in.tint * 0.25, vec3<f32>(0.0), vec3<f32>(1.0));
    return vec4<f32>(rgb, texel.a);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shaders_expose_expected_entry_points() {
        for src in [COLOR_SHADER, TEXTURE_SHADER] {
            assert!(src.contains("fn vs_main"));
            assert!(src.contains("fn fs_main"));
            assert!(src.contains("uniforms.mvp"));
        }
    }

    #[test]
    fn texture_shader_binds_atlas_in_group_one() {
        assert!(TEXTURE_SHADER.contains("@group(1) @binding(0)"));
        assert!(TEXTURE_SHADER.contains("@group(1) @binding(1)"));
    }
}
