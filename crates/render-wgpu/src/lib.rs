//! wgpu backend for the spinning-cube lessons.
//!
//! Builds one pipeline set per lesson, uploads its meshes and textures once,
//! then renders a [`spincube_render::Scene`] each frame. Frames can also be
//! rendered offscreen and read back for screenshots.
//!
//! # Invariants
//! - The renderer never mutates the scene.
//! - The wireframe pipeline exists only for the indexed lesson.

mod gpu;
pub mod shader;
pub mod shaders;
mod texture;

pub use gpu::{DrawPlan, WgpuRenderer, capture_is_bgra, draw_plan, padded_bytes_per_row};
pub use texture::GpuTexture;

use spincube_assets::AssetError;
use spincube_common::Lesson;

/// Errors raised while building pipelines or reading frames back.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("shader '{label}' failed to compile: {message}")]
    ShaderCompile { label: String, message: String },
    #[error("pipeline '{label}' failed to link: {message}")]
    PipelineLink { label: String, message: String },
    #[error("lesson '{0}' needs a texture")]
    MissingTexture(Lesson),
    #[error("cannot capture frames in format {0:?}")]
    UnsupportedCaptureFormat(wgpu::TextureFormat),
    #[error("frame readback failed: {0}")]
    Readback(String),
    #[error(transparent)]
    Asset(#[from] AssetError),
}
