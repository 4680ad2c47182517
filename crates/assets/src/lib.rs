//! Lesson assets: vertex tables, wireframe edges, noise tint, textures and
//! screenshots.
//!
//! GPU code consumes these as plain `Pod` slices and owned pixel buffers;
//! nothing here touches a graphics API.

pub mod mesh;
pub mod noise;
mod screenshot;
mod texture;
mod wireframe;

pub use mesh::{ColorVertex, IndexedMesh, TexturedVertex};
pub use noise::{noise_tint, simplex2, tint_phase};
pub use screenshot::Screenshot;
pub use texture::{TextureImage, decode_texture, load_texture};
pub use wireframe::wireframe_indices;

use std::path::PathBuf;

/// Cube atlas bundled with the workspace, used when no texture path is given.
pub const DEFAULT_CUBE_TEXTURE: &[u8] = include_bytes!("../../../assets/CubeTexture.png");

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("image has no pixels")]
    EmptyImage,
    #[error("pixel buffer too short: expected {expected} bytes, got {actual}")]
    ShortBuffer { expected: usize, actual: usize },
}

pub fn crate_info() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"))
}
