use crate::AssetError;
use std::path::Path;

/// Decoded RGBA8 pixels ready for upload, rows ordered bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

/// Decode an in-memory PNG or JPEG into RGBA8.
///
/// The image is flipped vertically on load so that `v = 0` samples the
/// bottom row, which is what the atlas UVs are authored against.
pub fn decode_texture(bytes: &[u8]) -> Result<TextureImage, AssetError> {
    let img = image::load_from_memory(bytes)?.flipv().to_rgba8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::EmptyImage);
    }
    tracing::debug!(width, height, "decoded texture");
    Ok(TextureImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

/// Read and decode a texture file.
pub fn load_texture(path: impl AsRef<Path>) -> Result<TextureImage, AssetError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_texture(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    /// 2x2 PNG: red on the top row, blue on the bottom row.
    fn two_row_png() -> Vec<u8> {
        let mut img = RgbaImage::new(2, 2);
        for x in 0..2 {
            img.put_pixel(x, 0, Rgba([255, 0, 0, 255]));
            img.put_pixel(x, 1, Rgba([0, 0, 255, 255]));
        }
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decode_flips_rows() {
        let tex = decode_texture(&two_row_png()).unwrap();
        assert_eq!((tex.width, tex.height), (2, 2));
        assert_eq!(tex.pixels.len(), 16);
        // first row in memory is the image's bottom row
        assert_eq!(&tex.pixels[0..4], &[0, 0, 255, 255]);
        assert_eq!(&tex.pixels[8..12], &[255, 0, 0, 255]);
        assert_eq!(tex.bytes_per_row(), 8);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode_texture(b"definitely not a png").unwrap_err();
        assert!(matches!(err, AssetError::Image(_)));
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let err = load_texture("/nonexistent/CubeTexture.png").unwrap_err();
        assert!(err.to_string().contains("CubeTexture.png"));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tex.png");
        std::fs::write(&path, two_row_png()).unwrap();
        let tex = load_texture(&path).unwrap();
        assert_eq!(tex.width, 2);
    }
}
