use crate::AssetError;
use image::{ExtendedColorType, ImageFormat};
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

/// An owned RGBA8 frame, rows ordered top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Screenshot {
    /// Build a frame from a GPU readback where every row is padded to
    /// `padded_bytes_per_row`. Set `bgra` when the source format stores blue
    /// first; channels are swapped to RGBA.
    pub fn from_padded_rows(
        data: &[u8],
        width: u32,
        height: u32,
        padded_bytes_per_row: u32,
        bgra: bool,
    ) -> Result<Self, AssetError> {
        let row = width as usize * 4;
        let stride = padded_bytes_per_row as usize;
        if width == 0 || height == 0 {
            return Err(AssetError::EmptyImage);
        }
        if stride < row || data.len() < stride * (height as usize - 1) + row {
            return Err(AssetError::ShortBuffer {
                expected: stride * height as usize,
                actual: data.len(),
            });
        }

        let mut rgba = Vec::with_capacity(row * height as usize);
        for y in 0..height as usize {
            rgba.extend_from_slice(&data[y * stride..y * stride + row]);
        }
        if bgra {
            for px in rgba.chunks_exact_mut(4) {
                px.swap(0, 2);
            }
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Encode as an opaque RGB PNG, dropping alpha.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AssetError> {
        let rgb: Vec<u8> = self
            .rgba
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        image::save_buffer_with_format(
            path,
            &rgb,
            self.width,
            self.height,
            ExtendedColorType::Rgb8,
            ImageFormat::Png,
        )?;
        Ok(())
    }

    /// Encode on a background thread. The frame is moved into the thread, so
    /// the render loop is free to draw the next frame immediately.
    pub fn spawn_save(self, path: PathBuf) -> JoinHandle<Result<PathBuf, AssetError>> {
        std::thread::spawn(move || {
            let result = self.save(&path);
            match &result {
                Ok(()) => tracing::info!(
                    path = %path.display(),
                    width = self.width,
                    height = self.height,
                    "screenshot saved"
                ),
                Err(e) => tracing::error!(path = %path.display(), "screenshot failed: {e}"),
            }
            result.map(|()| path)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_row_padding() {
        // 1x2 image, rows padded to 8 bytes
        let data = [1, 2, 3, 4, 0, 0, 0, 0, 5, 6, 7, 8, 0, 0, 0, 0];
        let shot = Screenshot::from_padded_rows(&data, 1, 2, 8, false).unwrap();
        assert_eq!(shot.rgba, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn last_row_may_skip_padding() {
        let data = [1, 2, 3, 4, 0, 0, 0, 0, 5, 6, 7, 8];
        let shot = Screenshot::from_padded_rows(&data, 1, 2, 8, false).unwrap();
        assert_eq!(shot.rgba.len(), 8);
    }

    #[test]
    fn swizzles_bgra() {
        let data = [10, 20, 30, 255];
        let shot = Screenshot::from_padded_rows(&data, 1, 1, 4, true).unwrap();
        assert_eq!(shot.rgba, vec![30, 20, 10, 255]);
    }

    #[test]
    fn rejects_short_buffer() {
        let err = Screenshot::from_padded_rows(&[0; 12], 2, 2, 8, false).unwrap_err();
        assert!(matches!(err, AssetError::ShortBuffer { .. }));
    }

    #[test]
    fn rejects_empty_frame() {
        let err = Screenshot::from_padded_rows(&[], 0, 4, 256, false).unwrap_err();
        assert!(matches!(err, AssetError::EmptyImage));
    }

    #[test]
    fn saves_png_in_background() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Screenshot.png");
        let shot = Screenshot {
            width: 2,
            height: 1,
            rgba: vec![255, 0, 0, 255, 0, 255, 0, 128],
        };

        let saved = shot.spawn_save(path.clone()).join().unwrap().unwrap();
        assert_eq!(saved, path);

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(1, 0).0, [0, 255, 0]);
    }
}
