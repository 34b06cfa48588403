//! 8-bit frame buffer and PNG output.

use crate::RenderError;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

/// Row-major 8-bit RGB pixels, (0, 0) at the top left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl FrameBuffer {
    /// Create a frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let index = self.index(x, y);
        self.pixels[index] = rgb;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| Rgb(self.get(x, y)))
    }

    /// Write the frame as an image, format chosen from the extension.
    /// Missing parent directories are created.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyFrame {
                width: self.width,
                height: self.height,
            });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        self.to_image().save(path)?;
        log::info!("Saved {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut frame = FrameBuffer::new(4, 3);
        assert_eq!(frame.pixels.len(), 12);
        frame.set(3, 2, [1, 2, 3]);
        assert_eq!(frame.get(3, 2), [1, 2, 3]);
        assert_eq!(frame.pixels[11], [1, 2, 3]);
        assert_eq!(frame.get(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_to_image() {
        let mut frame = FrameBuffer::new(2, 2);
        frame.set(1, 0, [255, 0, 0]);
        let image = frame.to_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(1, 0).0, [255, 0, 0]);
        assert_eq!(image.get_pixel(0, 1).0, [0, 0, 0]);
    }

    #[test]
    fn test_save_png() {
        let dir = std::env::temp_dir().join(format!("lumen_output_test_{}", std::process::id()));
        let path = dir.join("nested").join("frame.png");

        let mut frame = FrameBuffer::new(3, 2);
        frame.set(2, 1, [10, 20, 30]);
        frame.save(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(2, 1).0, [10, 20, 30]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_empty_frame_fails() {
        let frame = FrameBuffer::new(0, 5);
        let err = frame.save(std::env::temp_dir().join("lumen_empty.png")).unwrap_err();
        assert!(matches!(err, RenderError::EmptyFrame { width: 0, height: 5 }));
    }
}
