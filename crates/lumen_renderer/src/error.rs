use lumen_core::SceneError;
use thiserror::Error;

/// Errors from rendering a frame or writing it out.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),

    #[error("cannot save an empty {width}x{height} frame")]
    EmptyFrame { width: u32, height: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
