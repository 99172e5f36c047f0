//! PNG input and output for pixel buffers.

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::error::{FurnishError, Result};
use crate::types::PixelBuffer;

/// Decode an image file (PNG or JPEG) into an RGBA buffer.
pub fn load_png(path: &Path) -> Result<PixelBuffer> {
    let image = image::open(path).map_err(|e| FurnishError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;

    Ok(PixelBuffer::from_image(image.to_rgba8()))
}

/// Write a buffer to a PNG file, creating parent directories as needed.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FurnishError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    buffer
        .as_image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| FurnishError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

/// Encode a buffer as PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    buffer
        .as_image()
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| FurnishError::Image {
            message: format!("Failed to encode PNG: {}", e),
        })?;

    Ok(bytes.into_inner())
}
