//! # Output Module
//!
//! Writes rendered frames to disk as 8-bit PNG files.
//!
//! Pixels are already display-ready 8-bit values, so unlike an HDR pipeline
//! there is no tone mapping or gamma step. Alpha is dropped on export: the
//! framebuffer is opaque and only RGB is shown.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageResult, RgbaImage};
use log::info;

/// Save a rendered frame as an RGB PNG.
///
/// # Errors
///
/// Returns the encoder or I/O error, e.g. for an unwritable path or a path
/// whose extension is not `.png`.
///
/// # Examples
///
/// ```ignore
/// let canvas = ImageCanvas::new(800, 600);
/// save_image_as_png(canvas.image(), "frame.png")?;
/// ```
pub fn save_image_as_png(image: &RgbaImage, output_path: impl AsRef<Path>) -> ImageResult<()> {
    let output_path = output_path.as_ref();
    let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
    rgb.save(output_path)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Path for frame `index` of an animation written to `output_path`.
///
/// Single-frame renders use `output_path` unchanged; otherwise the frame
/// number is appended to the file stem, e.g. `render.png` -> `render_0007.png`.
pub fn frame_path(output_path: &Path, index: u32, frame_count: u32) -> PathBuf {
    if frame_count <= 1 {
        return output_path.to_path_buf();
    }
    let stem = output_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let file_name = match output_path.extension() {
        Some(ext) => format!("{}_{:04}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{:04}", stem, index),
    };
    output_path.with_file_name(file_name)
}
