//! I/O helpers for the demo tools and tests.
//!
//! - `load_bgr_image`: read a PNG/JPEG/etc. into an owned interleaved BGR buffer.
//! - `save_bgr_image`: write a `BgrImage` to an RGB PNG.
//! - `save_grayscale_u8`: write an 8-bit gray buffer (edge map) to a PNG.
//! - `save_grayscale_f32`: write an `ImageF32` in [0, 1] (glow mask) to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The pipeline itself never touches the filesystem; everything here lives at
//! the collaborator boundary around it.

use super::{BgrImage, ImageF32, ImageU8, ImageView};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to interleaved 8-bit BGR.
pub fn load_bgr_image(path: &Path) -> Result<BgrImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut data = img.into_raw();
    // Decoded bytes are R-G-B; the pipeline works in B-G-R.
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    BgrImage::from_raw(width, height, data).map_err(|e| e.to_string())
}

/// Save an interleaved BGR buffer to an RGB PNG (or whatever the extension
/// selects).
pub fn save_bgr_image(image: &BgrImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut data = image.as_slice().to_vec();
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    let rgb: RgbImage = ImageBuffer::from_raw(image.width() as u32, image.height() as u32, data)
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageRgb8(rgb)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &ImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = match buffer.as_slice() {
        Some(slice) => slice.to_vec(),
        None => {
            let mut out = Vec::with_capacity(buffer.w * buffer.h);
            for row in buffer.rows() {
                out.extend_from_slice(row);
            }
            out
        }
    };
    let gray: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.w as u32, buffer.h as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(gray)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a float image to a grayscale PNG, clamping values in [0, 255].
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
