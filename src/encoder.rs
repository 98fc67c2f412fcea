//! PNG serialization of the finished canvas.
//!
//! The codec is configured for 8-bit RGBA, no interlacing, default
//! compression and filtering. Encoding happens into a memory buffer and the
//! destination file is written in one shot afterwards, so a failed run
//! never leaves a truncated image on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::canvas::Canvas;

/// Encode `canvas` as a PNG and write it to `path`.
///
/// Consumes the canvas; the pixel buffer is released when this returns.
pub fn write_png(canvas: Canvas, path: &Path) -> Result<()> {
    let encoded = encode(canvas)?;
    fs::write(path, &encoded)
        .with_context(|| format!("Failed to write image: {}", path.display()))?;
    Ok(())
}

/// Encode `canvas` into an in-memory PNG stream.
pub fn encode(canvas: Canvas) -> Result<Vec<u8>> {
    let width = canvas.width_px();
    let height = canvas.height_px();
    let pixels = canvas.into_pixels();

    let mut encoded = Vec::new();
    let mut encoder = png::Encoder::new(&mut encoded, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .context("Failed to create PNG encoder state")?;
    writer
        .write_image_data(&pixels)
        .context("Failed to encode image data")?;
    writer.finish().context("Failed to finalize PNG stream")?;

    tracing::debug!(width, height, bytes = encoded.len(), "encoded image");
    Ok(encoded)
}
