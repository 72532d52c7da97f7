//! PNG swatch output for mixed colours.
//!
//! A swatch is a square of the mixed colour with a strip per pigment along
//! the bottom edge, each strip as wide as the pigment's share of the load.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{CastError, Result};
use crate::types::{Colour, PigmentEntry};

/// Fraction of the swatch height used by the pigment strip.
const STRIP_FRACTION: u32 = 5;

/// Render a swatch image of `size` x `size` pixels.
pub fn render_swatch(mixed: Colour, pigments: &[PigmentEntry], size: u32) -> RgbImage {
    let size = size.max(1);
    let mut img: RgbImage = ImageBuffer::from_pixel(size, size, Rgb(mixed.to_rgb()));

    let strip_height = size / STRIP_FRACTION;
    let total: f64 = pigments.iter().map(|p| p.percentage.max(0.0)).sum();
    if strip_height == 0 || total <= 0.0 {
        return img;
    }

    let mut x0 = 0u32;
    let mut acc = 0.0;
    for pigment in pigments {
        acc += pigment.percentage.max(0.0);
        let x1 = ((acc / total) * f64::from(size)).round() as u32;
        let rgb = Rgb(pigment.colour().to_rgb());
        for x in x0..x1.min(size) {
            for y in size - strip_height..size {
                img.put_pixel(x, y, rgb);
            }
        }
        x0 = x1;
    }

    img
}

/// Write a swatch PNG.
pub fn write_swatch(
    mixed: Colour,
    pigments: &[PigmentEntry],
    path: &Path,
    size: u32,
) -> Result<()> {
    render_swatch(mixed, pigments, size)
        .save(path)
        .map_err(|e| CastError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}
