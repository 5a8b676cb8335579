use crate::error::{MergeError, Result};
use crate::normalize::{check_canvas_size, RESAMPLE_FILTER};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::fs;
use std::path::Path;

/// Dimensions after multiplying both sides by `factor`, truncated, never below 1.
///
/// Fails with `CanvasTooLarge` when the result would not fit in memory.
pub fn scaled_dimensions(width: u32, height: u32, factor: f64) -> Result<(u32, u32)> {
    let scale = |side: u32| ((side as f64 * factor) as u64).max(1);
    check_canvas_size(scale(width), scale(height))
}

/// Applies the optional uniform scale factor to the merged canvas.
///
/// When the factor leaves the size unchanged the canvas is returned as is,
/// so `1.0` never resamples.
pub fn scale_canvas(canvas: DynamicImage, factor: Option<f64>) -> Result<DynamicImage> {
    let Some(factor) = factor else {
        return Ok(canvas);
    };

    let (width, height) = canvas.dimensions();
    let (new_width, new_height) = scaled_dimensions(width, height, factor)?;
    if (new_width, new_height) == (width, height) {
        return Ok(canvas);
    }
    Ok(canvas.resize_exact(new_width, new_height, RESAMPLE_FILTER))
}

/// Encodes `image` as PNG regardless of the output extension.
/// Returns the size of the written file in bytes.
pub fn save_png(image: &DynamicImage, output: &Path) -> Result<u64> {
    image
        .save_with_format(output, ImageFormat::Png)
        .map_err(|source| MergeError::Encode {
            path: output.to_path_buf(),
            source,
        })?;

    Ok(fs::metadata(output)?.len())
}
