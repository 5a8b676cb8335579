use crate::config::MergeMode;
use crate::constants::{BYTES_PER_PIXEL, MAX_CANVAS_BYTES};
use crate::error::{MergeError, Result};
use crate::info;
use crate::loader::Picture;
use image::imageops::FilterType;

/// Resampling filter shared by width normalization and output scaling.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Common width for the merge: the first width folded with `max` or `min`.
pub fn target_width(pictures: &[Picture], mode: MergeMode) -> Option<u32> {
    pictures
        .iter()
        .map(Picture::width)
        .reduce(|acc, width| mode.combine(acc, width))
}

/// Height an image of `width`x`height` gets when scaled to `target` wide.
/// Never below 1; may exceed `u32::MAX` for degenerate aspect ratios.
pub fn scaled_height(width: u32, height: u32, target: u32) -> u64 {
    let scaled = (target as f64 / width as f64 * height as f64).round();
    (scaled as u64).max(1)
}

/// Rejects canvases that do not fit `u32` sides or the RGBA byte budget.
pub fn check_canvas_size(width: u64, height: u64) -> Result<(u32, u32)> {
    let too_large = || MergeError::CanvasTooLarge(width, height);

    let bytes = width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(too_large)?;
    if bytes > MAX_CANVAS_BYTES {
        return Err(too_large());
    }

    let width = u32::try_from(width).map_err(|_| too_large())?;
    let height = u32::try_from(height).map_err(|_| too_large())?;
    Ok((width, height))
}

/// Resizes every picture whose width differs from the target, in place.
///
/// Returns `(width, total_height)` of the canvas needed to stack them.
/// Pictures keep their order and source path. All sizes are checked before
/// any picture is resampled.
pub fn normalize_widths(pictures: &mut [Picture], mode: MergeMode) -> Result<(u32, u32)> {
    let width = target_width(pictures, mode).ok_or(MergeError::EmptyInput)?;

    let mut new_heights = Vec::with_capacity(pictures.len());
    let mut total_height: u64 = 0;
    for picture in pictures.iter() {
        let (old_width, old_height) = picture.dimensions();
        let new_height = if old_width == width {
            old_height as u64
        } else {
            scaled_height(old_width, old_height, width)
        };
        let (_, new_height) = check_canvas_size(width as u64, new_height)?;
        total_height = total_height.saturating_add(new_height as u64);
        new_heights.push(new_height);
    }
    let (width, total_height) = check_canvas_size(width as u64, total_height)?;

    for (index, (picture, new_height)) in pictures.iter_mut().zip(new_heights).enumerate() {
        let (old_width, old_height) = picture.dimensions();
        if old_width != width {
            picture.image = picture.image.resize_exact(width, new_height, RESAMPLE_FILTER);
            info!(
                "🔄 scaling picture {} from {}x{} to {}x{}",
                index,
                old_width,
                old_height,
                picture.width(),
                picture.height()
            );
        }
    }

    Ok((width, total_height))
}
