use crate::loader::Picture;
use image::{imageops, DynamicImage, RgbaImage};

/// Stacks pictures top to bottom on a transparent `width`x`height` canvas.
///
/// Each picture is drawn at `x = 0` starting right below the previous one,
/// so with normalized widths the canvas is covered without gaps or overlap.
pub fn compose(pictures: &[Picture], width: u32, height: u32) -> DynamicImage {
    let mut canvas = RgbaImage::new(width, height);

    let mut offset: i64 = 0;
    for picture in pictures {
        imageops::replace(&mut canvas, &picture.image.to_rgba8(), 0, offset);
        offset += picture.height() as i64;
    }

    DynamicImage::ImageRgba8(canvas)
}

/// Vertical offset at which each picture starts.
pub fn row_offsets(pictures: &[Picture]) -> Vec<u32> {
    pictures
        .iter()
        .scan(0u32, |offset, picture| {
            let start = *offset;
            *offset = offset.saturating_add(picture.height());
            Some(start)
        })
        .collect()
}
