use crate::composite::{compose, row_offsets};
use crate::compress::{compress_in_place, Compressor, TinifyClient};
use crate::config::MergeConfig;
use crate::encode::{save_png, scale_canvas, scaled_dimensions};
use crate::error::Result;
use crate::input::resolve_inputs;
use crate::loader::{load_pictures, Picture};
use crate::normalize::normalize_widths;
use crate::output::resolve_output_path;
use crate::utils::format_file_size;
use crate::{info, success, verbose};
use std::path::PathBuf;

/// Summary of a finished merge.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    pub output: PathBuf,
    pub image_count: usize,
    pub width: u32,
    pub height: u32,
    pub file_size: u64,
    /// `(before, after)` when the output was compressed
    pub compression: Option<(u64, u64)>,
}

/// Runs the whole merge with the tinypng.com client when compression is enabled.
pub fn merge_images(config: &MergeConfig) -> Result<MergeReport> {
    let client = config
        .compression
        .as_ref()
        .map(|settings| TinifyClient::new(settings.api_key.clone()))
        .transpose()?;

    merge_images_with(config, client.as_ref().map(|c| c as &dyn Compressor))
}

/// Resolve input, load, normalize, composite, resolve output, scale and
/// encode, then optionally compress. The first failing stage ends the run;
/// files already written are left in place.
pub fn merge_images_with(
    config: &MergeConfig,
    compressor: Option<&dyn Compressor>,
) -> Result<MergeReport> {
    verbose!("Configuration: {:?}", config);

    let paths = resolve_inputs(&config.input)?;
    let mut pictures = load_pictures(&paths)?;
    print_pictures(&pictures);

    let (width, height) = normalize_widths(&mut pictures, config.mode)?;
    let (out_width, out_height) = match config.scale {
        Some(factor) => scaled_dimensions(width, height, factor)?,
        None => (width, height),
    };
    info!("🖼️  output picture: {}x{}", out_width, out_height);
    verbose!("Row offsets: {:?}", row_offsets(&pictures));

    let canvas = compose(&pictures, width, height);
    drop(pictures);

    let output = resolve_output_path(&config.output)?;
    let canvas = scale_canvas(canvas, config.scale)?;
    let mut file_size = save_png(&canvas, &output)?;
    success!("saved to: {}", output.display());
    verbose!("Encoded size: {} bytes ({})", file_size, format_file_size(file_size));

    let compression = match compressor {
        Some(compressor) => {
            let sizes = compress_in_place(compressor, &output)?;
            file_size = sizes.1;
            Some(sizes)
        }
        None => None,
    };

    Ok(MergeReport {
        output,
        image_count: paths.len(),
        width: canvas.width(),
        height: canvas.height(),
        file_size,
        compression,
    })
}

fn print_pictures(pictures: &[Picture]) {
    info!("📋 found {} images:", pictures.len());
    for (index, picture) in pictures.iter().enumerate() {
        info!(
            "  {}: {}({}x{})",
            index,
            picture.path.display(),
            picture.width(),
            picture.height()
        );
    }
}
