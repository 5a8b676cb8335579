use crate::error::{MergeError, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::{Path, PathBuf};

/// A decoded input image together with the file it came from.
#[derive(Debug, Clone)]
pub struct Picture {
    pub image: DynamicImage,
    pub path: PathBuf,
}

impl Picture {
    pub fn new(image: DynamicImage, path: impl Into<PathBuf>) -> Self {
        Self {
            image,
            path: path.into(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Decodes a single image. The format is sniffed from the file contents,
/// so a PNG saved with a `.jpg` name still loads.
pub fn load_picture(path: &Path) -> Result<Picture> {
    if !path.exists() {
        return Err(MergeError::FileNotFound(path.to_path_buf()));
    }

    let decode_error = |source| MergeError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(decode_error)?;

    Ok(Picture::new(image, path))
}

/// Loads every path in order; the first failure aborts the whole batch.
pub fn load_pictures(paths: &[PathBuf]) -> Result<Vec<Picture>> {
    if paths.is_empty() {
        return Err(MergeError::EmptyInput);
    }
    paths.iter().map(|path| load_picture(path)).collect()
}
