use crate::config::InputSource;
use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{MergeError, Result};
use crate::verbose;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Turns the configured input source into the ordered list of files to merge.
///
/// Directories are walked recursively in file-name order and filtered by
/// extension; explicit files are returned as given. An empty result is an error.
pub fn resolve_inputs(source: &InputSource) -> Result<Vec<PathBuf>> {
    let files = match source {
        InputSource::Directory(dir) => collect_image_files(&expand_home(dir))?,
        InputSource::Files(files) => files.clone(),
    };

    if files.is_empty() {
        return Err(MergeError::EmptyInput);
    }
    Ok(files)
}

pub fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    verbose!("Walking input directory: {:?}", dir);

    let mut image_files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_dir() && is_image_file(entry.path()) {
            image_files.push(entry.into_path());
        }
    }

    Ok(image_files)
}

/// Matches on the real file extension, case-insensitively.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// Expands a leading `~` using `$HOME` and strips a trailing separator.
pub fn expand_home(path: &Path) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    expand_home_with(path, home.as_deref())
}

fn expand_home_with(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };

    let trimmed = match text.trim_end_matches('/') {
        "" if text.starts_with('/') => "/",
        rest => rest,
    };

    match (home, trimmed) {
        (Some(home), "~") => home.to_path_buf(),
        (Some(home), _) if trimmed.starts_with("~/") => home.join(&trimmed[2..]),
        _ => PathBuf::from(trimmed),
    }
}
