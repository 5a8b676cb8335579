use crate::error::{MergeError, Result};
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// How the common width of the merged image is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MergeMode {
    /// Widest input wins; narrower images are scaled up
    #[default]
    Max,
    /// Narrowest input wins; wider images are scaled down
    Min,
}

impl MergeMode {
    pub fn combine(self, a: u32, b: u32) -> u32 {
        match self {
            MergeMode::Max => a.max(b),
            MergeMode::Min => a.min(b),
        }
    }
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeMode::Max => write!(f, "max"),
            MergeMode::Min => write!(f, "min"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Walked recursively, keeping only jpg/jpeg/png files
    Directory(PathBuf),
    /// Used verbatim, in the given order
    Files(Vec<PathBuf>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    File(PathBuf),
    /// A timestamped file name is generated inside it
    Directory(PathBuf),
}

#[derive(Clone, PartialEq)]
pub struct CompressionSettings {
    pub api_key: String,
}

// Keep the key out of verbose logs.
impl fmt::Debug for CompressionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompressionSettings")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Immutable parameters for one merge run.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeConfig {
    pub input: InputSource,
    pub mode: MergeMode,
    pub output: OutputTarget,
    pub scale: Option<f64>,
    pub compression: Option<CompressionSettings>,
}

impl MergeConfig {
    /// Validates raw options and builds the run configuration.
    ///
    /// A directory input takes precedence over explicit files, and an output
    /// file takes precedence over an output directory. A scale of `0` means
    /// "do not scale".
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        input_dir: Option<PathBuf>,
        input_files: Vec<PathBuf>,
        mode: MergeMode,
        output_file: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        scale: f64,
        compress: bool,
        api_key: Option<String>,
    ) -> Result<Self> {
        let input = match input_dir {
            Some(dir) => InputSource::Directory(dir),
            None if !input_files.is_empty() => InputSource::Files(input_files),
            None => return Err(MergeError::MissingInput),
        };

        let output = match (output_file, output_dir) {
            (Some(file), _) => OutputTarget::File(file),
            (None, Some(dir)) => OutputTarget::Directory(dir),
            (None, None) => return Err(MergeError::MissingOutput),
        };

        if !scale.is_finite() || scale < 0.0 {
            return Err(MergeError::InvalidScale(scale));
        }
        let scale = (scale != 0.0).then_some(scale);

        let compression = if compress {
            match api_key.filter(|key| !key.trim().is_empty()) {
                Some(api_key) => Some(CompressionSettings { api_key }),
                None => return Err(MergeError::MissingApiKey),
            }
        } else {
            None
        };

        Ok(Self {
            input,
            mode,
            output,
            scale,
            compression,
        })
    }
}
