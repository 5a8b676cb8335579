pub mod cli;
pub mod composite;
pub mod compress;
pub mod config;
pub mod constants;
pub mod encode;
pub mod error;
pub mod input;
pub mod loader;
pub mod logger;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod utils;

pub use composite::compose;
pub use compress::{compress_in_place, Compressor, TinifyClient};
pub use config::{CompressionSettings, InputSource, MergeConfig, MergeMode, OutputTarget};
pub use error::{MergeError, Result};
pub use input::{expand_home, is_image_file, resolve_inputs};
pub use loader::{load_picture, load_pictures, Picture};
pub use normalize::{check_canvas_size, normalize_widths, scaled_height, target_width};
pub use output::resolve_output_path;
pub use pipeline::{merge_images, merge_images_with, MergeReport};
