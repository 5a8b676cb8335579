pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = "github.com/dujigui/imgmerge";

/// Extensions picked up when walking an input directory (compared lowercased).
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Largest RGBA buffer any resize or the merged canvas may allocate (2 GiB).
pub const MAX_CANVAS_BYTES: u64 = 2 * 1024 * 1024 * 1024;
pub const BYTES_PER_PIXEL: u64 = 4;

pub const DEFAULT_FILE_PREFIX: &str = "imgmerge_";
pub const DEFAULT_FILE_EXTENSION: &str = "png";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

pub const TINIFY_SHRINK_URL: &str = "https://api.tinify.com/shrink";
pub const TINIFY_USER: &str = "api";
pub const USER_AGENT: &str = concat!("imgmerge/", env!("CARGO_PKG_VERSION"));

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

pub const USAGE_EXAMPLES: &str = "EXAMPLES:
  imgmerge -od ~/Desktop/ -i ~/Desktop/imgs
  imgmerge -of ~/Desktop/imgmerge.png ~/Desktop/1.jpg ~/Desktop/2.jpg
  imgmerge -od ~/Desktop -m min -i ~/Desktop/imgs
  imgmerge -od ~/Desktop -i ~/Desktop/imgs -s 1.5
  imgmerge -od ~/Desktop/ -i ~/Desktop/imgs -c -k yourAPIkey";
