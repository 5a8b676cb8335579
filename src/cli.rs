use crate::config::{MergeConfig, MergeMode};
use crate::constants::USAGE_EXAMPLES;
use crate::error::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Two-letter flags that are spelled with a single dash on the command line.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["of", "od"];

#[derive(Parser, Debug)]
#[command(
    name = "imgmerge",
    about = "Concatenate images vertically into a single PNG",
    long_about = "imgmerge stacks JPEG and PNG images top to bottom into one PNG. \
                  Inputs are rescaled to a common width (the widest or the narrowest input), \
                  the result can be scaled by a uniform factor and optionally compressed \
                  with the tinypng.com API.",
    disable_version_flag = true,
    after_help = USAGE_EXAMPLES
)]
pub struct Args {
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Input directory",
        long_help = "Input directory, walked recursively for .jpg, .jpeg and .png files. \
                     When given, positional input files are ignored."
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value_t = MergeMode::Max,
        help = "Merge mode, max or min",
        long_help = "max scales every image to the widest input, min scales every image \
                     to the narrowest input. Aspect ratio is preserved."
    )]
    pub mode: MergeMode,

    #[arg(
        long = "of",
        value_name = "FILE",
        help = "Output file (also accepted as -of)"
    )]
    pub output_file: Option<PathBuf>,

    #[arg(
        long = "od",
        value_name = "DIR",
        help = "Output folder (also accepted as -od)",
        long_help = "Output folder. The file is named imgmerge_<YYYYMMDDHHMMSS>.png. \
                     Ignored when an output file is given."
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        short = 's',
        long = "scale",
        default_value_t = 0.0,
        help = "Scale the output (0 = no scaling)"
    )]
    pub scale: f64,

    #[arg(short = 'c', long = "compress", help = "Compress using tinypng.com")]
    pub compress: bool,

    #[arg(short = 'k', long = "key", value_name = "KEY", help = "API key from tinypng.com")]
    pub api_key: Option<String>,

    #[arg(short = 'v', long = "version", help = "Print version info")]
    pub version: bool,

    #[arg(short = 'q', long = "quiet", help = "Only print errors")]
    pub quiet: bool,

    #[arg(long = "verbose", help = "Print the resolved configuration and extra details")]
    pub verbose: bool,

    #[arg(value_name = "FILES", help = "Input image files, merged in the given order")]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Parses the process arguments, accepting `-of`/`-od` as well as `--of`/`--od`.
    pub fn parse_args() -> Self {
        Self::parse_from(rewrite_single_dash_flags(std::env::args_os()))
    }

    pub fn into_config(self) -> Result<MergeConfig> {
        MergeConfig::new(
            self.input,
            self.files,
            self.mode,
            self.output_file,
            self.output_dir,
            self.scale,
            self.compress,
            self.api_key,
        )
    }
}

/// Rewrites `-of`/`-od` (and `-of=..`) into their `--` forms so clap sees long flags.
/// Arguments after a `--` terminator are left untouched.
pub fn rewrite_single_dash_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if terminated {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                terminated = true;
                return arg;
            }
            let Some(rest) = text.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split('=').next().unwrap_or(rest);
            if SINGLE_DASH_LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InputSource, OutputTarget};
    use crate::error::MergeError;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(rewrite_single_dash_flags(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_rewrite_single_dash_flags() {
        let rewritten = rewrite_single_dash_flags(["imgmerge", "-of", "a.png", "-od=out", "-i", "x"]);
        assert_eq!(
            rewritten,
            vec!["imgmerge", "--of", "a.png", "--od=out", "-i", "x"]
                .into_iter()
                .map(OsString::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_rewrite_leaves_other_args_alone() {
        let args = ["imgmerge", "--of", "a.png", "-s", "1.5", "-offset.png", "--", "-od"];
        let rewritten = rewrite_single_dash_flags(args);
        assert_eq!(
            rewritten,
            args.into_iter().map(OsString::from).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_parse_file_list() {
        let args = parse(&["imgmerge", "-of", "merged.png", "1.jpg", "2.jpg"]);
        assert_eq!(args.output_file, Some(PathBuf::from("merged.png")));
        assert_eq!(args.files, vec![PathBuf::from("1.jpg"), PathBuf::from("2.jpg")]);
        assert_eq!(args.mode, MergeMode::Max);
        assert_eq!(args.scale, 0.0);

        let config = args.into_config().unwrap();
        assert_eq!(
            config.input,
            InputSource::Files(vec![PathBuf::from("1.jpg"), PathBuf::from("2.jpg")])
        );
        assert_eq!(config.output, OutputTarget::File(PathBuf::from("merged.png")));
    }

    #[test]
    fn test_parse_directory_mode_with_options() {
        let args = parse(&[
            "imgmerge", "-od", "~/Desktop", "-m", "min", "-i", "~/imgs", "-s", "1.5", "-c", "-k",
            "key123",
        ]);
        assert_eq!(args.mode, MergeMode::Min);
        assert!(args.compress);

        let config = args.into_config().unwrap();
        assert_eq!(config.input, InputSource::Directory(PathBuf::from("~/imgs")));
        assert_eq!(config.output, OutputTarget::Directory(PathBuf::from("~/Desktop")));
        assert_eq!(config.scale, Some(1.5));
        assert_eq!(config.compression.unwrap().api_key, "key123");
    }

    #[test]
    fn test_parse_version_flag() {
        assert!(parse(&["imgmerge", "-v"]).version);
        assert!(parse(&["imgmerge", "--version"]).version);
    }

    #[test]
    fn test_parse_invalid_mode() {
        let result = Args::try_parse_from(["imgmerge", "-m", "avg", "a.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_compress_without_key() {
        let result = parse(&["imgmerge", "-of", "o.png", "-c", "a.png"]).into_config();
        assert!(matches!(result, Err(MergeError::MissingApiKey)));
    }
}
