use imgmerge::cli::Args;
use imgmerge::constants::{AUTHOR, VERSION};
use imgmerge::error::Result;
use imgmerge::logger;
use imgmerge::{error, merge_images};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse_args();

    if args.version {
        println!("Version: {}\nAuthor: {}", VERSION, AUTHOR);
        return ExitCode::SUCCESS;
    }

    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            if e.is_configuration() {
                eprintln!("Run 'imgmerge --help' for usage.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    if args.input.is_some() && !args.files.is_empty() {
        imgmerge::warn!("Input directory given, ignoring {} listed files", args.files.len());
    }

    let config = args.into_config()?;
    merge_images(&config)?;
    Ok(())
}
