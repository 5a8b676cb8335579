use crate::config::OutputTarget;
use crate::constants::{DEFAULT_FILE_EXTENSION, DEFAULT_FILE_PREFIX, TIMESTAMP_FORMAT};
use crate::error::{MergeError, Result};
use crate::input::expand_home;
use chrono::{DateTime, Local, TimeZone};
use std::fs;
use std::path::PathBuf;

/// Picks the file the merged image is written to.
///
/// An explicit file is used verbatim. A directory must exist; the file inside
/// it is named after the current local time, e.g. `imgmerge_20240101120000.png`.
pub fn resolve_output_path(target: &OutputTarget) -> Result<PathBuf> {
    match target {
        OutputTarget::File(file) => Ok(file.clone()),
        OutputTarget::Directory(dir) => {
            let dir = expand_home(dir);
            fs::metadata(&dir).map_err(|source| MergeError::OutputDirectory {
                path: dir.clone(),
                source,
            })?;
            Ok(dir.join(default_file_name(&Local::now())))
        }
    }
}

pub fn default_file_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}{}.{}",
        DEFAULT_FILE_PREFIX,
        now.format(TIMESTAMP_FORMAT),
        DEFAULT_FILE_EXTENSION
    )
}
