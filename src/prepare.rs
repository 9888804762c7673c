//! Lists post source files and makes sure each one carries a date in its
//! name, renaming undated files so they keep a stable date across runs.

use crate::date::{parse_date, DATE_FORMAT};
use crate::post::{file_stem, MARKDOWN_EXTENSION};
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use walkdir::WalkDir;

/// Returns the `.md` files directly inside `dir` (subdirectories are not
/// searched), sorted by file name. Symlinks to regular files are included.
pub fn list_source_files(dir: &Path) -> walkdir::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for result in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = result?;
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file
            && entry
                .file_name()
                .to_string_lossy()
                .ends_with(MARKDOWN_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Renames every source file in `dir` whose name has no date so that it
/// begins with today's date (`draft.md` becomes `2021-03-05-draft.md`).
/// A file whose new name is already taken is left alone. Rename failures are
/// logged and skipped; only a failure to list `dir` is returned.
pub fn prepare_filenames(dir: &Path) -> walkdir::Result<()> {
    for source_file in list_source_files(dir)? {
        let stem = file_stem(&source_file);
        if let Err(e) = parse_date(&stem) {
            let new_name = format!(
                "{}-{}{}",
                e.fallback().format(DATE_FORMAT),
                stem,
                MARKDOWN_EXTENSION
            );
            let new_path = dir.join(new_name);
            if new_path.exists() {
                error!(
                    "Renaming {} to {}: destination already exists",
                    source_file.display(),
                    new_path.display()
                );
                continue;
            }
            match std::fs::rename(&source_file, &new_path) {
                Ok(()) => debug!(
                    "Renamed {} to {}",
                    source_file.display(),
                    new_path.display()
                ),
                Err(err) => error!(
                    "Renaming {} to {}: {}",
                    source_file.display(),
                    new_path.display(),
                    err
                ),
            }
        }
    }
    Ok(())
}
