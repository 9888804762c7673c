//! Defines the [`Post`] type and the logic for parsing a post from a markdown
//! source file. See [`crate::value`] for how posts are converted into template
//! values.

use crate::date::{parse_date, strip_date_prefix};
use crate::markdown;
use chrono::{DateTime, Utc};
use std::fmt;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use tracing::warn;

/// The extension shared by all post source files.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// A single parsed post.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    /// The post's slug. The post page is written to `{name}.html`.
    pub name: String,

    /// The text of the first markdown heading in the source file, or empty if
    /// there is none.
    pub title: String,

    /// The rendered HTML for the whole source file (including the title
    /// heading).
    pub content: String,

    /// The date parsed from the file name, or the time of parsing if the file
    /// name has no date.
    pub date: DateTime<Utc>,
}

/// Parses a [`Post`] from the markdown file at `path`. A file name without a
/// date is logged and dated with the current time; only a failure to read the
/// file is an error.
pub fn parse_post(path: &Path) -> Result<Post> {
    let stem = file_stem(path);

    let date = match parse_date(&stem) {
        Ok(date) => date,
        Err(e) => {
            warn!("{}", e);
            e.fallback()
        }
    };

    let input = read_to_string(path).map_err(|err| Error::Read {
        path: path.to_owned(),
        err,
    })?;

    let mut content = String::new();
    markdown::to_html(&mut content, &input);

    Ok(Post {
        name: slug(&stem).to_owned(),
        title: title(&input).to_owned(),
        content,
        date,
    })
}

/// Returns the file name for `path` less its `.md` extension. Only the
/// literal extension is removed, so `command.md` yields `command`.
pub fn file_stem(path: &Path) -> String {
    let file_name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };
    file_name
        .strip_suffix(MARKDOWN_EXTENSION)
        .unwrap_or(&file_name)
        .to_owned()
}

/// Derives a post's slug from its file stem by dropping a leading
/// `YYYY-MM-DD-` prefix (e.g., `2023-01-01-hi` becomes `hi`).
pub fn slug(stem: &str) -> &str {
    strip_date_prefix(stem)
}

/// Finds the first line which (ignoring leading spaces) starts with `#` and
/// returns its text without the `#`s and surrounding whitespace. Returns an
/// empty string if no line qualifies.
pub fn title(input: &str) -> &str {
    input
        .split('\n')
        .map(|line| line.trim_start_matches(' '))
        .find(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim_start_matches(' ').trim_end())
        .unwrap_or_default()
}

/// Sorts posts by date, most recent first.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_unstable_by(|a, b| b.date.cmp(&a.date));
}

/// Represents the result of a [`Post`]-parse operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error parsing a [`Post`] object.
#[derive(Debug)]
pub enum Error {
    /// Returned when the source file can't be read (including when it isn't
    /// valid UTF-8).
    Read { path: PathBuf, err: std::io::Error },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Read { path, err } => {
                write!(f, "Reading post `{}`: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { path: _, err } => Some(err),
        }
    }
}
