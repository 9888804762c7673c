use crate::post::Post;
use crate::template::{render_template, Error as TemplateError};
use crate::value::{posts_value, Page};
use gtmpl::Value;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The template for post pages and the outer wrapper for the index page.
pub const MAIN_TEMPLATE: &str = "main.html";

/// The template which renders a list of posts into the index page body.
pub const RECENT_TEMPLATE: &str = "recent.html";

/// The template which renders a list of posts into the feed document.
pub const FEED_TEMPLATE: &str = "feed.html";

/// The output file name for the index page.
pub const INDEX_FILE: &str = "index.html";

/// The output file name for the feed.
pub const FEED_FILE: &str = "feed.html";

const HTML_EXTENSION: &str = ".html";

/// Responsible for templating and writing HTML pages to disk from [`Post`]
/// sources.
pub struct Writer<'a> {
    /// The directory containing [`MAIN_TEMPLATE`], [`RECENT_TEMPLATE`], and
    /// [`FEED_TEMPLATE`].
    pub template_directory: &'a Path,

    /// The directory in which all pages are written. Post pages are written
    /// to `{output_directory}/{post.name}.html`.
    pub output_directory: &'a Path,

    /// The title passed to [`MAIN_TEMPLATE`] for the index page.
    pub index_title: &'a str,
}

impl Writer<'_> {
    /// Renders `post` with [`MAIN_TEMPLATE`] and writes it to
    /// `{output_directory}/{post.name}.html`. Returns the output path.
    pub fn write_post(&self, post: &Post) -> Result<PathBuf> {
        let out = render_template(&self.template(MAIN_TEMPLATE), post)?;
        let path = self
            .output_directory
            .join(format!("{}{}", post.name, HTML_EXTENSION));
        write_output_file(&path, &out)?;
        Ok(path)
    }

    /// Renders `posts` with [`RECENT_TEMPLATE`], wraps the result in
    /// [`MAIN_TEMPLATE`] along with the index title, and writes it to
    /// [`INDEX_FILE`]. `posts` is expected to be sorted already.
    pub fn write_index(&self, posts: &[Post]) -> Result<PathBuf> {
        let recent = render_template(&self.template(RECENT_TEMPLATE), posts_value(posts))?;
        let recent = String::from_utf8_lossy(&recent);
        let out = render_template(
            &self.template(MAIN_TEMPLATE),
            Value::from(Page {
                title: self.index_title,
                content: &recent,
            }),
        )?;
        let path = self.output_directory.join(INDEX_FILE);
        write_output_file(&path, &out)?;
        Ok(path)
    }

    /// Renders `posts` with [`FEED_TEMPLATE`] and writes the result to
    /// [`FEED_FILE`]. `posts` is expected to be sorted already.
    pub fn write_feed(&self, posts: &[Post]) -> Result<PathBuf> {
        let out = render_template(&self.template(FEED_TEMPLATE), posts_value(posts))?;
        let path = self.output_directory.join(FEED_FILE);
        write_output_file(&path, &out)?;
        Ok(path)
    }

    fn template(&self, name: &str) -> PathBuf {
        self.template_directory.join(name)
    }
}

/// Writes `contents` to `path`, creating the file if it doesn't exist and
/// truncating it if it does. The write isn't atomic; a failure part way
/// through can leave a truncated file behind.
pub fn write_output_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    std::fs::write(path, contents)
}

/// The result of a fallible page-writing operation.
type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// An error during templating.
    Template(TemplateError),

    /// An error writing the output file.
    Io(io::Error),
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. This allows us to use the
    /// `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<TemplateError> for Error {
    /// Converts a [`TemplateError`] into an [`Error`]. This allows us to use
    /// the `?` operator for fallible template operations.
    fn from(err: TemplateError) -> Error {
        Error::Template(err)
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Template(err) => err.fmt(f),
            Error::Io(err) => write!(f, "Writing output file: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Template(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}
