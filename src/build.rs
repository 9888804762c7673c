//! Exports the [`build_site`] function which stitches together the high-level
//! steps of building the output static site: dating undated source files
//! ([`crate::prepare`]), parsing the posts ([`crate::post`]), and rendering
//! the post, index, and feed pages ([`crate::write`]).
//!
//! Only a failure to list the source directory stops the build. Everything
//! else (a post that can't be read, a template that doesn't render) is logged
//! and skipped, so a broken post costs only its own page.

use crate::config::Config;
use crate::post::{file_stem, parse_post, sort_posts, Post};
use crate::prepare::{list_source_files, prepare_filenames};
use crate::write::Writer;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Summarizes a build.
#[derive(Debug, Default)]
pub struct Report {
    /// The slugs of the posts whose pages were written, in source order.
    pub posts: Vec<String>,

    /// The source files which couldn't be parsed or rendered.
    pub failed: Vec<PathBuf>,

    /// Whether the index page was written.
    pub index: bool,

    /// Whether the feed was written.
    pub feed: bool,
}

/// Builds the site described by `config`.
pub fn build_site(config: &Config) -> Result<Report> {
    if let Err(e) = std::fs::create_dir_all(&config.output_directory) {
        error!(
            "Creating output directory `{}`: {}",
            config.output_directory.display(),
            e
        );
    }

    prepare_filenames(&config.source_directory).map_err(Error::Prepare)?;
    let source_files = list_source_files(&config.source_directory).map_err(Error::List)?;

    let writer = Writer {
        template_directory: &config.template_directory,
        output_directory: &config.output_directory,
        index_title: &config.title,
    };

    let mut report = Report::default();
    let mut posts: Vec<Post> = Vec::with_capacity(source_files.len());
    let mut slugs: HashSet<String> = HashSet::new();
    for source_file in source_files {
        let mut post = match parse_post(&source_file) {
            Ok(post) => post,
            Err(e) => {
                error!("{}", e);
                report.failed.push(source_file);
                continue;
            }
        };

        // Posts which differ only by date share a slug; later ones keep their
        // full file stem so no page is overwritten.
        if !slugs.insert(post.name.clone()) {
            let stem = file_stem(&source_file);
            if !slugs.insert(stem.clone()) {
                error!(
                    "Post `{}` collides with an existing page `{}.html`",
                    source_file.display(),
                    post.name
                );
                report.failed.push(source_file);
                continue;
            }
            warn!(
                "Slug `{}` is already taken; writing `{}` as `{}.html`",
                post.name,
                source_file.display(),
                stem
            );
            post.name = stem;
        }
        match writer.write_post(&post) {
            Ok(_) => {
                info!("Saved post: {}", post.name);
                report.posts.push(post.name.clone());
                posts.push(post);
            }
            Err(e) => {
                error!("Writing post `{}`: {}", source_file.display(), e);
                report.failed.push(source_file);
            }
        }
    }

    sort_posts(&mut posts);

    match writer.write_index(&posts) {
        Ok(_) => {
            info!("Saved index");
            report.index = true;
        }
        Err(e) => error!("Writing index: {}", e),
    }

    match writer.write_feed(&posts) {
        Ok(_) => {
            info!("Saved feed");
            report.feed = true;
        }
        Err(e) => error!("Writing feed: {}", e),
    }

    Ok(report)
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Only failures to list the source
/// directory are fatal; see the module docs.
#[derive(Debug)]
pub enum Error {
    /// Returned when the source directory can't be listed while dating
    /// undated source files.
    Prepare(walkdir::Error),

    /// Returned when the source directory can't be listed while collecting
    /// posts.
    List(walkdir::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Prepare(err) => write!(f, "Preparing source files: {}", err),
            Error::List(err) => write!(f, "Listing source files: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Prepare(err) => Some(err),
            Error::List(err) => Some(err),
        }
    }
}
