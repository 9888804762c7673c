//! The library code for the `instigator` static site generator. It turns a
//! directory of markdown posts whose file names begin with a date (e.g.,
//! `2021-03-05-hello.md`) into a directory of HTML pages:
//!
//! 1. Undated source files are renamed to begin with today's date
//!    ([`crate::prepare`]) so that their date stays put on later runs.
//! 2. Each source file is parsed into a [`crate::post::Post`]: the date comes
//!    from the file name, the title from the first markdown heading, and the
//!    body is rendered to HTML ([`crate::markdown`]).
//! 3. Each post is rendered through the `main.html` template into
//!    `{slug}.html`, and the posts, newest first, are rendered through
//!    `recent.html` (wrapped in `main.html`) into `index.html` and through
//!    `feed.html` into `feed.html` ([`crate::write`]).
//!
//! Templates use Go's text/template syntax (e.g., `{{.Title}}`,
//! `{{range .}}...{{end}}`); see [`crate::value`] for the fields available to
//! each template. [`crate::build::build_site`] ties the steps together.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod date;
pub mod markdown;
pub mod post;
pub mod prepare;
pub mod template;
pub mod value;
pub mod write;
