use crate::date::strip_date_prefix;
use crate::post::MARKDOWN_EXTENSION;
use pulldown_cmark::*;
use url::{ParseError as UrlParseError, Url};

const HTML_EXTENSION: &str = ".html";

/// Converts markdown to HTML, appending the result onto `out`.
pub fn to_html(out: &mut String, markdown: &str) {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    html::push_html(out, Parser::new_ext(markdown, options).map(convert));
}

fn convert(ev: Event) -> Event {
    match ev {
        Event::Start(tag) => Event::Start(convert_tag(tag)),
        Event::End(tag) => Event::End(convert_tag(tag)),
        _ => ev,
    }
}

fn convert_tag(tag: Tag) -> Tag {
    match tag {
        // Posts link to one another by source file name (e.g.,
        // `2021-03-05-hello.md`), but the rendered pages live at
        // `{slug}.html`.
        Tag::Link(
            link @ (LinkType::Inline
            | LinkType::Reference
            | LinkType::ReferenceUnknown
            | LinkType::Shortcut
            | LinkType::ShortcutUnknown
            | LinkType::Collapsed
            | LinkType::CollapsedUnknown),
            url,
            title,
        ) => match post_link(&url) {
            Some(converted) => {
                Tag::Link(link, CowStr::Boxed(converted.into_boxed_str()), title)
            }
            None => Tag::Link(link, url, title),
        },
        _ => tag,
    }
}

/// Rewrites a relative link to a sibling markdown file into a link to that
/// post's output page, preserving any fragment. Returns `None` for absolute
/// URLs and for links to anything other than a `.md` file.
fn post_link(url: &str) -> Option<String> {
    match Url::parse(url) {
        Err(UrlParseError::RelativeUrlWithoutBase) => {}
        _ => return None,
    }

    let (path, fragment) = match url.find('#') {
        Some(i) => url.split_at(i),
        None => (url, ""),
    };
    if path.starts_with('/') || path.contains('?') {
        return None;
    }

    let (dir, file_name) = match path.rfind('/') {
        Some(i) => path.split_at(i + 1),
        None => ("", path),
    };
    let stem = file_name.strip_suffix(MARKDOWN_EXTENSION)?;
    if stem.is_empty() {
        return None;
    }
    Some(format!(
        "{}{}{}{}",
        dir,
        strip_date_prefix(stem),
        HTML_EXTENSION,
        fragment
    ))
}
