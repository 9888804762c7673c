use crate::date::DATE_FORMAT;
use crate::post::Post;
use gtmpl::Value;
use std::collections::HashMap;

impl From<&Post> for Value {
    /// Converts a [`Post`] into a [`Value`] with fields `Name`, `Title`,
    /// `Content`, `Date` (`YYYY-MM-DD`), `Timestamp` (RFC 3339), and `PubDate`
    /// (RFC 2822, as RSS expects).
    fn from(p: &Post) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("Name".to_owned(), Value::String(p.name.clone()));
        m.insert("Title".to_owned(), Value::String(p.title.clone()));
        m.insert("Content".to_owned(), Value::String(p.content.clone()));
        m.insert(
            "Date".to_owned(),
            Value::String(p.date.format(DATE_FORMAT).to_string()),
        );
        m.insert("Timestamp".to_owned(), Value::String(p.date.to_rfc3339()));
        m.insert("PubDate".to_owned(), Value::String(p.date.to_rfc2822()));
        Value::Object(m)
    }
}

/// The data for a full page whose body was rendered separately (e.g., the
/// index page).
pub struct Page<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

impl From<Page<'_>> for Value {
    /// Converts a [`Page`] into a [`Value::Object`] with fields `Title` and
    /// `Content`.
    fn from(page: Page) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("Title".to_owned(), Value::String(page.title.to_owned()));
        m.insert("Content".to_owned(), Value::String(page.content.to_owned()));
        Value::Object(m)
    }
}

/// Converts a list of posts into a [`Value::Array`] of post values.
pub fn posts_value(posts: &[Post]) -> Value {
    Value::Array(posts.iter().map(Value::from).collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn string_field<'a>(value: &'a Value, key: &str) -> &'a str {
        match value {
            Value::Object(m) => match m.get(key) {
                Some(Value::String(s)) => s,
                _ => panic!("missing string field `{}`", key),
            },
            _ => panic!("wanted an object"),
        }
    }

    #[test]
    fn test_post_value() {
        let post = Post {
            name: "hi".to_owned(),
            title: "Hi".to_owned(),
            content: "<p>Body</p>".to_owned(),
            date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        };
        let value = Value::from(&post);
        assert_eq!("hi", string_field(&value, "Name"));
        assert_eq!("Hi", string_field(&value, "Title"));
        assert_eq!("<p>Body</p>", string_field(&value, "Content"));
        assert_eq!("2023-01-01", string_field(&value, "Date"));
        assert_eq!("2023-01-01T00:00:00+00:00", string_field(&value, "Timestamp"));
        assert!(string_field(&value, "PubDate").ends_with("Jan 2023 00:00:00 +0000"));
    }

    #[test]
    fn test_page_value() {
        let value = Value::from(Page {
            title: "my page",
            content: "<ul></ul>",
        });
        assert_eq!("my page", string_field(&value, "Title"));
        assert_eq!("<ul></ul>", string_field(&value, "Content"));
    }

    #[test]
    fn test_posts_value() {
        match posts_value(&[]) {
            Value::Array(items) => assert!(items.is_empty()),
            _ => panic!("wanted an array"),
        }
    }
}
