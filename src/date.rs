//! Extracts the publish date embedded in a post's file name (e.g.,
//! `2021-03-05-hello.md`). Every failure carries a fallback timestamp (the
//! current time) so callers can log the problem and keep going; see
//! [`Error::fallback`].

use chrono::{DateTime, NaiveDate, NaiveTime, ParseError, TimeZone, Utc};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// The strict format a date-shaped match must satisfy.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The length of a `YYYY-MM-DD` date.
pub const DATE_LEN: usize = 10;

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // A literal pattern; compiling it can't fail.
        Regex::new(r"([0-9]{1,4})-([0-9]{1,2})-([0-9]{1,2})").unwrap()
    })
}

/// Searches `s` for the first loosely date-shaped substring (1-4 digits, dash,
/// 1-2 digits, dash, 1-2 digits). If that substring is exactly
/// [`DATE_LEN`] characters long and parses as [`DATE_FORMAT`], returns
/// midnight UTC on that day.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    match date_pattern().find(s) {
        Some(m) if m.as_str().len() == DATE_LEN => {
            match NaiveDate::parse_from_str(m.as_str(), DATE_FORMAT) {
                Ok(date) => {
                    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
                }
                Err(err) => Err(Error::Parse {
                    input: s.to_owned(),
                    err,
                    fallback: Utc::now(),
                }),
            }
        }
        _ => Err(Error::NotFound {
            input: s.to_owned(),
            fallback: Utc::now(),
        }),
    }
}

/// Splits a leading date prefix (`YYYY-MM-DD-`) off of `s`, returning the
/// remainder. Returns `s` unchanged if it doesn't begin with a valid date or
/// if nothing follows the prefix.
pub fn strip_date_prefix(s: &str) -> &str {
    match s.get(..DATE_LEN) {
        Some(head) if NaiveDate::parse_from_str(head, DATE_FORMAT).is_ok() => {
            match s[DATE_LEN..].strip_prefix('-') {
                Some(rest) if !rest.is_empty() => rest,
                _ => s,
            }
        }
        _ => s,
    }
}

/// The result of a date-parse operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a failure to find a date in a string. Both variants hold the
/// timestamp at which the parse was attempted.
#[derive(Debug)]
pub enum Error {
    /// Returned when no `YYYY-MM-DD`-shaped substring was found.
    NotFound {
        input: String,
        fallback: DateTime<Utc>,
    },

    /// Returned when a date-shaped substring was found but isn't a valid
    /// calendar date (e.g., `2021-13-45`).
    Parse {
        input: String,
        err: ParseError,
        fallback: DateTime<Utc>,
    },
}

impl Error {
    /// The timestamp callers should use in place of the missing date.
    pub fn fallback(&self) -> DateTime<Utc> {
        match self {
            Error::NotFound { fallback, .. } => *fallback,
            Error::Parse { fallback, .. } => *fallback,
        }
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound { input, .. } => {
                write!(f, "Unable to parse date from string: {}", input)
            }
            Error::Parse { input, err, .. } => {
                write!(f, "Parsing date from string `{}`: {}", input, err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NotFound { .. } => None,
            Error::Parse { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_parse_date_prefix() -> Result<()> {
        assert_eq!(ymd(2021, 3, 5), parse_date("2021-03-05-hello")?);
        Ok(())
    }

    #[test]
    fn test_parse_date_embedded() -> Result<()> {
        assert_eq!(ymd(2019, 12, 31), parse_date("notes-2019-12-31-draft")?);
        Ok(())
    }

    #[test]
    fn test_parse_date_missing() {
        let before = Utc::now();
        match parse_date("hello") {
            Err(e @ Error::NotFound { .. }) => {
                assert!(e.fallback() >= before);
                assert_eq!(
                    "Unable to parse date from string: hello",
                    e.to_string()
                );
            }
            other => panic!("wanted NotFound; found {:?}", other),
        }
    }

    #[test]
    fn test_parse_date_short_match() {
        // matches the loose pattern but isn't ten characters long
        assert!(matches!(
            parse_date("2021-3-5-hello"),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_parse_date_invalid_calendar_date() {
        let result = parse_date("2021-13-45-hello");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_strip_date_prefix() {
        assert_eq!("hello", strip_date_prefix("2021-03-05-hello"));
        assert_eq!("hello", strip_date_prefix("hello"));
        assert_eq!("2021-03-05", strip_date_prefix("2021-03-05"));
        assert_eq!("2021-03-05-", strip_date_prefix("2021-03-05-"));
        assert_eq!("2021-13-05-x", strip_date_prefix("2021-13-05-x"));
        assert_eq!("x-2021-03-05", strip_date_prefix("x-2021-03-05"));
    }
}
