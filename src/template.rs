//! Renders Go-style text templates (see [`gtmpl`]) against template values.
//! Templates are read and compiled on every call; nothing is cached.

use gtmpl::Value;
use std::fmt;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Reads the template at `path`, compiles it, and executes it against
/// `value`, returning the rendered bytes.
pub fn render_template<V: Into<Value>>(path: &Path, value: V) -> Result<Vec<u8>> {
    let source = read_to_string(path).map_err(|err| Error::Read {
        path: path.to_owned(),
        err,
    })?;
    match gtmpl::template(&source, value) {
        Ok(output) => Ok(output.into_bytes()),
        Err(e) => Err(Error::Render {
            path: path.to_owned(),
            message: e.to_string(),
        }),
    }
}

/// The result of a fallible templating operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error rendering a template.
#[derive(Debug)]
pub enum Error {
    /// Returned when the template file can't be read.
    Read { path: PathBuf, err: std::io::Error },

    /// Returned when the template fails to compile or to execute.
    Render { path: PathBuf, message: String },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Read { path, err } => {
                write!(f, "Opening template file '{}': {}", path.display(), err)
            }
            Error::Render { path, message } => {
                write!(f, "Rendering template '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { path: _, err } => Some(err),
            Error::Render { .. } => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    #[test]
    fn test_render_template() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("main.html");
        fs::write(&path, "<html>{{.Title}}{{.Content}}</html>")?;

        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("Title".to_owned(), Value::String("Hi".to_owned()));
        m.insert("Content".to_owned(), Value::String("<p>x</p>".to_owned()));

        let out = render_template(&path, Value::Object(m))?;
        assert_eq!("<html>Hi<p>x</p></html>", String::from_utf8(out)?);
        Ok(())
    }

    #[test]
    fn test_render_template_range() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("recent.html");
        fs::write(&path, "{{range .}}[{{.}}]{{end}}")?;

        let value = Value::Array(vec![
            Value::String("a".to_owned()),
            Value::String("b".to_owned()),
        ]);
        let out = render_template(&path, value)?;
        assert_eq!("[a][b]", String::from_utf8(out)?);
        Ok(())
    }

    #[test]
    fn test_render_template_missing_file() {
        let result = render_template(Path::new("./no-such-template.html"), Value::Nil);
        assert!(matches!(result, Err(Error::Read { .. })));
    }

    #[test]
    fn test_render_template_syntax_error() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.html");
        fs::write(&path, "{{range .}}never closed")?;

        let result = render_template(&path, Value::Array(Vec::new()));
        assert!(matches!(result, Err(Error::Render { .. })));
        Ok(())
    }
}
