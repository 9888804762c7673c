use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// The configuration file read when none is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

fn default_title() -> String {
    String::from("my page")
}

/// The site configuration. Loaded once at startup and passed by reference to
/// everything that needs it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    /// The directory holding the markdown post sources.
    #[serde(rename = "SourceDir")]
    pub source_directory: PathBuf,

    /// The directory holding `main.html`, `recent.html`, and `feed.html`.
    #[serde(rename = "TemplateDir")]
    pub template_directory: PathBuf,

    /// The directory into which the site is rendered.
    #[serde(rename = "OutputDir")]
    pub output_directory: PathBuf,

    /// The title of the index page.
    #[serde(rename = "Title", default = "default_title")]
    pub title: String,
}

impl Config {
    /// Loads a [`Config`] from the JSON file at `path`.
    pub fn from_file(path: &Path) -> Result<Config> {
        let file = File::open(path)
            .map_err(|e| anyhow!("Opening config file `{}`: {}", path.display(), e))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| anyhow!("Parsing config file `{}`: {}", path.display(), e))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn test_from_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            r#"{"SourceDir": "posts", "TemplateDir": "templates", "OutputDir": "public"}"#,
        )?;

        assert_eq!(
            Config {
                source_directory: PathBuf::from("posts"),
                template_directory: PathBuf::from("templates"),
                output_directory: PathBuf::from("public"),
                title: String::from("my page"),
            },
            Config::from_file(&path)?
        );
        Ok(())
    }

    #[test]
    fn test_from_file_title() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            r#"{"SourceDir": "a", "TemplateDir": "b", "OutputDir": "c", "Title": "Blog"}"#,
        )?;
        assert_eq!("Blog", Config::from_file(&path)?.title);
        Ok(())
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(Path::new("./no-such-config.json")).unwrap_err();
        assert!(err.to_string().starts_with("Opening config file"), "{}", err);
    }

    #[test]
    fn test_from_file_malformed() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{"SourceDir": "posts"}"#)?;
        assert!(Config::from_file(&path).is_err());
        Ok(())
    }
}
