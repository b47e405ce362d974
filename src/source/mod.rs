//! Text acquisition
//!
//! A conversion starts from one of three sources: a local file, a web
//! article, or text typed by the user. [`resolve_source`] turns a
//! [`SourceSelection`] into the text the rest of the run works on.

pub mod article;
pub mod fetch;

pub use article::extract_article;
pub use fetch::{ArticleFetcher, HttpArticleFetcher};

use crate::report::{Condition, Reporter};
use log::debug;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Source type chosen in the form, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    File,
    Url,
    Literal,
}

impl SourceMode {
    pub const ALL: [SourceMode; 3] = [SourceMode::File, SourceMode::Url, SourceMode::Literal];

    /// Label shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            SourceMode::File => "File name",
            SourceMode::Url => "URL",
            SourceMode::Literal => "Text",
        }
    }

    /// Attach the raw input to this mode
    pub fn select(self, payload: impl Into<String>) -> SourceSelection {
        let payload = payload.into();
        match self {
            SourceMode::File => SourceSelection::File(PathBuf::from(payload)),
            SourceMode::Url => SourceSelection::Url(payload),
            SourceMode::Literal => SourceSelection::Literal(payload),
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SourceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file name" | "filename" | "file" => Ok(SourceMode::File),
            "url" | "link" => Ok(SourceMode::Url),
            "text" => Ok(SourceMode::Literal),
            other => Err(format!("unknown source type '{}'", other)),
        }
    }
}

/// Where the text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    /// Read a local text file
    File(PathBuf),
    /// Download a web page and extract its article text
    Url(String),
    /// Use the given text as is
    Literal(String),
}

impl SourceSelection {
    pub fn mode(&self) -> SourceMode {
        match self {
            SourceSelection::File(_) => SourceMode::File,
            SourceSelection::Url(_) => SourceMode::Url,
            SourceSelection::Literal(_) => SourceMode::Literal,
        }
    }
}

/// Resolve a selection to text
///
/// Failures never abort the run: they are reported and yield an empty
/// string, so the caller can still save or speak whatever it has.
pub fn resolve_source(
    selection: &SourceSelection,
    fetcher: &dyn ArticleFetcher,
    reporter: &dyn Reporter,
) -> String {
    match selection {
        SourceSelection::File(path) => {
            debug!("Reading source file {:?}", path);
            match read_text_file(path) {
                Ok(text) => text,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    reporter.report(Condition::SourceNotFound, Some(path.display().to_string()));
                    String::new()
                }
                Err(e) => {
                    reporter.report(
                        Condition::SourceUnreadable,
                        Some(format!("{}: {}", path.display(), e)),
                    );
                    String::new()
                }
            }
        }
        SourceSelection::Url(url) => {
            debug!("Fetching article from {}", url);
            match fetcher.fetch_article(url) {
                Ok(text) => text,
                Err(e) => {
                    reporter.report(Condition::SourceFetchFailed, Some(e.to_string()));
                    String::new()
                }
            }
        }
        SourceSelection::Literal(text) => text.clone(),
    }
}

/// Read a text file as UTF-8, falling back to Latin-1
///
/// Every byte is a valid Latin-1 character, so legacy Spanish and French
/// files keep their accents instead of failing.
fn read_text_file(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            debug!("{:?} is not UTF-8, decoding as Latin-1", path);
            Ok(e.into_bytes().into_iter().map(char::from).collect())
        }
    }
}
