//! Form fields of the converter screen

use crate::convert::{non_blank, ConversionRequest};
use crate::source::SourceMode;
use crate::speech::Language;
use std::fmt::Write as _;

/// Longest input preview shown on the form
const PREVIEW_CHARS: usize = 40;

/// The five editable fields, in screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SourceType,
    Input,
    Language,
    AudioName,
    TextName,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::SourceType,
        Field::Input,
        Field::Language,
        Field::AudioName,
        Field::TextName,
    ];

    /// Field selected by the number typed at the prompt
    pub fn from_key(key: &str) -> Option<Field> {
        let idx: usize = key.trim().parse().ok()?;
        Self::ALL.get(idx.checked_sub(1)?).copied()
    }

    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0) + 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::SourceType => "Choose an option to convert",
            Field::Input => "Introduce your file name, url or text",
            Field::Language => "Choose the language",
            Field::AudioName => "Insert name of the audio file",
            Field::TextName => "Insert name of the file to save text",
        }
    }

    /// Offered values for selector fields
    pub fn choices(&self) -> Option<String> {
        match self {
            Field::SourceType => Some(
                SourceMode::ALL
                    .iter()
                    .map(SourceMode::label)
                    .collect::<Vec<_>>()
                    .join(" / "),
            ),
            Field::Language => Some(
                Language::ALL
                    .iter()
                    .map(Language::label)
                    .collect::<Vec<_>>()
                    .join(" / "),
            ),
            _ => None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Input)
    }
}

/// Current values of the form
///
/// Values are kept as typed; they are only interpreted when a
/// [`ConversionRequest`] is built, so a bad choice shows up as a notice on
/// convert rather than being silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub source_type: String,
    pub input: String,
    pub language: String,
    pub audio_name: String,
    pub text_name: String,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SourceType => &self.source_type,
            Field::Input => &self.input,
            Field::Language => &self.language,
            Field::AudioName => &self.audio_name,
            Field::TextName => &self.text_name,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::SourceType => self.source_type = value,
            Field::Input => self.input = value,
            Field::Language => self.language = value,
            Field::AudioName => self.audio_name = value,
            Field::TextName => self.text_name = value,
        }
    }

    /// Snapshot the form into a request for one run
    pub fn request(&self) -> ConversionRequest {
        ConversionRequest {
            source: self
                .source_type
                .parse::<SourceMode>()
                .ok()
                .map(|mode| mode.select(self.input.trim())),
            language: self.language.parse().ok(),
            audio_name: non_blank(self.audio_name.clone()),
            text_name: non_blank(self.text_name.clone()),
        }
    }

    /// Render the form as shown on screen
    pub fn render(&self) -> String {
        let mut out = String::new();
        let title = "Text to Speech Converter";
        let _ = writeln!(out, "{}", title);
        let _ = writeln!(out, "{}", "=".repeat(title.len()));

        for field in Field::ALL {
            let value = if field.is_multiline() {
                preview(self.get(field))
            } else {
                self.get(field).to_string()
            };
            match field.choices() {
                Some(choices) => {
                    let _ = writeln!(
                        out,
                        " {}. {} [{}]: {}",
                        field.number(),
                        field.label(),
                        choices,
                        value
                    );
                }
                None => {
                    let _ = writeln!(out, " {}. {}: {}", field.number(), field.label(), value);
                }
            }
        }
        out
    }
}

/// First line of a multi-line value, shortened for display
fn preview(value: &str) -> String {
    let lines = value.lines().count();
    let first = value.lines().next().unwrap_or("");

    let mut shown: String = first.chars().take(PREVIEW_CHARS).collect();
    if first.chars().count() > PREVIEW_CHARS {
        shown.push('…');
    }
    if lines > 1 {
        let _ = write!(shown, " ({} lines)", lines);
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceSelection;
    use std::path::PathBuf;

    #[test]
    fn test_field_keys() {
        assert_eq!(Field::from_key("1"), Some(Field::SourceType));
        assert_eq!(Field::from_key(" 5 "), Some(Field::TextName));
        assert_eq!(Field::from_key("0"), None);
        assert_eq!(Field::from_key("6"), None);
        assert_eq!(Field::from_key("c"), None);
        for field in Field::ALL {
            assert_eq!(Field::from_key(&field.number().to_string()), Some(field));
        }
    }

    #[test]
    fn test_request_from_form() {
        let mut form = Form::new();
        form.set(Field::SourceType, "File name");
        form.set(Field::Input, "  notes.txt \n");
        form.set(Field::Language, "Français");
        form.set(Field::AudioName, "");
        form.set(Field::TextName, "save2");

        let request = form.request();
        assert_eq!(
            request.source,
            Some(SourceSelection::File(PathBuf::from("notes.txt")))
        );
        assert_eq!(request.language, Some(Language::French));
        assert_eq!(request.audio_name, None);
        assert_eq!(request.text_name.as_deref(), Some("save2"));
    }

    #[test]
    fn test_unknown_choices_become_none() {
        let mut form = Form::new();
        form.set(Field::SourceType, "PDF");
        form.set(Field::Language, "Deutsch");

        let request = form.request();
        assert!(request.source.is_none());
        assert!(request.language.is_none());
    }

    #[test]
    fn test_render_shows_values_and_choices() {
        let mut form = Form::new();
        form.set(Field::SourceType, "Text");
        form.set(Field::Input, "first line\nsecond line");

        let screen = form.render();
        assert!(screen.starts_with("Text to Speech Converter\n"));
        assert!(screen.contains(" 1. Choose an option to convert [File name / URL / Text]: Text"));
        assert!(screen.contains(" 2. Introduce your file name, url or text: first line (2 lines)"));
        assert!(screen.contains("[Español / English / Français]"));
    }

    #[test]
    fn test_preview_truncates() {
        let long = "a".repeat(60);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 1);
        assert!(shown.ends_with('…'));
        assert_eq!(preview(""), "");
    }
}
