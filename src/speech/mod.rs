//! Speech synthesis
//!
//! Turns text into an MP3 file through a [`Synthesizer`] backend. The
//! production backend is the Google Translate speech endpoint in [`gtts`].

pub mod gtts;
pub mod tokenizer;

pub use gtts::GoogleTts;

use crate::persist::output_path;
use crate::report::{Condition, Reporter};
use crate::Result;
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Extension appended to audio output names
pub const AUDIO_EXTENSION: &str = "mp3";

/// Voices offered by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Spanish,
    English,
    French,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Spanish, Language::English, Language::French];

    /// Language code understood by the speech service
    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
            Language::French => "fr",
        }
    }

    /// Label shown in the form, in the language itself
    pub fn label(&self) -> &'static str {
        match self {
            Language::Spanish => "Español",
            Language::English => "English",
            Language::French => "Français",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "español" | "espanol" | "spanish" | "es" => Ok(Language::Spanish),
            "english" | "inglés" | "en" => Ok(Language::English),
            "français" | "francais" | "french" | "fr" => Ok(Language::French),
            other => Err(format!("unknown language '{}'", other)),
        }
    }
}

/// A text-to-speech backend producing MP3 bytes
pub trait Synthesizer: Send + Sync {
    fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>>;
}

/// Speak `text` into `<output_dir>/<base_name>.mp3`
///
/// Returns the written path, or `None` after reporting why nothing was
/// produced. Empty text is rejected before the service is contacted.
pub fn synthesize_speech(
    text: &str,
    language: Option<Language>,
    base_name: &str,
    output_dir: &Path,
    synth: &dyn Synthesizer,
    reporter: &dyn Reporter,
) -> Option<PathBuf> {
    let Some(language) = language else {
        reporter.report(Condition::LanguageNotSelected, None);
        return None;
    };

    if text.trim().is_empty() {
        reporter.report(Condition::SynthesisFailed, Some("no text to speak".to_string()));
        return None;
    }

    let path = output_path(output_dir, base_name, AUDIO_EXTENSION);
    debug!(
        "Synthesizing {} chars in {} to {:?}",
        text.chars().count(),
        language.code(),
        path
    );

    let written = synth
        .synthesize(text, language)
        .and_then(|audio| fs::write(&path, audio).map_err(Into::into));

    match written {
        Ok(()) => {
            info!("Audio written to {:?}", path);
            reporter.success("Audio created successfully!");
            Some(path)
        }
        Err(e) => {
            reporter.report(Condition::SynthesisFailed, Some(e.to_string()));
            None
        }
    }
}
