//! One conversion run
//!
//! A [`ConversionRequest`] is built from the form each time the user hits
//! Convert. [`Converter::run`] resolves the text once, then feeds it to the
//! audio and text outputs that were asked for.

use crate::config::Config;
use crate::persist::persist_text;
use crate::report::{Condition, Reporter};
use crate::source::{resolve_source, ArticleFetcher, HttpArticleFetcher, SourceSelection};
use crate::speech::{synthesize_speech, GoogleTts, Language, Synthesizer};
use crate::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Everything the user chose for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionRequest {
    /// `None` when no valid source type was picked
    pub source: Option<SourceSelection>,
    /// `None` when no valid language was picked
    pub language: Option<Language>,
    pub audio_name: Option<String>,
    pub text_name: Option<String>,
}

impl ConversionRequest {
    pub fn new(source: SourceSelection) -> Self {
        Self {
            source: Some(source),
            ..Default::default()
        }
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Ask for `<name>.mp3`; blank names count as not given
    pub fn audio_name(mut self, name: impl Into<String>) -> Self {
        self.audio_name = non_blank(name.into());
        self
    }

    /// Ask for `<name>.txt`; blank names count as not given
    pub fn text_name(mut self, name: impl Into<String>) -> Self {
        self.text_name = non_blank(name.into());
        self
    }
}

/// Trimmed name, or `None` when nothing is left
pub fn non_blank(name: String) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// What a run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// Resolved text, `None` if the run stopped before resolving
    pub text: Option<String>,
    pub audio_file: Option<PathBuf>,
    pub text_file: Option<PathBuf>,
}

/// Runs conversions against a fetcher and a synthesizer
pub struct Converter {
    fetcher: Box<dyn ArticleFetcher>,
    synth: Box<dyn Synthesizer>,
    output_dir: PathBuf,
}

impl Converter {
    pub fn new(
        fetcher: Box<dyn ArticleFetcher>,
        synth: Box<dyn Synthesizer>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            synth,
            output_dir: output_dir.into(),
        }
    }

    /// Converter with the HTTP article fetcher and Google speech backend
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Box::new(HttpArticleFetcher::from_config(config)?),
            Box::new(GoogleTts::from_config(config)?),
            config.output_dir(),
        ))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Resolve, synthesize, persist
    ///
    /// Every problem is reported through `reporter`; only a missing source
    /// type stops the run early.
    pub fn run(&self, request: ConversionRequest, reporter: &dyn Reporter) -> ConversionOutcome {
        let mut outcome = ConversionOutcome::default();

        let Some(source) = request.source else {
            reporter.report(Condition::SourceModeNotSelected, None);
            return outcome;
        };

        debug!("Resolving {} source", source.mode());
        let text = resolve_source(&source, self.fetcher.as_ref(), reporter);

        match request.audio_name.as_deref() {
            Some(name) => {
                outcome.audio_file = synthesize_speech(
                    &text,
                    request.language,
                    name,
                    &self.output_dir,
                    self.synth.as_ref(),
                    reporter,
                );
            }
            None => reporter.report(Condition::AudioNameMissing, None),
        }

        if let Some(name) = request.text_name.as_deref() {
            match persist_text(&self.output_dir, name, &text) {
                Ok(path) => {
                    info!("Text saved to {:?}", path);
                    outcome.text_file = Some(path);
                }
                Err(e) => reporter.report(Condition::PersistFailed, Some(e.to_string())),
            }
        }

        outcome.text = Some(text);
        outcome
    }
}
