//! User-facing notices
//!
//! Every failure during a conversion is handled where it happens and turned
//! into a [`Notice`]. The orchestration code only talks to a [`Reporter`];
//! the terminal shell renders notices as dialogs, tests simply record them.

use log::{info, warn};
use std::fmt;
use std::sync::mpsc::Sender;
use std::sync::Mutex;

/// Kinds of problems a conversion can run into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Source file does not exist
    SourceNotFound,
    /// Source file exists but could not be read
    SourceUnreadable,
    /// Article download or extraction failed
    SourceFetchFailed,
    /// No valid source type was chosen
    SourceModeNotSelected,
    /// No valid language was chosen
    LanguageNotSelected,
    /// Audio output name was left empty
    AudioNameMissing,
    /// Text output could not be written
    PersistFailed,
    /// Speech service call or audio write failed
    SynthesisFailed,
}

impl Condition {
    /// Short headline shown above the detail
    pub fn headline(&self) -> &'static str {
        match self {
            Condition::SourceNotFound => "File not found",
            Condition::SourceUnreadable => "Could not read file",
            Condition::SourceFetchFailed => "Failed to fetch URL",
            Condition::SourceModeNotSelected => "Choose type of convert",
            Condition::LanguageNotSelected => "Insert audio language",
            Condition::AudioNameMissing => "Insert audio file name",
            Condition::PersistFailed => "Failed to save text",
            Condition::SynthesisFailed => "Failed to create audio",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error {
        condition: Condition,
        detail: Option<String>,
    },
}

impl Notice {
    pub fn error(condition: Condition, detail: impl Into<String>) -> Self {
        Notice::Error {
            condition,
            detail: Some(detail.into()),
        }
    }

    pub fn condition(&self) -> Option<Condition> {
        match self {
            Notice::Success(_) => None,
            Notice::Error { condition, .. } => Some(*condition),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Success(msg) => f.write_str(msg),
            Notice::Error {
                condition,
                detail: Some(detail),
            } => write!(f, "{}: {}", condition, detail),
            Notice::Error {
                condition,
                detail: None,
            } => write!(f, "{}.", condition),
        }
    }
}

/// Sink for notices raised during a conversion
pub trait Reporter {
    fn notify(&self, notice: Notice);

    fn report(&self, condition: Condition, detail: Option<String>) {
        warn!("{}: {}", condition, detail.as_deref().unwrap_or("-"));
        self.notify(Notice::Error { condition, detail });
    }

    fn success(&self, message: &str) {
        info!("{}", message);
        self.notify(Notice::Success(message.to_string()));
    }
}

/// Reporter that keeps every notice in memory
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices recorded so far
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Conditions in the order they were raised
    pub fn conditions(&self) -> Vec<Condition> {
        self.notices()
            .iter()
            .filter_map(Notice::condition)
            .collect()
    }

    pub fn contains(&self, condition: Condition) -> bool {
        self.conditions().contains(&condition)
    }
}

impl Reporter for NoticeLog {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

/// Reporter that forwards notices to another thread
pub struct ChannelReporter {
    tx: Sender<Notice>,
}

impl ChannelReporter {
    pub fn new(tx: Sender<Notice>) -> Self {
        Self { tx }
    }
}

impl Reporter for ChannelReporter {
    fn notify(&self, notice: Notice) {
        // Receiver gone means the shell stopped listening; nothing to show
        let _ = self.tx.send(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_notice_display() {
        let notice = Notice::error(Condition::SourceNotFound, "notes.txt");
        assert_eq!(notice.to_string(), "File not found: notes.txt");

        let notice = Notice::Error {
            condition: Condition::AudioNameMissing,
            detail: None,
        };
        assert_eq!(notice.to_string(), "Insert audio file name.");

        let notice = Notice::Success("Audio created successfully!".into());
        assert_eq!(notice.to_string(), "Audio created successfully!");
        assert!(!notice.is_error());
    }

    #[test]
    fn test_notice_log_records_in_order() {
        let log = NoticeLog::new();
        log.report(Condition::AudioNameMissing, None);
        log.success("done");
        log.report(Condition::PersistFailed, Some("disk full".into()));

        assert_eq!(log.notices().len(), 3);
        assert_eq!(
            log.conditions(),
            vec![Condition::AudioNameMissing, Condition::PersistFailed]
        );
        assert!(log.contains(Condition::PersistFailed));
        assert!(!log.contains(Condition::SourceNotFound));
    }

    #[test]
    fn test_channel_reporter_forwards() {
        let (tx, rx) = mpsc::channel();
        let reporter = ChannelReporter::new(tx);
        reporter.report(Condition::LanguageNotSelected, None);

        let notice = rx.recv().unwrap();
        assert_eq!(notice.condition(), Some(Condition::LanguageNotSelected));
    }

    #[test]
    fn test_channel_reporter_ignores_closed_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let reporter = ChannelReporter::new(tx);
        reporter.success("nobody listening");
    }
}
