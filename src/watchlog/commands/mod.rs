use crate::config::WatchlogConfig;
use crate::model::MediaRecord;

pub mod add;
pub mod config;
pub mod helpers;
pub mod list;
pub mod rate;
pub mod search;
pub mod watch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command.
///
/// A not-found title is reported as a Warning message with an empty affected
/// set, never as an error; the collection is left untouched in that case.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<MediaRecord>,
    pub listed_records: Vec<MediaRecord>,
    pub config: Option<WatchlogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<MediaRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<MediaRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config(mut self, config: WatchlogConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The shared not-found outcome for rate/watch/search on an unknown title.
    pub fn not_found() -> Self {
        let mut result = Self::default();
        result.add_message(CmdMessage::warning("Media not found."));
        result
    }
}
