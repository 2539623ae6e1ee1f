//! # API Facade
//!
//! The single entry point for all watchlog operations, regardless of the UI
//! in front of it. The facade validates required fields before anything
//! touches the store (empty titles or platforms never reach disk) and
//! dispatches to the command layer, which holds the business logic.
//!
//! Generic over [`DataStore`] so tests can run against `InMemoryStore` while
//! production uses `FileStore`. Methods return structured
//! `Result<CmdResult>`; the facade never writes to stdout or stderr.

use crate::commands;
pub use crate::commands::config::ConfigAction;
use crate::error::{Result, WatchlogError};
use crate::model::{MediaRecord, MediaType};
use crate::store::DataStore;
use std::path::PathBuf;

pub struct WatchlogApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> WatchlogApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_record(
        &mut self,
        title: String,
        media_type: MediaType,
        platform: String,
        rating: Option<String>,
        watched: bool,
        watch_date: Option<String>,
    ) -> Result<commands::CmdResult> {
        let title = require_field(title, "Title")?;
        let platform = require_field(platform, "Platform")?;
        if let Some(r) = &rating {
            validate_rating(r)?;
        }

        let mut record = MediaRecord::new(title, media_type, platform);
        record.rating = rating;
        record.watched = watched;
        record.watch_date = if watched { watch_date } else { None };
        commands::add::run(&mut self.store, record)
    }

    pub fn rate(&mut self, title: &str, rating: &str) -> Result<commands::CmdResult> {
        let title = require_field(title.to_string(), "Title")?;
        validate_rating(rating)?;
        commands::rate::run(&mut self.store, &title, rating)
    }

    pub fn mark_watched(
        &mut self,
        title: &str,
        watch_date: Option<String>,
    ) -> Result<commands::CmdResult> {
        let title = require_field(title.to_string(), "Title")?;
        commands::watch::run(&mut self.store, &title, watch_date)
    }

    pub fn search(&self, title: &str) -> Result<commands::CmdResult> {
        let title = require_field(title.to_string(), "Title")?;
        commands::search::run(&self.store, &title)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

fn require_field(value: String, name: &str) -> Result<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        return Err(WatchlogError::Api(format!("{} cannot be empty", name)));
    }
    Ok(trimmed)
}

fn validate_rating(rating: &str) -> Result<()> {
    match rating.parse::<u8>() {
        Ok(n) if (1..=10).contains(&n) => Ok(()),
        _ => Err(WatchlogError::Api(format!(
            "Rating must be a number between 1 and 10, got '{}'",
            rating
        ))),
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
