use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;
use watchlog::api::WatchlogApi;
use watchlog::commands::config::ConfigAction;
use watchlog::commands::{CmdMessage, MessageLevel};
use watchlog::config::WatchlogConfig;
use watchlog::error::Result;
use watchlog::model::{MediaRecord, MediaType};
use watchlog::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: WatchlogApi<FileStore>,
    config: WatchlogConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            media_type,
            platform,
            rating,
            watched,
            date,
        }) => handle_add(&mut ctx, title, media_type, platform, rating, watched, date),
        Some(Commands::Rate { title, rating }) => handle_rate(&mut ctx, title, rating),
        Some(Commands::Watch { title, date }) => handle_watch(&mut ctx, title, date),
        Some(Commands::Search { title }) => handle_search(&ctx, title),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    // WATCHLOG_DATA_DIR is an override hook for tests and scripts
    let data_dir = match std::env::var_os("WATCHLOG_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let proj_dirs = ProjectDirs::from("com", "watchlog", "watchlog")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = WatchlogConfig::load(&data_dir).unwrap_or_default();
    let db_path = match &cli.database {
        Some(path) => path.clone(),
        None => data_dir.join(&config.data_file),
    };

    let store = FileStore::new(db_path);
    let api = WatchlogApi::new(store, data_dir);

    Ok(AppContext { api, config })
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    media_type: MediaType,
    platform: String,
    rating: Option<u8>,
    watched: bool,
    date: Option<NaiveDate>,
) -> Result<()> {
    let watch_date = if watched {
        Some(format_date(date.unwrap_or_else(today)))
    } else {
        None
    };

    let platform_hint = if ctx.config.knows_platform(&platform) {
        None
    } else {
        Some(CmdMessage::info(format!(
            "'{}' is not in your platforms list (see `watchlog config platforms`)",
            platform
        )))
    };

    let result = ctx.api.add_record(
        title,
        media_type,
        platform,
        rating.map(|r| r.to_string()),
        watched,
        watch_date,
    )?;
    print_messages(&result.messages);
    if let Some(hint) = platform_hint {
        print_messages(&[hint]);
    }
    Ok(())
}

fn handle_rate(ctx: &mut AppContext, title: String, rating: u8) -> Result<()> {
    let result = ctx.api.rate(&title, &rating.to_string())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_watch(ctx: &mut AppContext, title: String, date: Option<NaiveDate>) -> Result<()> {
    let watch_date = format_date(date.unwrap_or_else(today));
    let result = ctx.api.mark_watched(&title, Some(watch_date))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, title: String) -> Result<()> {
    let result = ctx.api.search(&title)?;
    for record in &result.listed_records {
        print_record_details(record);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for key in ["data-file", "platforms"] {
            if let Some(val) = config.get(key) {
                println!("{} = {}", key, val);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_record_details(record: &MediaRecord) {
    println!("Title: {}", record.title.bold());
    println!("Type: {}", record.media_type);
    println!("Platform: {}", record.platform);
    println!("Watched: {}", if record.watched { "Yes" } else { "No" });
    if record.watched {
        if let Some(date) = &record.watch_date {
            println!("Watch Date: {}", date);
        }
    }
    println!("Rating: {}", record.rating.as_deref().unwrap_or("Not rated"));
}

const TITLE_WIDTH: usize = 36;
const WATCHED_MARKER: &str = "✓";

fn print_records(records: &[MediaRecord]) {
    if records.is_empty() {
        println!("No media in the database");
        return;
    }

    let platform_width = records
        .iter()
        .map(|r| r.platform.width())
        .max()
        .unwrap_or(0);

    for record in records {
        let title = truncate_to_width(&record.title, TITLE_WIDTH);
        let title_pad = TITLE_WIDTH.saturating_sub(title.width());

        let type_str = format!("{:<8}", record.media_type.to_string());
        let platform_pad = platform_width.saturating_sub(record.platform.width());

        let watched_str = if record.watched {
            let date = record.watch_date.as_deref().unwrap_or("");
            let date_pad = 10usize.saturating_sub(date.width());
            format!("{} {}{}", WATCHED_MARKER.green(), date.dimmed(), " ".repeat(date_pad))
        } else {
            " ".repeat(12)
        };

        let rating_str = match record.rating.as_deref() {
            Some(r) => format!("{:>2}/10", r).normal(),
            None => "not rated".to_string().dimmed(),
        };

        println!(
            "  {}{}  {}  {}{}  {} {}",
            title.bold(),
            " ".repeat(title_pad),
            type_str.dimmed(),
            record.platform,
            " ".repeat(platform_pad),
            watched_str,
            rating_str
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
