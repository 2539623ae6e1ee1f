use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use watchlog::model::MediaType;

#[derive(Parser, Debug)]
#[command(name = "watchlog")]
#[command(version)]
#[command(about = "Track the movies and TV shows you watch", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the database file (overrides config and the default location)
    #[arg(long, global = true, value_name = "FILE")]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a movie or TV show
    #[command(alias = "a")]
    Add {
        /// Title of the movie or show
        title: String,

        /// Movie or TV show
        #[arg(short = 't', long = "type", value_enum)]
        media_type: MediaType,

        /// Platform it streams on (e.g. Netflix)
        #[arg(short, long)]
        platform: String,

        /// Rating from 1 to 10
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=10))]
        rating: Option<u8>,

        /// Mark as already watched
        #[arg(short, long)]
        watched: bool,

        /// Watch date (YYYY-MM-DD, defaults to today when --watched is set)
        #[arg(short, long, requires = "watched")]
        date: Option<NaiveDate>,
    },

    /// Rate a tracked title
    #[command(alias = "r")]
    Rate {
        /// Title of the movie or show
        title: String,

        /// Rating from 1 to 10
        #[arg(value_parser = clap::value_parser!(u8).range(1..=10))]
        rating: u8,
    },

    /// Mark a tracked title as watched
    #[command(alias = "w")]
    Watch {
        /// Title of the movie or show
        title: String,

        /// Watch date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Find a tracked title
    #[command(alias = "s")]
    Search {
        /// Title of the movie or show
        title: String,
    },

    /// List everything in the database
    #[command(alias = "ls")]
    List,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, platforms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
