use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether a record is a movie or a TV show.
///
/// Persisted as the display strings `"Movie"` / `"TV Show"` so the database
/// file stays human-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum MediaType {
    #[serde(rename = "Movie")]
    #[value(name = "movie")]
    Movie,
    #[serde(rename = "TV Show")]
    #[value(name = "tv-show", alias = "tv")]
    TvShow,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "Movie"),
            MediaType::TvShow => write!(f, "TV Show"),
        }
    }
}

/// One tracked media item.
///
/// The title doubles as the lookup key for rate/watch/search: there is no
/// generated id, and duplicate titles always resolve to the first insertion.
/// Rating and WatchDate are kept as opaque strings; the CLI layer validates
/// them before they get here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Type")]
    pub media_type: MediaType,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Watched")]
    pub watched: bool,
    #[serde(rename = "Rating")]
    pub rating: Option<String>,
    #[serde(rename = "WatchDate")]
    pub watch_date: Option<String>,
}

impl MediaRecord {
    pub fn new(title: String, media_type: MediaType, platform: String) -> Self {
        Self {
            title,
            media_type,
            platform,
            watched: false,
            rating: None,
            watch_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_unwatched_and_unrated() {
        let rec = MediaRecord::new("Inception".into(), MediaType::Movie, "Netflix".into());
        assert!(!rec.watched);
        assert_eq!(rec.rating, None);
        assert_eq!(rec.watch_date, None);
    }

    #[test]
    fn serializes_with_legacy_keys() {
        let rec = MediaRecord::new("Dark".into(), MediaType::TvShow, "Netflix".into());
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["Title"], "Dark");
        assert_eq!(json["Type"], "TV Show");
        assert_eq!(json["Platform"], "Netflix");
        assert_eq!(json["Watched"], false);
        assert!(json["Rating"].is_null());
        assert!(json["WatchDate"].is_null());
    }

    #[test]
    fn deserializes_legacy_file_shape() {
        let json = r#"{
            "Title": "Inception",
            "Type": "Movie",
            "Platform": "Netflix",
            "Watched": true,
            "Rating": "9",
            "WatchDate": "2024-05-01"
        }"#;
        let rec: MediaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.media_type, MediaType::Movie);
        assert_eq!(rec.rating.as_deref(), Some("9"));
        assert_eq!(rec.watch_date.as_deref(), Some("2024-05-01"));
    }
}
