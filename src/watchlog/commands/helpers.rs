use crate::model::MediaRecord;

/// Position of the first record whose title matches exactly.
///
/// Titles are the lookup key and are not unique; later duplicates are
/// unreachable by rate/watch/search.
pub fn position_by_title(records: &[MediaRecord], title: &str) -> Option<usize> {
    records.iter().position(|r| r.title == title)
}
