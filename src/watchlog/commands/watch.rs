use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Mark the first record matching the title as watched, then persist.
///
/// The date replaces any previous watch date, so repeating the call with the
/// same date is idempotent.
pub fn run<S: DataStore>(store: &mut S, title: &str, watch_date: Option<String>) -> Result<CmdResult> {
    let mut records = store.load()?;
    let Some(pos) = helpers::position_by_title(&records, title) else {
        return Ok(CmdResult::not_found());
    };

    records[pos].watched = true;
    records[pos].watch_date = watch_date;
    store.save(&records)?;

    let mut result = CmdResult::default().with_affected_records(vec![records[pos].clone()]);
    result.add_message(CmdMessage::success(format!("Marked {} as watched.", title)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};
    use crate::model::{MediaRecord, MediaType};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn sets_watched_and_date() {
        let mut store = InMemoryStore::new();
        let record = MediaRecord::new("Inception".into(), MediaType::Movie, "Netflix".into());
        add::run(&mut store, record).unwrap();

        run(&mut store, "Inception", Some("2024-05-01".into())).unwrap();

        let records = store.load().unwrap();
        assert!(records[0].watched);
        assert_eq!(records[0].watch_date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn marking_twice_with_the_same_date_is_idempotent() {
        let mut store = InMemoryStore::new();
        let record = MediaRecord::new("Inception".into(), MediaType::Movie, "Netflix".into());
        add::run(&mut store, record).unwrap();

        run(&mut store, "Inception", Some("2024-05-01".into())).unwrap();
        let first = store.load().unwrap();
        run(&mut store, "Inception", Some("2024-05-01".into())).unwrap();
        assert_eq!(store.load().unwrap(), first);
    }

    #[test]
    fn unknown_title_reports_not_found() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Nothing", None).unwrap();
        assert!(result.affected_records.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(store.load().unwrap().is_empty());
    }
}
