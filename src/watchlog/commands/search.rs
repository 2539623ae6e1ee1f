use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Look up the first record with an exactly matching title.
pub fn run<S: DataStore>(store: &S, title: &str) -> Result<CmdResult> {
    let records = store.load()?;
    match helpers::position_by_title(&records, title) {
        Some(pos) => Ok(CmdResult::default().with_listed_records(vec![records[pos].clone()])),
        None => Ok(CmdResult::not_found()),
    }
}
