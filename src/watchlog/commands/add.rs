use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MediaRecord;
use crate::store::DataStore;

/// Append a record and persist. No duplicate check; the same title can be
/// tracked more than once.
pub fn run<S: DataStore>(store: &mut S, record: MediaRecord) -> Result<CmdResult> {
    let mut records = store.load()?;
    records.push(record.clone());
    store.save(&records)?;

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Added {} to the database",
        record.title
    )));
    Ok(result)
}
