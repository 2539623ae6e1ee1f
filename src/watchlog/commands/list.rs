use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// The whole collection, in insertion order.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let records = store.load()?;
    Ok(CmdResult::default().with_listed_records(records))
}
