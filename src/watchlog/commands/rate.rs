use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Set the rating on the first record matching the title, then persist.
pub fn run<S: DataStore>(store: &mut S, title: &str, rating: &str) -> Result<CmdResult> {
    let mut records = store.load()?;
    let Some(pos) = helpers::position_by_title(&records, title) else {
        return Ok(CmdResult::not_found());
    };

    records[pos].rating = Some(rating.to_string());
    store.save(&records)?;

    let mut result = CmdResult::default().with_affected_records(vec![records[pos].clone()]);
    result.add_message(CmdMessage::success(format!(
        "Rated {} with {} stars.",
        title, rating
    )));
    Ok(result)
}
