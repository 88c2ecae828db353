use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LendzError, Result};
use crate::library::Library;
use crate::model::ReturnOutcome;

pub fn run(library: &mut Library, member_name: &str, item_id: i32) -> Result<CmdResult> {
    let item = library
        .find_item_by_id(item_id)
        .cloned()
        .ok_or(LendzError::ItemNotFound(item_id))?;
    let member = library
        .find_member_by_name_mut(member_name)
        .ok_or_else(|| LendzError::MemberNotFound(member_name.to_string()))?;

    let mut result = CmdResult::default();
    match member.return_item(&item) {
        ReturnOutcome::Returned => {
            result.add_message(CmdMessage::success(format!(
                "Item '{}' has been successfully returned.",
                item.title()
            )));
            result.affected_items.push(item);
        }
        ReturnOutcome::NotBorrowed => {
            result.add_message(CmdMessage::warning(format!(
                "Item '{}' was not in the list of borrowed items.",
                item.title()
            )));
        }
    }

    Ok(result)
}
