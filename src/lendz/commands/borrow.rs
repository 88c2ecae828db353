use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LendzError, Result};
use crate::library::Library;
use crate::model::{BorrowOutcome, BORROW_CAP};

pub fn run(library: &mut Library, member_name: &str, item_id: i32) -> Result<CmdResult> {
    // Clone the catalog entry before taking the roster borrow
    let item = library
        .find_item_by_id(item_id)
        .cloned()
        .ok_or(LendzError::ItemNotFound(item_id))?;
    let member = library
        .find_member_by_name_mut(member_name)
        .ok_or_else(|| LendzError::MemberNotFound(member_name.to_string()))?;

    let mut result = CmdResult::default();
    match member.borrow_item(&item) {
        BorrowOutcome::Borrowed => {
            result.add_message(CmdMessage::success(format!(
                "Item '{}' has been added to {}'s list of borrowed books.",
                item.title(),
                member.name()
            )));
            result.affected_items.push(item);
        }
        BorrowOutcome::CapReached => {
            result.add_message(CmdMessage::warning(format!(
                "You cannot borrow more than {} items.",
                BORROW_CAP
            )));
        }
    }

    Ok(result)
}
