use crate::commands::CmdResult;
use crate::error::Result;
use crate::library::Library;

pub fn run(library: &Library) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_items(library.catalog().to_vec()))
}
