use thiserror::Error;

#[derive(Error, Debug)]
pub enum LendzError {
    #[error("Item not found: {0}")]
    ItemNotFound(i32),

    #[error("Member not found: {0}")]
    MemberNotFound(String),
}

pub type Result<T> = std::result::Result<T, LendzError>;
