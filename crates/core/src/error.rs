use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown template family: {0}")]
    UnknownFamily(String),
}
