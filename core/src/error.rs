use crate::types::StudentId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Lab name too long: {len} characters (limit {limit})")]
    NameTooLong { len: usize, limit: usize },

    #[error("Unknown lab suffix '{0}'")]
    UnknownSuffix(String),

    #[error("Duplicate student id {id}")]
    DuplicateStudent { id: StudentId },

    #[error("Action event references unknown student id {id}")]
    UnknownStudent { id: StudentId },

    #[error("Resource field '{field}' cannot go negative (got {value})")]
    NegativeResource { field: &'static str, value: i64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GameResult<T> = Result<T, GameError>;
