use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid page record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("duplicate component id \"{id}\"")]
    DuplicateComponentId { id: String },
}
