use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(u32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
