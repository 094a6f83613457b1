use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write quizzes: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize quizzes: {0}")]
    Json(#[from] serde_json::Error),
}
