use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskpadError {
    #[error("Invalid priority: {0}. Must be one of: high, medium, low")]
    InvalidPriority(String),

    #[error("Invalid due date: {0}. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM")]
    InvalidDue(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TaskpadError>;
