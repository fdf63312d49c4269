use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbsenceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("No session type '{session_type}' found for course '{course_name}'")]
    SessionTypeNotFound {
        course_name: String,
        session_type: String,
    },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type AbsenceResult<T> = Result<T, AbsenceError>;
