use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("swift code already exists: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}
