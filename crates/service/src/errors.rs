use thiserror::Error;

/// Rejections of caller-supplied input. Raised before any store access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid request payload: {0}")]
    Payload(String),
    /// Carries the label the message starts with (`SwiftCode` or `Swift code`).
    #[error("{0} must be either 8 or 11 characters long")]
    SwiftCodeLength(&'static str),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("swift code already exists: {0}")]
    Conflict(String),
    #[error("data integrity error: {0}")]
    DataIntegrity(String),
    #[error("database error: {0}")]
    Db(String),
    /// Store failure while collecting the branches of a headquarters record.
    #[error("branch lookup failed: {0}")]
    BranchLookup(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        use models::errors::ModelError;
        match e {
            ModelError::Validation(_) => ValidationError::SwiftCodeLength("SwiftCode").into(),
            ModelError::Conflict(code) => ServiceError::Conflict(code),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
