use thiserror::Error;

/// Failures raised by the item and category rules before anything reaches
/// persistence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn category_not_found(id: uuid::Uuid) -> Self {
        Self::NotFound(format!("category {id} not found"))
    }

    pub fn item_not_found(id: uuid::Uuid) -> Self {
        Self::NotFound(format!("item {id} not found"))
    }
}
