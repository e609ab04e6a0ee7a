pub mod category;
pub mod errors;
pub mod item;

pub use category::Category;
pub use errors::DomainError;
pub use item::Item;

/// Trimmed resource name; blank names are rejected even when they pass the
/// length check.
pub fn normalized_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::ValidationError(
            "Name must not be blank".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
