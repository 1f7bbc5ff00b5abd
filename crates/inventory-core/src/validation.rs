//! # Validation Module
//!
//! Business rule validation applied before writes reach the database.
//! The database still enforces NOT NULL / foreign key constraints; these
//! checks exist so callers get a typed error instead of a constraint
//! violation message.

use crate::error::ValidationError;
use crate::types::Item;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of an item name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_NAME_LENGTH`] characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates an item before it is inserted or updated.
///
/// Checks the name and that the quantity is not negative. Everything else
/// (category existence, price sanity for the caller's use case) is either a
/// database constraint or an application-layer concern.
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    validate_item_name(&item.name)?;

    if item.quantity < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
