//! # Error Types
//!
//! Validation errors for inventory-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  inventory-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │      (wraps ValidationError on the upsert path)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation failures.
///
/// Raised before a write reaches the database, so a caller can distinguish
/// "you sent garbage" from "the store rejected it".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty or missing.
    #[error("{field} is required")]
    Required { field: String },

    /// A field exceeded its maximum length.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A numeric field was outside its allowed range.
    #[error("{field} is out of range: {reason}")]
    OutOfRange { field: String, reason: String },
}
