//! # DTO Projections
//!
//! Read-only shapes combining Item and Category fields, handed to the
//! application layer. Each is a flattened, denormalized view with no
//! identity or lifecycle of its own; the repository recomputes them on
//! every query.
//!
//! Row-shaped DTOs derive `sqlx::FromRow` (behind the `sqlx` feature) so
//! the database layer can decode them straight from a query; the Category
//! projection is instead built by the explicit mapping function in
//! [`crate::mapping`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category together with its display color, for pickers and legends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    /// Category name. Kept under the field name `category` to match the
    /// shape the application layer binds to.
    pub category: String,
    pub color_name: Option<String>,
    pub color_value: Option<String>,
}

/// Listing row as returned by the database-side listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ItemForListingDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category_name: Option<String>,
}

/// Listing row for the client-side (in-memory) listing path.
///
/// Carries the creation date so the window filter can run after the rows
/// are materialized, plus the flags the original projection exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ItemForListingWithDateDto {
    pub created_date: DateTime<Utc>,
    pub category_name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub name: String,
    pub notes: Option<String>,
}

/// Per-item value row: quantity times current-or-final price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ItemTotalValueDto {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub total_value_cents: i64,
}

/// Passthrough row of the `items_with_genres` view. One row per
/// (item, genre) pair; `genre` is `None` for untagged items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ItemWithGenresDto {
    pub id: i64,
    pub name: String,
    pub genre: Option<String>,
}
