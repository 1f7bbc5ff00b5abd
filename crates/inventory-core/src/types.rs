//! # Domain Types
//!
//! Core entities of the inventory tracker.
//!
//! ## Identity Convention
//! Every entity carries an integer `id` assigned by the database. An `Item`
//! with `id == 0` has not been persisted yet; the upsert path dispatches on
//! this (`id > 0` means update, otherwise insert).
//!
//! ## Soft Delete
//! Items are never physically removed. `is_deleted = true` marks logical
//! removal; inventory listings exclude such rows, but a direct lookup by id
//! still returns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Item
// =============================================================================

/// A tracked inventory item.
///
/// Prices are integer cents (i64) to avoid floating-point money errors.
/// All mutable fields are overwritten wholesale on update; there is no
/// partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Database identity. `0` means "new, not yet persisted".
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Optional longer description.
    pub description: Option<String>,

    /// Free-form notes.
    pub notes: Option<String>,

    /// Owning category, if any.
    pub category_id: Option<i64>,

    /// What was paid for the item, in cents.
    pub purchase_price_cents: Option<i64>,

    /// Current asking price, or the final price if sold, in cents.
    pub current_or_final_price_cents: Option<i64>,

    /// When the item was purchased.
    pub purchased_date: Option<DateTime<Utc>>,

    /// When the item was sold, if it has been.
    pub sold_date: Option<DateTime<Utc>>,

    /// Units on hand.
    pub quantity: i64,

    /// Whether the item participates in active-inventory reports.
    pub is_active: bool,

    /// Whether the item is currently on sale.
    pub is_on_sale: bool,

    /// Soft-delete flag. Deleted rows stay in the store.
    pub is_deleted: bool,

    /// When the row was created. Drives the listing date window.
    pub created_date: DateTime<Utc>,
}

impl Default for Item {
    fn default() -> Self {
        Item {
            id: 0,
            name: String::new(),
            description: None,
            notes: None,
            category_id: None,
            purchase_price_cents: None,
            current_or_final_price_cents: None,
            purchased_date: None,
            sold_date: None,
            quantity: 0,
            is_active: true,
            is_on_sale: false,
            is_deleted: false,
            created_date: Utc::now(),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A grouping of items, e.g. "Movies" or "Books".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// One-to-one display color for a category.
///
/// `name` is the human-readable color ("Blue"), `value` the render value
/// ("#0000FF").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CategoryColor {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub value: String,
}
