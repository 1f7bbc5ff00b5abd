//! # inventory-db: Database Layer for the Inventory Tracker
//!
//! This crate provides database access for the inventory tracker. It uses
//! SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Tracker Data Flow                         │
//! │                                                                         │
//! │  Application layer (out of scope)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  inventory-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌────────────────┐   ┌──────────────┐   │   │
//! │  │   │   Database    │   │  Repositories  │   │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │   │ (item.rs, ...) │   │  (embedded)  │   │   │
//! │  │   │               │   │                │   │              │   │   │
//! │  │   │ SqlitePool    │◄──│ ItemRepository │   │ 001_schema   │   │   │
//! │  │   │ Connection    │   │ CategoryRepo   │   │ 002_views    │   │   │
//! │  │   │ Management    │   │ ListingRepo    │   │              │   │   │
//! │  │   └───────────────┘   └────────────────┘   └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────────────────────────────────────────┐   │   │
//! │  │   │  UnitOfWork (transaction.rs)                           │   │   │
//! │  │   │  one transaction around each batch, isolation by enum  │   │   │
//! │  │   └────────────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (or :memory: in tests)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`transaction`] - Unit-of-work and isolation levels for batches
//! - [`repository`] - Repository implementations (item, category, listing)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inventory_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/inventory.db")).await?;
//!
//! let inventory = db.items().list_inventory().await?;
//! let categories = db.categories().list_categories_and_colors().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod transaction;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use transaction::{IsolationLevel, UnitOfWork};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::item::ItemRepository;
pub use repository::listing::ListingRepository;
