//! # Repository Module
//!
//! Database repository implementations for the inventory tracker.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Application layer                                                     │
//! │       │                                                                 │
//! │       │  db.items().insert_or_update(&item)                            │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── list_inventory(&self)                                             │
//! │  ├── insert_or_update(&self, item)                                     │
//! │  ├── insert_or_update_many(&self, items, isolation)                    │
//! │  └── delete(&self, id) / delete_many(&self, ids, isolation)            │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • Batch transaction handling lives next to the single-row ops         │
//! │  • Easy to test against an in-memory database                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`item::ItemRepository`] - Item CRUD, upserts, soft deletes, batches
//! - [`category::CategoryRepository`] - Categories and their colors
//! - [`listing::ListingRepository`] - Read-only listing / value / genre
//!   projections

pub mod category;
pub mod item;
pub mod listing;
