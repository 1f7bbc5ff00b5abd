//! # inventory-core: Pure Domain Model for the Inventory Tracker
//!
//! This crate contains the domain types and the small amount of real logic
//! the inventory data layer carries, as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Inventory Tracker Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Application layer (HTTP/CLI, out of scope)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ inventory-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │    dto    │  │  mapping  │  │ validation│  │   │
//! │  │   │   Item    │  │ listing / │  │ category  │  │   rules   │  │   │
//! │  │   │ Category  │  │ value DTOs│  │ + listing │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 inventory-db (Database Layer)                   │   │
//! │  │           SQLite queries, migrations, repositories              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Item, Category, CategoryColor)
//! - [`dto`] - Read-only projections recomputed on every query
//! - [`mapping`] - Explicit entity-to-DTO mapping and the in-memory
//!   listing window (no reflection-based mapper configuration)
//! - [`validation`] - Input validation for the upsert path
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: Prices are integer cents (i64), never floats
//! 4. **Explicit Errors**: Typed errors, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dto;
pub mod error;
pub mod mapping;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

pub use dto::{
    CategoryDto, ItemForListingDto, ItemForListingWithDateDto, ItemTotalValueDto,
    ItemWithGenresDto,
};
pub use error::ValidationError;
pub use types::{Category, CategoryColor, Item};
