//! # Listing Repository
//!
//! Read-only listing and reporting projections.
//!
//! ## Two Listing Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              get_items_for_listing (database-side)                      │
//! │                                                                         │
//! │  bound [min, max] ──► items_for_listing view ──► DTO rows              │
//! │  (date filter runs in SQL; the view stands in for the stored           │
//! │   procedure of the SQL Server era)                                     │
//! │                                                                         │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │          get_items_for_listing_in_memory (client-side)                  │
//! │                                                                         │
//! │  load ALL items+category ──► materialize DTOs ──► pure filter/sort     │
//! │  (O(total items) per call regardless of window selectivity; kept       │
//! │   deliberately - see DESIGN.md - with the window logic as a pure       │
//! │   function in inventory-core)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither path validates that `min <= max`; an inverted window returns
//! nothing.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use inventory_core::mapping::filter_listing_window;
use inventory_core::{
    ItemForListingDto, ItemForListingWithDateDto, ItemTotalValueDto, ItemWithGenresDto,
};

/// Repository for read-only listing and reporting queries.
#[derive(Debug, Clone)]
pub struct ListingRepository {
    pool: SqlitePool,
}

impl ListingRepository {
    /// Creates a new ListingRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ListingRepository { pool }
    }

    /// Lists items created in `[min_date, max_date]`, filtered by the
    /// database.
    ///
    /// Queries the `items_for_listing` view with both dates bound as
    /// parameters and returns the mapped result set unfiltered further.
    pub async fn get_items_for_listing(
        &self,
        min_date: DateTime<Utc>,
        max_date: DateTime<Utc>,
    ) -> DbResult<Vec<ItemForListingDto>> {
        let rows = sqlx::query_as::<_, ItemForListingDto>(
            r#"
            SELECT id, name, description, category_name
            FROM items_for_listing
            WHERE created_date >= ?1
              AND created_date <= ?2
            "#,
        )
        .bind(min_date)
        .bind(max_date)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listing query returned rows");
        Ok(rows)
    }

    /// Lists items created in `[min_date, max_date]`, filtered in memory.
    ///
    /// Loads every item with its category, materializes the DTO rows, then
    /// applies the inclusive window and the category-then-name sort as a
    /// pure function. Unlike the view-backed path this one also surfaces
    /// soft-deleted rows, with `is_deleted` set on the DTO.
    pub async fn get_items_for_listing_in_memory(
        &self,
        min_date: DateTime<Utc>,
        max_date: DateTime<Utc>,
    ) -> DbResult<Vec<ItemForListingWithDateDto>> {
        let rows = sqlx::query_as::<_, ItemForListingWithDateDto>(
            r#"
            SELECT
                i.created_date,
                c.name AS category_name,
                i.description,
                i.is_active,
                i.is_deleted,
                i.name,
                i.notes
            FROM items i
                     LEFT JOIN categories c ON c.id = i.category_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(loaded = rows.len(), "Materialized listing rows for in-memory window");
        Ok(filter_listing_window(rows, min_date, max_date))
    }

    /// Per-item total value (`quantity × current_or_final_price`) for
    /// items matching the active flag.
    ///
    /// The `is_active` parameter IS honored. The query this replaces
    /// accepted the same flag but always bound `1`; that was judged a
    /// defect rather than intent, and the divergence is pinned by a
    /// regression test below and recorded in DESIGN.md.
    pub async fn get_items_total_value(
        &self,
        is_active: bool,
    ) -> DbResult<Vec<ItemTotalValueDto>> {
        let rows = sqlx::query_as::<_, ItemTotalValueDto>(
            r#"
            SELECT
                id,
                name,
                quantity,
                quantity * COALESCE(current_or_final_price_cents, 0) AS total_value_cents
            FROM items
            WHERE is_deleted = 0
              AND is_active = ?1
            "#,
        )
        .bind(is_active)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Passthrough read of the `items_with_genres` view. No added logic.
    pub async fn get_items_with_genres(&self) -> DbResult<Vec<ItemWithGenresDto>> {
        let rows = sqlx::query_as::<_, ItemWithGenresDto>(
            "SELECT id, name, genre FROM items_with_genres",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::TimeZone;
    use inventory_core::Item;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 12, 0, 0).unwrap()
    }

    async fn seed_item(
        db: &Database,
        name: &str,
        category_id: Option<i64>,
        created: DateTime<Utc>,
    ) -> i64 {
        let item = Item {
            name: name.to_string(),
            category_id,
            current_or_final_price_cents: Some(1000),
            quantity: 3,
            created_date: created,
            ..Item::default()
        };
        db.items().insert_or_update(&item).await.unwrap()
    }

    #[tokio::test]
    async fn database_side_listing_filters_by_window() {
        let db = test_db().await;
        let movies = db.categories().insert("Movies").await.unwrap();

        seed_item(&db, "Early", Some(movies), day(1)).await;
        seed_item(&db, "Middle", Some(movies), day(2)).await;
        seed_item(&db, "Late", Some(movies), day(3)).await;

        let rows = db.listing().get_items_for_listing(day(1), day(2)).await.unwrap();
        let mut names: Vec<String> = rows.into_iter().map(|r| r.name).collect();
        names.sort();
        assert_eq!(names, vec!["Early", "Middle"]);
    }

    #[tokio::test]
    async fn database_side_listing_excludes_deleted_rows() {
        let db = test_db().await;
        let id = seed_item(&db, "Gone", None, day(2)).await;
        db.items().delete(id).await.unwrap();

        let rows = db.listing().get_items_for_listing(day(1), day(3)).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn in_memory_listing_window_is_inclusive_and_sorted() {
        let db = test_db().await;
        let categories = db.categories();
        let movies = categories.insert("Movies").await.unwrap();
        let books = categories.insert("Books").await.unwrap();

        // d1 < d2 < d3; window [d1, d2] keeps exactly the first two.
        seed_item(&db, "Zodiac", Some(movies), day(1)).await;
        seed_item(&db, "Atlas", Some(books), day(2)).await;
        seed_item(&db, "Signal", Some(movies), day(3)).await;

        let rows = db
            .listing()
            .get_items_for_listing_in_memory(day(1), day(2))
            .await
            .unwrap();

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        // Sorted by category name ("Books" < "Movies"), then item name.
        assert_eq!(names, vec!["Atlas", "Zodiac"]);
        assert_eq!(rows[0].category_name.as_deref(), Some("Books"));
    }

    #[tokio::test]
    async fn total_value_honors_the_active_flag() {
        let db = test_db().await;

        let active = Item {
            name: "Active".to_string(),
            quantity: 2,
            current_or_final_price_cents: Some(500),
            ..Item::default()
        };
        let inactive = Item {
            name: "Retired".to_string(),
            quantity: 4,
            current_or_final_price_cents: Some(250),
            is_active: false,
            ..Item::default()
        };
        db.items().insert_or_update(&active).await.unwrap();
        db.items().insert_or_update(&inactive).await.unwrap();

        let active_rows = db.listing().get_items_total_value(true).await.unwrap();
        assert_eq!(active_rows.len(), 1);
        assert_eq!(active_rows[0].name, "Active");
        assert_eq!(active_rows[0].total_value_cents, 1000);

        // Regression probe: false must NOT be silently coerced to true.
        let inactive_rows = db.listing().get_items_total_value(false).await.unwrap();
        assert_eq!(inactive_rows.len(), 1);
        assert_eq!(inactive_rows[0].name, "Retired");
        assert_eq!(inactive_rows[0].total_value_cents, 1000);
    }

    #[tokio::test]
    async fn total_value_treats_missing_price_as_zero() {
        let db = test_db().await;

        let unpriced = Item {
            name: "Unpriced".to_string(),
            quantity: 5,
            ..Item::default()
        };
        db.items().insert_or_update(&unpriced).await.unwrap();

        let rows = db.listing().get_items_total_value(true).await.unwrap();
        assert_eq!(rows[0].total_value_cents, 0);
    }

    #[tokio::test]
    async fn items_with_genres_is_a_passthrough_of_the_view() {
        let db = test_db().await;
        let id = seed_item(&db, "Solaris", None, day(1)).await;
        seed_item(&db, "Untagged", None, day(1)).await;

        let genre_id: i64 =
            sqlx::query_scalar("INSERT INTO genres (name) VALUES (?1) RETURNING id")
                .bind("Sci-Fi")
                .fetch_one(db.pool())
                .await
                .unwrap();
        sqlx::query("INSERT INTO item_genres (item_id, genre_id) VALUES (?1, ?2)")
            .bind(id)
            .bind(genre_id)
            .execute(db.pool())
            .await
            .unwrap();

        let mut rows = db.listing().get_items_with_genres().await.unwrap();
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Solaris");
        assert_eq!(rows[0].genre.as_deref(), Some("Sci-Fi"));
        assert_eq!(rows[1].name, "Untagged");
        assert_eq!(rows[1].genre, None);
    }
}
