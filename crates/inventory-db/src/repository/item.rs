//! # Item Repository
//!
//! Database operations for inventory items.
//!
//! ## Upsert Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    insert_or_update(item)                               │
//! │                                                                         │
//! │  item.id > 0 ?                                                         │
//! │       │                                                                 │
//! │       ├── yes ──► UPDATE every mutable field WHERE id = ?              │
//! │       │           0 rows affected → NotFound (never a silent no-op)    │
//! │       │                                                                 │
//! │       └── no ───► INSERT ... RETURNING id                              │
//! │                   (the database hands back the generated id; no        │
//! │                    post-insert lookup by name is needed)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Batches
//! `insert_or_update_many` and `delete_many` loop the single-row operation
//! inside one [`UnitOfWork`]. The first failure logs, rolls back the whole
//! batch and rethrows; there is no partial success and no retry.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, error};

use crate::error::{DbError, DbResult};
use crate::transaction::{IsolationLevel, UnitOfWork};
use inventory_core::validation::validate_item;
use inventory_core::Item;

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// let id = repo.insert_or_update(&item).await?;
/// let inventory = repo.list_inventory().await?;
/// repo.delete(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Gets an item by its ID.
    ///
    /// Soft-deleted items ARE returned: direct lookup by id is the one
    /// read that still sees them.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT
                id,
                name,
                description,
                notes,
                category_id,
                purchase_price_cents,
                current_or_final_price_cents,
                purchased_date,
                sold_date,
                quantity,
                is_active,
                is_on_sale,
                is_deleted,
                created_date
            FROM items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Lists the current inventory: every non-deleted item, sorted by name.
    ///
    /// The only query on this layer that returns entities rather than a
    /// read projection.
    pub async fn list_inventory(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT
                id,
                name,
                description,
                notes,
                category_id,
                purchase_price_cents,
                current_or_final_price_cents,
                purchased_date,
                sold_date,
                quantity,
                is_active,
                is_on_sale,
                is_deleted,
                created_date
            FROM items
            WHERE is_deleted = 0
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Inserts or updates a single item, dispatching on `id > 0`.
    ///
    /// ## Returns
    /// The item's id: the generated one on insert, the unchanged one on
    /// update.
    ///
    /// ## Errors
    /// * `DbError::Validation` - name empty/too long, negative quantity
    /// * `DbError::NotFound` - positive id matching no row
    pub async fn insert_or_update(&self, item: &Item) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        insert_or_update_on(&mut conn, item).await
    }

    /// Inserts or updates a batch of items inside one transaction.
    ///
    /// All-or-nothing: the first failing item aborts the batch. The error
    /// is logged and rethrown as [`DbError::BatchFailed`] carrying the
    /// offending item's name; nothing from the batch is persisted.
    pub async fn insert_or_update_many(
        &self,
        items: &[Item],
        isolation: IsolationLevel,
    ) -> DbResult<()> {
        let mut uow = UnitOfWork::begin(&self.pool, isolation).await?;

        for item in items {
            if let Err(err) = insert_or_update_on(uow.conn(), item).await {
                error!(item = %item.name, error = %err, "Batch upsert failed, rolling back");
                if let Err(rollback_err) = uow.rollback().await {
                    error!(error = %rollback_err, "Rollback after batch failure also failed");
                }
                return Err(DbError::batch_failed(&item.name, err));
            }
        }

        uow.commit().await
    }

    /// Soft-deletes an item.
    ///
    /// A no-op if the id matches no row; deleting is the one mutation
    /// that tolerates absence.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let mut conn = self.pool.acquire().await?;
        delete_on(&mut conn, id).await
    }

    /// Soft-deletes a batch of items inside one transaction.
    ///
    /// Same transaction pattern as [`insert_or_update_many`](Self::insert_or_update_many);
    /// storage errors are logged and rethrown unwrapped (a delete has no
    /// item name to tag them with).
    pub async fn delete_many(&self, ids: &[i64], isolation: IsolationLevel) -> DbResult<()> {
        let mut uow = UnitOfWork::begin(&self.pool, isolation).await?;

        for &id in ids {
            if let Err(err) = delete_on(uow.conn(), id).await {
                error!(id, error = %err, "Batch delete failed, rolling back");
                if let Err(rollback_err) = uow.rollback().await {
                    error!(error = %rollback_err, "Rollback after batch failure also failed");
                }
                return Err(err);
            }
        }

        uow.commit().await
    }

    /// Counts non-deleted items (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE is_deleted = 0")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Single-row operations
// =============================================================================
//
// Free functions over a plain connection so the pool path and the batch
// (transaction) path share one implementation.

async fn insert_or_update_on(conn: &mut SqliteConnection, item: &Item) -> DbResult<i64> {
    validate_item(item)?;

    if item.id > 0 {
        update_on(conn, item).await
    } else {
        insert_on(conn, item).await
    }
}

/// Inserts a new item and returns the generated id.
///
/// SQLite hands the id back through `RETURNING`, so there is no
/// re-query-and-scan-by-name step and no reliance on name uniqueness.
async fn insert_on(conn: &mut SqliteConnection, item: &Item) -> DbResult<i64> {
    debug!(name = %item.name, "Inserting item");

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO items (
            name, description, notes, category_id,
            purchase_price_cents, current_or_final_price_cents,
            purchased_date, sold_date, quantity,
            is_active, is_on_sale, is_deleted, created_date
        ) VALUES (
            ?1, ?2, ?3, ?4,
            ?5, ?6,
            ?7, ?8, ?9,
            ?10, ?11, ?12, ?13
        )
        RETURNING id
        "#,
    )
    .bind(&item.name)
    .bind(&item.description)
    .bind(&item.notes)
    .bind(item.category_id)
    .bind(item.purchase_price_cents)
    .bind(item.current_or_final_price_cents)
    .bind(item.purchased_date)
    .bind(item.sold_date)
    .bind(item.quantity)
    .bind(item.is_active)
    .bind(item.is_on_sale)
    .bind(item.is_deleted)
    .bind(item.created_date)
    .fetch_one(conn)
    .await?;

    Ok(id)
}

/// Overwrites every mutable field of an existing item.
///
/// Full-field overwrite, no partial patch. Zero rows affected means the
/// positive id matched nothing, which is a `NotFound` error rather than a
/// silent no-op.
async fn update_on(conn: &mut SqliteConnection, item: &Item) -> DbResult<i64> {
    debug!(id = item.id, "Updating item");

    let result = sqlx::query(
        r#"
        UPDATE items SET
            name = ?2,
            description = ?3,
            notes = ?4,
            category_id = ?5,
            purchase_price_cents = ?6,
            current_or_final_price_cents = ?7,
            purchased_date = ?8,
            sold_date = ?9,
            quantity = ?10,
            is_active = ?11,
            is_on_sale = ?12,
            is_deleted = ?13
        WHERE id = ?1
        "#,
    )
    .bind(item.id)
    .bind(&item.name)
    .bind(&item.description)
    .bind(&item.notes)
    .bind(item.category_id)
    .bind(item.purchase_price_cents)
    .bind(item.current_or_final_price_cents)
    .bind(item.purchased_date)
    .bind(item.sold_date)
    .bind(item.quantity)
    .bind(item.is_active)
    .bind(item.is_on_sale)
    .bind(item.is_deleted)
    .execute(conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::not_found("Item", item.id));
    }

    Ok(item.id)
}

/// Sets the deleted flag. Absent ids are tolerated.
async fn delete_on(conn: &mut SqliteConnection, id: i64) -> DbResult<()> {
    debug!(id, "Soft-deleting item");

    sqlx::query("UPDATE items SET is_deleted = 1 WHERE id = ?1")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::{TimeZone, Utc};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn item(name: &str) -> Item {
        Item {
            name: name.to_string(),
            description: Some(format!("{name} description")),
            notes: Some("shelf 3".to_string()),
            purchase_price_cents: Some(1250),
            current_or_final_price_cents: Some(1999),
            purchased_date: Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()),
            quantity: 2,
            ..Item::default()
        }
    }

    #[tokio::test]
    async fn upsert_new_item_assigns_id_and_round_trips() {
        let db = test_db().await;
        let repo = db.items();

        let submitted = item("Blade Runner");
        let id = repo.insert_or_update(&submitted).await.unwrap();
        assert!(id > 0);

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name, submitted.name);
        assert_eq!(stored.description, submitted.description);
        assert_eq!(stored.notes, submitted.notes);
        assert_eq!(stored.purchase_price_cents, submitted.purchase_price_cents);
        assert_eq!(
            stored.current_or_final_price_cents,
            submitted.current_or_final_price_cents
        );
        assert_eq!(stored.purchased_date, submitted.purchased_date);
        assert_eq!(stored.quantity, submitted.quantity);
        assert!(stored.is_active);
        assert!(!stored.is_on_sale);
        assert!(!stored.is_deleted);
    }

    #[tokio::test]
    async fn upsert_existing_item_overwrites_all_fields() {
        let db = test_db().await;
        let repo = db.items();

        let id = repo.insert_or_update(&item("Original")).await.unwrap();

        let mut changed = item("Renamed");
        changed.id = id;
        changed.notes = None;
        changed.quantity = 7;
        changed.is_on_sale = true;
        changed.sold_date = Some(Utc.with_ymd_and_hms(2026, 2, 2, 0, 0, 0).unwrap());

        let returned = repo.insert_or_update(&changed).await.unwrap();
        assert_eq!(returned, id);

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Renamed");
        assert_eq!(stored.notes, None);
        assert_eq!(stored.quantity, 7);
        assert!(stored.is_on_sale);
        assert_eq!(stored.sold_date, changed.sold_date);
    }

    #[tokio::test]
    async fn upsert_missing_positive_id_is_not_found() {
        let db = test_db().await;
        let repo = db.items();

        let mut ghost = item("Ghost");
        ghost.id = 9999;

        let err = repo.insert_or_update(&ghost).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn upsert_rejects_empty_name() {
        let db = test_db().await;
        let repo = db.items();

        let mut nameless = item("x");
        nameless.name = "   ".to_string();

        let err = repo.insert_or_update(&nameless).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn batch_upsert_commits_all_items() {
        let db = test_db().await;
        let repo = db.items();

        let items = vec![item("One"), item("Two"), item("Three")];
        repo.insert_or_update_many(&items, IsolationLevel::ReadUncommitted)
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn batch_upsert_failure_names_item_and_rolls_back() {
        let db = test_db().await;
        let repo = db.items();

        let mut bad = item("Ghost");
        bad.id = 9999; // update target that doesn't exist

        let items = vec![item("Good One"), bad, item("Never Reached")];
        let err = repo
            .insert_or_update_many(&items, IsolationLevel::ReadUncommitted)
            .await
            .unwrap_err();

        match err {
            DbError::BatchFailed { name, source } => {
                assert_eq!(name, "Ghost");
                assert!(matches!(*source, DbError::NotFound { .. }));
            }
            other => panic!("expected BatchFailed, got {other:?}"),
        }

        // All-or-nothing: the item before the failure is rolled back too.
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_missing_item_is_a_noop() {
        let db = test_db().await;
        let repo = db.items();

        repo.delete(12345).await.unwrap();
    }

    #[tokio::test]
    async fn deleted_item_leaves_inventory_but_stays_retrievable() {
        let db = test_db().await;
        let repo = db.items();

        let id = repo.insert_or_update(&item("Doomed")).await.unwrap();
        repo.delete(id).await.unwrap();

        let inventory = repo.list_inventory().await.unwrap();
        assert!(inventory.iter().all(|i| i.id != id));

        let direct = repo.get_by_id(id).await.unwrap().unwrap();
        assert!(direct.is_deleted);
        assert_eq!(direct.name, "Doomed");
    }

    #[tokio::test]
    async fn batch_delete_flags_every_id() {
        let db = test_db().await;
        let repo = db.items();

        let a = repo.insert_or_update(&item("A")).await.unwrap();
        let b = repo.insert_or_update(&item("B")).await.unwrap();
        let keep = repo.insert_or_update(&item("Keeper")).await.unwrap();

        repo.delete_many(&[a, b, 777], IsolationLevel::ReadUncommitted)
            .await
            .unwrap();

        let inventory = repo.list_inventory().await.unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory[0].id, keep);
    }

    #[tokio::test]
    async fn inventory_is_sorted_by_name() {
        let db = test_db().await;
        let repo = db.items();

        for name in ["Zephyr", "Anchor", "Mango"] {
            repo.insert_or_update(&item(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_inventory()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Anchor", "Mango", "Zephyr"]);
    }
}
