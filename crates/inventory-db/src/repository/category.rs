//! # Category Repository
//!
//! Database operations for categories and their display colors.
//!
//! Categories change rarely; the read path here is the eager
//! category-plus-color projection the application layer binds dropdowns
//! and legends to, and the write helpers exist for seeding and tests.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use inventory_core::mapping::category_to_dto;
use inventory_core::{Category, CategoryColor, CategoryDto};

/// Joined row shape for the category + color query.
#[derive(Debug, sqlx::FromRow)]
struct CategoryColorRow {
    id: i64,
    name: String,
    color_id: Option<i64>,
    color_name: Option<String>,
    color_value: Option<String>,
}

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Lists every category together with its display color.
    ///
    /// Eager join, full set, no paging; the projection goes through the
    /// explicit mapping function in inventory-core. Categories without a
    /// color row come back with `None` color fields.
    pub async fn list_categories_and_colors(&self) -> DbResult<Vec<CategoryDto>> {
        let rows = sqlx::query_as::<_, CategoryColorRow>(
            r#"
            SELECT
                c.id,
                c.name,
                cc.id    AS color_id,
                cc.name  AS color_name,
                cc.value AS color_value
            FROM categories c
                     LEFT JOIN category_colors cc ON cc.category_id = c.id
            WHERE c.is_deleted = 0
            ORDER BY c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded categories with colors");

        let dtos = rows
            .into_iter()
            .map(|row| {
                let category = Category {
                    id: row.id,
                    name: row.name,
                };
                let color = match (row.color_id, row.color_name, row.color_value) {
                    (Some(id), Some(name), Some(value)) => Some(CategoryColor {
                        id,
                        category_id: category.id,
                        name,
                        value,
                    }),
                    _ => None,
                };
                category_to_dto(&category, color.as_ref())
            })
            .collect();

        Ok(dtos)
    }

    /// Inserts a category and returns its generated id.
    pub async fn insert(&self, name: &str) -> DbResult<i64> {
        debug!(name, "Inserting category");

        let id: i64 = sqlx::query_scalar("INSERT INTO categories (name) VALUES (?1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    /// Sets (or replaces) the one-to-one color of a category.
    ///
    /// ## Errors
    /// * `DbError::ForeignKeyViolation` - category does not exist
    pub async fn set_color(&self, category_id: i64, name: &str, value: &str) -> DbResult<()> {
        debug!(category_id, name, "Setting category color");

        sqlx::query(
            r#"
            INSERT INTO category_colors (category_id, name, value)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (category_id) DO UPDATE SET name = excluded.name, value = excluded.value
            "#,
        )
        .bind(category_id)
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a category by id, requiring presence.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name FROM categories WHERE id = ?1 AND is_deleted = 0",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        category.ok_or_else(|| DbError::not_found("Category", id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn categories_list_with_and_without_colors() {
        let db = test_db().await;
        let repo = db.categories();

        let movies = repo.insert("Movies").await.unwrap();
        repo.set_color(movies, "Blue", "#0000FF").await.unwrap();
        repo.insert("Books").await.unwrap();

        let dtos = repo.list_categories_and_colors().await.unwrap();
        assert_eq!(dtos.len(), 2);

        // Sorted by name: Books first.
        assert_eq!(dtos[0].category, "Books");
        assert_eq!(dtos[0].color_name, None);

        assert_eq!(dtos[1].category, "Movies");
        assert_eq!(dtos[1].color_name.as_deref(), Some("Blue"));
        assert_eq!(dtos[1].color_value.as_deref(), Some("#0000FF"));
    }

    #[tokio::test]
    async fn set_color_replaces_existing_color() {
        let db = test_db().await;
        let repo = db.categories();

        let id = repo.insert("Games").await.unwrap();
        repo.set_color(id, "Red", "#FF0000").await.unwrap();
        repo.set_color(id, "Green", "#00FF00").await.unwrap();

        let dtos = repo.list_categories_and_colors().await.unwrap();
        assert_eq!(dtos.len(), 1);
        assert_eq!(dtos[0].color_name.as_deref(), Some("Green"));
    }

    #[tokio::test]
    async fn missing_category_is_not_found() {
        let db = test_db().await;
        let repo = db.categories();

        let err = repo.get_by_id(404).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn color_for_missing_category_violates_foreign_key() {
        let db = test_db().await;
        let repo = db.categories();

        let err = repo.set_color(404, "Mauve", "#E0B0FF").await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }), "got {err:?}");
    }
}
