//! # Mapping & Projection Logic
//!
//! Explicit, pure mapping functions from entities to DTO shapes. The
//! original system configured a reflection-based object mapper for the
//! Category projection; here it is a plain function, and the client-side
//! listing window (filter by date range, then sort) is a pure function
//! the database layer calls after materializing rows.

use chrono::{DateTime, Utc};

use crate::dto::{CategoryDto, ItemForListingWithDateDto};
use crate::types::{Category, CategoryColor};

/// Projects a category and its optional color onto the flat DTO.
///
/// Replaces the declarative Category → DTO mapper configuration; this is
/// the only entity-to-DTO path that needed one.
pub fn category_to_dto(category: &Category, color: Option<&CategoryColor>) -> CategoryDto {
    CategoryDto {
        id: category.id,
        category: category.name.clone(),
        color_name: color.map(|c| c.name.clone()),
        color_value: color.map(|c| c.value.clone()),
    }
}

/// Applies the client-side listing window to already-materialized rows.
///
/// Keeps rows whose creation date falls in `[min_date, max_date]`
/// INCLUSIVE on both ends, then sorts by category name and item name.
/// There is deliberately no check that `min_date <= max_date`; an inverted
/// window simply yields nothing.
///
/// The caller has already paid for loading every row, so this is
/// O(total items) regardless of window selectivity. That matches the
/// system this layer replaces; the database-side listing query is the
/// efficient alternative.
pub fn filter_listing_window(
    mut rows: Vec<ItemForListingWithDateDto>,
    min_date: DateTime<Utc>,
    max_date: DateTime<Utc>,
) -> Vec<ItemForListingWithDateDto> {
    rows.retain(|row| row.created_date >= min_date && row.created_date <= max_date);
    rows.sort_by(|a, b| {
        (a.category_name.as_deref(), a.name.as_str())
            .cmp(&(b.category_name.as_deref(), b.name.as_str()))
    });
    rows
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn listing_row(name: &str, category: &str, created: DateTime<Utc>) -> ItemForListingWithDateDto {
        ItemForListingWithDateDto {
            created_date: created,
            category_name: Some(category.to_string()),
            description: None,
            is_active: true,
            is_deleted: false,
            name: name.to_string(),
            notes: None,
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn category_projection_carries_color() {
        let category = Category {
            id: 3,
            name: "Movies".to_string(),
        };
        let color = CategoryColor {
            id: 1,
            category_id: 3,
            name: "Blue".to_string(),
            value: "#0000FF".to_string(),
        };

        let dto = category_to_dto(&category, Some(&color));
        assert_eq!(dto.id, 3);
        assert_eq!(dto.category, "Movies");
        assert_eq!(dto.color_name.as_deref(), Some("Blue"));
        assert_eq!(dto.color_value.as_deref(), Some("#0000FF"));

        let bare = category_to_dto(&category, None);
        assert_eq!(bare.color_name, None);
        assert_eq!(bare.color_value, None);
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let rows = vec![
            listing_row("First", "Books", day(1)),
            listing_row("Second", "Books", day(2)),
            listing_row("Third", "Books", day(3)),
        ];

        let kept = filter_listing_window(rows, day(1), day(2));
        let names: Vec<&str> = kept.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn rows_sort_by_category_then_name() {
        let rows = vec![
            listing_row("Zulu", "Movies", day(2)),
            listing_row("Alpha", "Movies", day(2)),
            listing_row("Mid", "Books", day(2)),
        ];

        let kept = filter_listing_window(rows, day(1), day(3));
        let names: Vec<&str> = kept.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Mid", "Alpha", "Zulu"]);
    }

    #[test]
    fn inverted_window_yields_nothing() {
        let rows = vec![listing_row("Only", "Books", day(2))];
        assert!(filter_listing_window(rows, day(3), day(1)).is_empty());
    }

    #[test]
    fn uncategorized_rows_sort_first() {
        let mut bare = listing_row("Loose", "x", day(2));
        bare.category_name = None;
        let rows = vec![listing_row("Bound", "Books", day(2)), bare];

        let kept = filter_listing_window(rows, day(1), day(3));
        assert_eq!(kept[0].name, "Loose");
        assert_eq!(kept[1].name, "Bound");
    }
}
