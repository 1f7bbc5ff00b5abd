//! # Seed Data Generator
//!
//! Populates the database with development data for the inventory tracker.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p inventory-db --bin seed
//!
//! # Specify database path
//! cargo run -p inventory-db --bin seed -- --db ./data/inventory.db
//! ```
//!
//! ## Generated Data
//! - Three categories with display colors (Movies, Books, Games)
//! - A handful of genres, assigned round-robin
//! - A batch of items per category with staggered creation dates,
//!   inserted through the batch upsert path so the seed exercises the
//!   same transaction machinery the application uses

use std::env;

use chrono::{Duration, Utc};
use inventory_core::Item;
use inventory_db::{Database, DbConfig, IsolationLevel};

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("Movies", "Blue", "#0000FF"),
    ("Books", "Green", "#00FF00"),
    ("Games", "Red", "#FF0000"),
];

const GENRES: &[&str] = &["Sci-Fi", "Fantasy", "Horror", "Comedy", "Drama"];

const ITEMS_PER_CATEGORY: &[(&str, &[&str])] = &[
    (
        "Movies",
        &[
            "Blade Runner",
            "The Thing",
            "Alien",
            "Arrival",
            "Stalker",
            "Brazil",
            "Moon",
            "Primer",
        ],
    ),
    (
        "Books",
        &[
            "Dune",
            "Hyperion",
            "Neuromancer",
            "Solaris",
            "Roadside Picnic",
            "The Dispossessed",
            "Blindsight",
            "Anathem",
        ],
    ),
    (
        "Games",
        &[
            "Outer Wilds",
            "Disco Elysium",
            "Hades",
            "Factorio",
            "Hollow Knight",
            "Subnautica",
            "Rimworld",
            "Noita",
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let db_path = parse_db_path().unwrap_or_else(|| "./data/inventory.db".to_string());
    tracing::info!(path = %db_path, "Seeding database");

    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = Database::new(DbConfig::new(&db_path)).await?;

    // Categories and colors
    let categories = db.categories();
    let mut category_ids = Vec::new();
    for (name, color_name, color_value) in CATEGORIES {
        let id = categories.insert(name).await?;
        categories.set_color(id, color_name, color_value).await?;
        category_ids.push((*name, id));
    }
    tracing::info!(count = category_ids.len(), "Seeded categories");

    // Genres (no repository surface; seeded through the pool)
    let mut genre_ids = Vec::new();
    for name in GENRES {
        let id: i64 = sqlx::query_scalar("INSERT INTO genres (name) VALUES (?1) RETURNING id")
            .bind(name)
            .fetch_one(db.pool())
            .await?;
        genre_ids.push(id);
    }

    // Items, one batch per category through the transactional path
    let now = Utc::now();
    let mut total = 0usize;
    for (category_name, names) in ITEMS_PER_CATEGORY {
        let category_id = category_ids
            .iter()
            .find(|(name, _)| name == category_name)
            .map(|(_, id)| *id);

        let items: Vec<Item> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| Item {
                name: name.to_string(),
                description: Some(format!("{name} ({category_name})")),
                category_id,
                purchase_price_cents: Some(499 + idx as i64 * 150),
                current_or_final_price_cents: Some(999 + idx as i64 * 200),
                quantity: (idx as i64 % 5) + 1,
                is_on_sale: idx % 3 == 0,
                created_date: now - Duration::days(idx as i64 * 7),
                ..Item::default()
            })
            .collect();

        db.items()
            .insert_or_update_many(&items, IsolationLevel::ReadUncommitted)
            .await?;
        total += items.len();
    }
    tracing::info!(count = total, "Seeded items");

    // Tag items with genres round-robin
    let item_ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM items ORDER BY id")
        .fetch_all(db.pool())
        .await?;
    for (idx, item_id) in item_ids.iter().enumerate() {
        let genre_id = genre_ids[idx % genre_ids.len()];
        sqlx::query("INSERT INTO item_genres (item_id, genre_id) VALUES (?1, ?2)")
            .bind(item_id)
            .bind(genre_id)
            .execute(db.pool())
            .await?;
    }
    tracing::info!("Tagged items with genres");

    db.close().await;
    Ok(())
}

/// Parses `--db <path>` from the command line.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
