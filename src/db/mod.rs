//! Database module for SQLite persistence.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Without AUTOINCREMENT, SQLite hands out max(rowid) + 1
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS villas (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            name_key TEXT NOT NULL,
            details TEXT,
            rate REAL NOT NULL DEFAULT 0,
            occupancy INTEGER NOT NULL DEFAULT 0,
            sqft INTEGER NOT NULL DEFAULT 0,
            image_url TEXT,
            amenity TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // name_key holds the Unicode-lowercased name; NOCASE only folds ASCII
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_villas_name_key ON villas(name_key);")
        .execute(pool)
        .await?;

    Ok(())
}
