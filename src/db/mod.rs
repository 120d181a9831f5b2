//! Database helpers: store initialization and path handling.

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

pub mod log_store;

pub use log_store::LogStore;

/// Failures while bringing the store up at startup.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open database: {0}")]
    Open(#[source] sqlx::Error),
    #[error("failed to create table 'logs': {0}")]
    Schema(#[source] sqlx::Error),
}

/// Open the database at `db_url` and make sure the `logs` table exists.
pub async fn init_storage(db_url: &str) -> Result<LogStore, StorageError> {
    let db_url = ensure_sqlite_path(db_url);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await
        .map_err(StorageError::Open)?;
    info!("connected to SQLite database at {db_url}");

    run_migrations(&pool).await.map_err(StorageError::Schema)?;
    info!("table 'logs' ready");
    Ok(LogStore::new(pool))
}

/// Store whose connections are only opened on first use.
///
/// Used when startup initialization failed but the service keeps serving;
/// each request then surfaces the storage error on its own.
pub fn lazy_storage(db_url: &str) -> Result<LogStore, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_lazy(db_url)?;
    Ok(LogStore::new(pool))
}

/// Create the `logs` table if absent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            button1 BOOLEAN NOT NULL,
            button2 BOOLEAN NOT NULL,
            joystick_pressed BOOLEAN NOT NULL,
            joystick_x REAL NOT NULL,
            joystick_y REAL NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure SQLite file and parent folder exist for a given sqlx URL.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    if !db_url.starts_with("sqlite:") {
        return db_url.to_string();
    }
    let path_part = db_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    if path_part.starts_with(":memory:") {
        return db_url.to_string();
    }
    let path_only = match path_part.split_once('?') {
        Some((p, _)) => p,
        None => path_part,
    };
    if !path_only.is_empty() {
        let p = Path::new(path_only);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!("could not create database directory {}: {e}", parent.display());
                }
            }
        }
        if let Err(e) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(p)
        {
            warn!("could not create database file {}: {e}", p.display());
        }
    }
    db_url.to_string()
}
