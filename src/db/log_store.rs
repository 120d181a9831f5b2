//! Append-only access to the `logs` table.

use crate::models::log::{controller_state::ControllerState, log_entry::LogEntry};
use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;

/// Handle shared by every request; cloning shares the underlying pool.
#[derive(Clone, Debug)]
pub struct LogStore {
    pool: SqlitePool,
}

impl LogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a sample stamped with the current instant and return its id.
    pub async fn insert(&self, state: &ControllerState) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO logs (timestamp, button1, button2, joystick_pressed, joystick_x, joystick_y) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(timestamp_now())
        .bind(state.button1)
        .bind(state.button2)
        .bind(state.joystick_pressed)
        .bind(state.joystick_x)
        .bind(state.joystick_y)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Every row, most recent first.
    pub async fn list(&self) -> Result<Vec<LogEntry>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, timestamp, button1, button2, joystick_pressed, joystick_x, joystick_y FROM logs ORDER BY timestamp DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
    }
}

/// Current UTC instant, e.g. `2025-01-31T12:34:56.789Z`.
///
/// Fixed width so that text ordering matches chronological ordering.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::run_migrations;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_store() -> LogStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("connect memory sqlite");
        run_migrations(&pool).await.expect("migrate");
        LogStore::new(pool)
    }

    fn sample(x: f64) -> ControllerState {
        ControllerState {
            button1: true,
            button2: false,
            joystick_pressed: true,
            joystick_x: x,
            joystick_y: -x,
        }
    }

    #[test]
    fn timestamp_is_iso8601_utc_millis() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), "2025-01-31T12:34:56.789Z".len());
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[tokio::test]
    async fn insert_returns_increasing_ids() {
        let store = memory_store().await;
        let first = store.insert(&sample(0.1)).await.expect("insert");
        let second = store.insert(&sample(0.2)).await.expect("insert");
        assert!(second > first);
    }

    #[tokio::test]
    async fn list_returns_stored_values_newest_first() {
        let store = memory_store().await;
        let ids = [
            store.insert(&sample(1.0)).await.expect("insert"),
            store.insert(&sample(2.0)).await.expect("insert"),
            store.insert(&sample(3.0)).await.expect("insert"),
        ];

        let rows = store.list().await.expect("list");
        let listed: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(listed, vec![ids[2], ids[1], ids[0]]);

        let newest = &rows[0];
        assert!(newest.button1);
        assert!(!newest.button2);
        assert!(newest.joystick_pressed);
        assert_eq!(newest.joystick_x, 3.0);
        assert_eq!(newest.joystick_y, -3.0);
        assert!(rows.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[tokio::test]
    async fn missing_table_surfaces_as_error() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("connect memory sqlite");
        let store = LogStore::new(pool);
        assert!(store.list().await.is_err());
        assert!(store.insert(&sample(0.0)).await.is_err());
    }
}
