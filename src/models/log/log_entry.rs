//! Log entry stored in SQLite and exposed via API.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct LogEntry {
    pub id: i64,
    /// ISO-8601 UTC instant assigned by the server on insert.
    pub timestamp: String,
    pub button1: bool,
    pub button2: bool,
    pub joystick_pressed: bool,
    pub joystick_x: f64,
    pub joystick_y: f64,
}
