//! JSON bodies returned by the HTTP layer.

use crate::models::log::log_entry::LogEntry;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LogList {
    pub message: &'static str,
    pub data: Vec<LogEntry>,
}

#[derive(Debug, Serialize)]
pub struct SavedLog {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
