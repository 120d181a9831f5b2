//! joylog library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and handlers
//! - `db`: table setup and the log store
//! - `models`: typed records used across layers
//! - `util`: tracing, query coercion and network helpers

pub mod app;
pub mod db;
pub mod http;
pub mod models;
pub mod util;
