//! Application setup and runtime.

use crate::{
  db::{self, LogStore},
  http,
  util::{NO_LAN_ADDRESS, first_lan_ipv4},
};
use std::net::{Ipv4Addr, SocketAddr};
use tracing::{error, info};

pub const DEFAULT_DATABASE: &str = "sqlite://controller_logs.db";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub store: LogStore,
}

/// Runtime settings, overridable through `JOYLOG_*` variables.
#[derive(Debug, Clone)]
pub struct Config {
  pub database_url: String,
  pub addr: SocketAddr,
  /// Exit instead of serving when the store cannot be initialized.
  pub strict_startup: bool,
}

impl Config {
  pub fn from_env() -> Result<Self, std::net::AddrParseError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  fn from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
  ) -> Result<Self, std::net::AddrParseError> {
    let database_url = lookup("JOYLOG_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());
    let addr = lookup("JOYLOG_ADDR")
      .unwrap_or_else(|| DEFAULT_ADDR.to_string())
      .parse()?;
    let strict_startup = lookup("JOYLOG_STRICT_STARTUP")
      .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
      .unwrap_or(false);
    Ok(Self {
      database_url,
      addr,
      strict_startup,
    })
  }
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();
  let config = Config::from_env()?;

  let store = open_store(&config).await?;
  let app = http::build_router(AppState { store });

  let listener = tokio::net::TcpListener::bind(config.addr).await?;
  log_banner(listener.local_addr()?.port());
  axum::serve(listener, app).await?;
  Ok(())
}

/// Initialize storage, falling back to a lazily connecting store unless
/// startup is strict.
pub async fn open_store(
  config: &Config,
) -> Result<LogStore, Box<dyn std::error::Error + Send + Sync>> {
  match db::init_storage(&config.database_url).await {
    Ok(store) => Ok(store),
    Err(e) if config.strict_startup => Err(e.into()),
    Err(e) => {
      error!("{e}; continuing, requests will fail until the database is usable");
      Ok(db::lazy_storage(&config.database_url)?)
    }
  }
}

fn log_banner(port: u16) {
  let (local, lan) = banner_urls(port, first_lan_ipv4());
  info!("server running at:");
  info!("- {local}");
  info!("- {lan}");
}

/// Loopback and LAN URLs shown at startup.
fn banner_urls(port: u16, lan: Option<Ipv4Addr>) -> (String, String) {
  let lan = lan
    .map(|ip| ip.to_string())
    .unwrap_or_else(|| NO_LAN_ADDRESS.to_string());
  (
    format!("http://localhost:{port}"),
    format!("http://{lan}:{port}"),
  )
}
