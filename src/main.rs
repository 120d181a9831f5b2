#[tokio::main]
async fn main() {
  // Minimal CLI: support --version/-V
  let mut args = std::env::args().skip(1);
  if let Some(arg) = args.next() {
    if arg == "--version" || arg == "-V" {
      println!("joylog {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    if arg == "--help" || arg == "-h" {
      eprintln!("Usage: joylog [--version]");
      eprintln!();
      eprintln!("Environment:");
      eprintln!("  JOYLOG_DATABASE        sqlx SQLite URL (default sqlite://controller_logs.db)");
      eprintln!("  JOYLOG_ADDR            listen address (default 0.0.0.0:3000)");
      eprintln!("  JOYLOG_STRICT_STARTUP  exit if the database cannot be initialized");
      return;
    }
  }

  if let Err(e) = joylog::app::run().await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
