//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   ______           __         __
  / ____/___ ______/ /_  ___  / /_
 / /   / __ `/ ___/ __ \/ _ \/ __/
/ /___/ /_/ / /__/ / / /  __/ /_
\____/\__,_/\___/_/ /_/\___/\__/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str, database: i64) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("HTTP API:  http://{}/api/v1/records/{{id}}", addr);
    info!("Health:    http://{}/health", addr);
    info!("Redis DB:  {}", database);
    info!("{}", separator);
}

