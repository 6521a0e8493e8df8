//! # Cachet Server
//!
//! Loads configuration, verifies the Redis connection, and serves the
//! record endpoints. Exits with status 1 if startup fails.

use cachet_config::ConfigLoader;
use cachet_core::{init_logging, CachetError, LogFormat};
use cachet_server::{startup::print_banner, AppBuilder};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.into_config(),
        Err(e) => {
            let _ = init_logging("info", LogFormat::Pretty);
            fail(&e);
        }
    };

    let format = config
        .observability
        .log_format
        .parse::<LogFormat>()
        .unwrap_or_default();
    if let Err(e) = init_logging(&config.observability.log_level, format) {
        eprintln!("{}", e);
    }

    print_banner();
    info!("Starting Cachet Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = AppBuilder::new().with_config(config).run().await {
        fail(&e);
    }
}

fn fail(e: &CachetError) -> ! {
    error!(code = e.error_code(), fatal = e.is_fatal(), "Application error: {}", e);
    std::process::exit(1);
}
