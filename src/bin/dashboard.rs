//! Short Volume Dashboard
//!
//! Fetches the default symbol and the latest most-shorted ranking from FINRA,
//! then serves the dashboard until Ctrl-C.

use dotenvy::dotenv;
use shortvol::config::Config;
use shortvol::core::http::start_server;
use shortvol::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let config = Config::from_env()?;
    logging::init_logging(&config);

    info!("Starting Short Volume Dashboard");
    info!(environment = %config.environment, "Environment");
    info!(finra = %config.finra_base_url, default_symbol = %config.default_symbol, "Data source");

    tokio::select! {
        result = start_server(config) => {
            if let Err(e) = result {
                error!(error = %e, "Dashboard server stopped");
                return Err(e);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutting down dashboard...");
        }
    }

    Ok(())
}
