use clap::Parser;
use shop_client::config::{Cli, ShopConfig};
use shop_client::lifecycle::tracing::setup_tracing;
use shop_client::lifecycle::{Console, ShopSystem};
use tokio::io::BufReader;
use tracing::{error, info, Instrument};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();
    setup_tracing();

    let cli = Cli::parse();
    let config = match ShopConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return;
        }
    };

    let system = ShopSystem::connect(&config);
    let console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());

    let span = tracing::info_span!("session");
    match system.dispatcher(console).run().instrument(span).await {
        Ok(report) => info!(action = ?report.action, "Session finished"),
        Err(e) => error!(error = %e, "Session aborted"),
    }
}
