use dotenv::dotenv;
use tracing::{info, warn};

use gozamadrid_backend::app::app::App;
use gozamadrid_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    // Console plus rolling file layers; keep the guards alive for the
    // lifetime of the process.
    let _logger = Logger::new().expect("Failed to initialize logging");

    info!("🚀 Starting Goza Madrid Backend Application");

    // Load environment variables from .env file
    match dotenv() {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    // Create and start the App
    let app = App::new().await;
    app.start().await;
}
