//! pump-launch - Solana wallet and pump.fun token launch CLI

use std::process::ExitCode;

use pump_launch::adapters::cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists (Pinata keys can live here instead of config.json)
    dotenvy::dotenv().ok();

    let app = cli::init();

    match cli::execute(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Operation failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
