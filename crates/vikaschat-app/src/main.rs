use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::env;

use vikaschat::cli::Cli;
use vikaschat::config::{ProxyConfig, API_KEY_ENV};
use vikaschat::repl;
use vikaschat::transcript::TranscriptLogger;
use vikaschat::web::WebServer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Terminal client mode
    if cli.interactive {
        return repl::run_repl(&cli.server_url).await;
    }

    let config = ProxyConfig::from_env(&cli);
    if config.api_key.is_none() {
        println!(
            "{} {} not set - chat will serve the canned service directory",
            "⚠️".yellow(),
            API_KEY_ENV
        );
    }

    let transcript = if cli.no_transcript {
        None
    } else {
        match TranscriptLogger::new(&env::current_dir()?).await {
            Ok(logger) => {
                println!("{} Transcript: {}", "📝".green(), logger.path().display());
                Some(logger)
            }
            Err(e) => {
                eprintln!("⚠️  Transcript logging disabled: {:#}", e);
                None
            }
        }
    };

    WebServer::new(cli.bind, config, transcript).start().await
}
