use std::net::SocketAddr;

use clap::Parser;

/// CLI arguments for the chat widget
#[derive(Parser, Debug)]
#[command(name = "vikaschat")]
#[command(about = "VIKAS CSC chat widget - web chat with an AI service assistant")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Address to bind the web server to
    #[arg(short, long, value_name = "ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Override the upstream completion model
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Override the upstream API base URL (e.g. a local test server)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Run the terminal chat client against a running server instead of
    /// serving the widget
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub interactive: bool,

    /// Chat endpoint the terminal client talks to
    #[arg(
        long,
        value_name = "URL",
        default_value = "http://127.0.0.1:3000/api/chat"
    )]
    pub server_url: String,

    /// Disable the JSONL transcript under logs/
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_transcript: bool,
}
