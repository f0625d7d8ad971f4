use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agenthub", version, about = "Terminal client for the AgentHub agent marketplace")]
pub struct Cli {
    /// Base URL of the AgentHub API (e.g., "http://localhost:3001/api")
    #[arg(long)]
    pub api_url: Option<String>,

    /// Path to config file (overrides default search)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
