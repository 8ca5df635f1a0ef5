// CLI module for gatordocs

use clap::Parser;
use std::path::PathBuf;

/// gatordocs - design-system documentation Q&A relay for a local Ollama server
#[derive(Parser, Debug)]
#[command(name = "gatordocs", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (defaults to ~/.gatordocs/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verify the completion service and configured model before serving
    #[arg(long)]
    pub check: bool,
}
