//! Cibon - terminal desk for the farmer registry
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use cibon_app::config::{self, Settings};
use cibon_core::prelude::*;
use clap::Parser;

/// Browse and edit the farmer registry over its HAL API
#[derive(Parser, Debug)]
#[command(name = "cibon")]
#[command(about = "A terminal client for the farmer registry HAL API", long_about = None)]
struct Args {
    /// API root URL (overrides `api.root`)
    #[arg(long, value_name = "URL")]
    api_root: Option<String>,

    /// Collection relation to browse from the API root
    #[arg(long, value_name = "NAME")]
    rel: Option<String>,

    /// Records per page
    #[arg(long, value_name = "N")]
    page_size: Option<u32>,

    /// Config file (defaults to ~/.config/cibon/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    /// Command-line values win over the config file
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(root) = self.api_root {
            settings.api.root = root;
        }
        if let Some(rel) = self.rel {
            settings.api.collection_rel = rel;
        }
        if let Some(page_size) = self.page_size {
            settings.ui.page_size = page_size;
        }
        settings
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file, the TUI owns stdout
    cibon_core::logging::init()?;

    let settings = config::load_settings(args.config.as_deref())?;
    let settings = args.apply(settings);
    info!(
        "Settings: root={} rel={} page_size={}",
        settings.api.root, settings.api.collection_rel, settings.ui.page_size
    );

    let result = cibon_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Ok(log_file) = cibon_core::logging::get_current_log_file() {
            eprintln!("See {} for details", log_file.display());
        }
    }

    info!("Cibon exiting");
    result
}
