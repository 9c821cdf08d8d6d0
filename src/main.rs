//! wares - A snappy terminal UI for browsing remote product catalogs
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use wares_app::config::{self, ThemeMode};

/// Browse a remote product catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "wares")]
#[command(about = "Browse a remote product catalog from the terminal", long_about = None)]
#[command(version)]
struct Args {
    /// Catalog endpoint override
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Color theme: auto, dark, or light
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    wares_core::logging::init()?;

    let mut settings = config::load_settings();

    // CLI flags win over the config file
    if let Some(endpoint) = args.endpoint {
        settings.catalog.endpoint = endpoint;
    }
    if let Some(theme) = args.theme.as_deref() {
        match theme.parse::<ThemeMode>() {
            Ok(mode) => settings.ui.theme = mode,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        }
    }

    tracing::info!("catalog endpoint: {}", settings.catalog.endpoint);

    wares_tui::run(settings).await?;
    Ok(())
}
