//! Fortune Wheel - native wheel-of-fortune picker
//!
//! CLI commands:
//! - gui: Launch the wheel window
//! - list: Print the saved wheel and selection history
//! - reset: Restore the default catalog, clear history
//! - clear: Empty the wheel and history

mod config;
mod geometry;
mod gui;
mod input;
mod logging;
mod spin;
mod state;
mod storage;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fortune_wheel")]
#[command(about = "Spin a wheel to pick one item from an editable list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the wheel.yaml manifest
    #[arg(short, long, default_value = "wheel.yaml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the wheel window
    Gui,

    /// Print the saved wheel and selection history
    List,

    /// Restore the default catalog and clear the history
    Reset,

    /// Empty the wheel and the history
    Clear,
}

fn main() -> anyhow::Result<()> {
    let settings = config::Settings::load();
    logging::init_logging(&settings.log_dir);
    tracing::info!("Fortune Wheel starting up");

    let cli = Cli::parse();

    let config = if cli.config.exists() {
        tracing::info!("Loading config from {:?}", cli.config);
        config::Config::load(&cli.config)?
    } else {
        tracing::warn!("Config file not found: {:?}, using defaults", cli.config);
        config::Config::default()
    };
    tracing::info!(
        "Config loaded: {} default item(s), expand_multipliers={}",
        config.default_items.len(),
        config.expand_multipliers
    );

    let store = storage::WheelStore::new(&settings.data_dir);

    match cli.command {
        Commands::Gui => {
            tracing::info!("Launching wheel window");
            gui::run_wheel(config, store)?;
        }

        Commands::List => {
            list_state(&config, &store);
        }

        Commands::Reset => {
            store.save_items(&config.default_items);
            store.save_history(&[]);
            println!(
                "Wheel reset to {} default item(s), history cleared",
                config.default_items.len()
            );
        }

        Commands::Clear => {
            store.save_items(&[]);
            store.save_history(&[]);
            println!("Wheel and history cleared");
        }
    }

    Ok(())
}

/// Print the persisted wheel the way the GUI would load it.
fn list_state(config: &config::Config, store: &storage::WheelStore) {
    let items = store
        .load_items()
        .unwrap_or_else(|| config.default_items.clone());
    let history = store.load_history().unwrap_or_default();

    println!("Wheel ({} slot(s)):", items.len());
    for item in &items {
        println!("  - {}", item);
    }

    if history.is_empty() {
        println!();
        println!("No selections yet");
    } else {
        println!();
        println!("History ({} selection(s)):", history.len());
        for record in &history {
            let marker = if record.was_removed { "removed" } else { "kept" };
            println!("  - {} ({})", record.item, marker);
        }
    }
}
