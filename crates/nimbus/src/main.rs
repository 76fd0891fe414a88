use clap::{Parser, Subcommand};
use nimbus::config;
use nimbus::gui::app::{AppInit, AppModel};
use nimbus::sys::{device, runtime};
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nimbus", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read the cursor config from this file instead of the per-user location
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Report whether this device gets the custom cursor
    Check,
    /// Write the default config file (if missing) and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config_path = config::resolve_path(cli.config)?;

    match cli.command {
        Some(Commands::Check) => {
            if device::supports_custom_cursor() {
                println!("custom cursor supported");
            } else {
                println!("custom cursor disabled: no desktop pointer detected");
            }
            Ok(())
        }
        Some(Commands::InitConfig) => {
            let path = config::write_default_config(&config_path)?;
            println!("{}", path.display());
            Ok(())
        }
        None => run(config_path),
    }
}

fn run(config_path: PathBuf) -> anyhow::Result<()> {
    let cursor_enabled = device::supports_custom_cursor();
    let config = config::load_or_default(&config_path);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(config_path.clone(), tx);

    let app = RelmApp::new("org.nimbus.cursor");

    app.run::<AppModel>(AppInit {
        config,
        config_path,
        cursor_enabled,
        rx,
    });
    Ok(())
}
