#![windows_subsystem = "windows"]

use anyhow::Result;
use gifport::{config::Config, gui};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // Default config - the GUI loads user settings and updates accordingly
    let config = Config::default();
    gui::launch(config)?;

    Ok(())
}
