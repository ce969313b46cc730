mod cli;

use crate::cli::app::App;
use crate::cli::args::Args;
use anyhow::{Context, Result};
use clap::Parser;
use garagedb::console::MenuConsole;
use garagedb::input::Prompter;
use garagedb::{FrontEnd, GarageHandler};
use log::info;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let config = args.into_config()?;
    let handler = GarageHandler::from_config(&config).context("failed to set up garages")?;
    info!(
        "Starting with {} garages and {} vehicles",
        handler.garage_count(),
        handler.vehicle_count()
    );

    match config.front_end {
        FrontEnd::Menu => {
            let mut console = MenuConsole::new(handler, Prompter::stdio());
            console.run()?;
        }
        FrontEnd::Tui => {
            let mut app = App::new(handler);
            app.run().context("terminal session failed")?;
        }
    }
    Ok(())
}
