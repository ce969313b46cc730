use anyhow::{Context, Result};
use clap::Parser;
use garagedb::config::DEFAULT_MAX_CAPACITY;
use garagedb::{FrontEnd, GarageConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "garagedb")]
#[command(about = "Park, find and list vehicles in fixed-size garages")]
pub struct Args {
    /// Garages to create at startup, e.g. "4,10,3"
    #[arg(long)]
    pub garages: Option<String>,

    /// Create the demo garages and cars
    #[arg(long)]
    pub prepopulate: bool,

    /// JSON seed file with garages and vehicles
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Largest garage capacity accepted
    #[arg(long, default_value_t = DEFAULT_MAX_CAPACITY)]
    pub max_capacity: usize,

    /// Start the full-screen command shell instead of the menus
    #[arg(long)]
    pub tui: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn into_config(self) -> Result<GarageConfig> {
        let mut config = GarageConfig::new()
            .prepopulate(self.prepopulate)
            .max_capacity(self.max_capacity)
            .front_end(if self.tui { FrontEnd::Tui } else { FrontEnd::Menu });

        if let Some(list) = &self.garages {
            let capacities = GarageConfig::parse_capacities(list)
                .with_context(|| format!("invalid --garages value '{}'", list))?;
            config = config.capacities(capacities);
        }
        if let Some(path) = self.seed {
            config = config.seed_path(path);
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}
