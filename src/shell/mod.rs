//! One-line command shell over a [`GarageHandler`].
//!
//! Parsing lives in [`command`]; [`Shell::run_line`] executes a line and
//! returns the text to show. The full-screen front end is a thin renderer
//! around this.

pub mod command;

pub use command::{COMMAND_WORDS, Command, USAGE};

use crate::core::{GarageError, Result};
use crate::facade::GarageHandler;
use log::debug;

/// What the caller should do after a line ran
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Output(Vec<String>),
    Quit,
}

pub struct Shell {
    handler: GarageHandler,
}

impl Shell {
    pub fn new(handler: GarageHandler) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &GarageHandler {
        &self.handler
    }

    pub fn into_handler(self) -> GarageHandler {
        self.handler
    }

    pub fn run_line(&mut self, line: &str) -> Result<Outcome> {
        let command = Command::parse(line, self.handler.max_capacity())?;
        debug!("Shell command: {:?}", command);
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let lines = match command {
            Command::CreateGarage(capacity) => {
                let index = self.handler.create_garage(capacity)?;
                vec![format!(
                    "Created garage #{}: {}",
                    index,
                    self.handler.garage(index)?.short_description()
                )]
            }
            Command::Add { vehicle, garage } => {
                let target = match garage {
                    Some(index) => index,
                    None => self.first_free_garage()?,
                };
                let stored = self.handler.add_vehicle(vehicle, target)?;
                let line = format!("Added {} to garage #{}", stored, target);
                vec![line]
            }
            Command::Remove(plate) => {
                if self.handler.remove_vehicle(&plate) {
                    vec![format!("Removed vehicle with licence plate {}", plate)]
                } else {
                    return Err(GarageError::NotFound(plate));
                }
            }
            Command::Find(plate) => {
                let found = self.handler.find_vehicle(&plate)?;
                vec![
                    "Found vehicle!".to_string(),
                    format!("Vehicle: {}", found.item),
                    format!(
                        "Found in garage #{}: {}",
                        found.index,
                        found.collection.short_description()
                    ),
                ]
            }
            Command::Query(query) => {
                let matches = self.handler.query_vehicles(&query);
                let mut lines = vec![format!("{} vehicle(s) matching {}", matches.len(), query)];
                lines.extend(matches.iter().map(|vehicle| format!("    {}", vehicle)));
                lines
            }
            Command::Count => vec![format_type_counts(&self.handler)],
            Command::List => self
                .handler
                .list_contents()
                .lines()
                .map(str::to_string)
                .collect(),
            Command::Json => self
                .handler
                .export_seed()
                .to_json()?
                .lines()
                .map(str::to_string)
                .collect(),
            Command::Seed => self.handler.prepopulate()?,
            Command::Help => USAGE.iter().map(|line| line.to_string()).collect(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(lines))
    }

    fn first_free_garage(&self) -> Result<usize> {
        if self.handler.garage_count() == 0 {
            return Err(GarageError::Validation("Create a garage first!".into()));
        }
        self.handler
            .garages()
            .iter()
            .position(|garage| !garage.is_full())
            .ok_or_else(|| GarageError::Validation("All garages are full".into()))
    }
}

/// `Vehicle types (#): Car (2), Bus (0), ...`
pub fn format_type_counts(handler: &GarageHandler) -> String {
    let counts: Vec<String> = handler
        .count_all_types()
        .iter()
        .map(|(kind, count)| format!("{} ({})", kind, count))
        .collect();
    format!("Vehicle types (#): {}", counts.join(", "))
}
