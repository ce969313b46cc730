use garagedb::GarageHandler;
use garagedb::shell::COMMAND_WORDS;
use garagedb::vehicle::{VehicleColor, VehicleKind};
use std::collections::BTreeSet;

const QUERY_FIELDS: [&str; 5] = ["kind=", "plate=", "wheels=", "color=", "speed="];

pub struct Autocompleter {
    keywords: BTreeSet<String>,
}

impl Default for Autocompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Autocompleter {
    pub fn new() -> Self {
        let keywords = COMMAND_WORDS
            .iter()
            .copied()
            .chain(QUERY_FIELDS)
            .chain(["to"])
            .map(str::to_string)
            .chain(VehicleKind::ALL.iter().map(|kind| kind.name().to_lowercase()))
            .chain(VehicleColor::ALL.iter().map(|color| color.name().to_lowercase()))
            .collect();

        Self { keywords }
    }

    /// Keywords and stored plates starting with `input` (case-insensitive).
    pub fn get_suggestions(&self, input: &str, handler: &GarageHandler) -> Vec<String> {
        let needle = input.to_lowercase();
        let mut suggestions: Vec<String> = self
            .keywords
            .iter()
            .filter(|kw| kw.starts_with(&needle) && kw.as_str() != needle)
            .cloned()
            .collect();

        // Plates of parked vehicles
        for vehicle in handler.vehicles() {
            if vehicle.plate.to_lowercase().starts_with(&needle) {
                suggestions.push(vehicle.plate.clone());
            }
        }

        suggestions.sort();
        suggestions.dedup();
        suggestions
    }
}
