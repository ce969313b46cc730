use crate::core::{GarageError, Result};
use crate::vehicle::Vehicle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest garage accepted unless configured otherwise.
pub const DEFAULT_MAX_CAPACITY: usize = 1000;

/// Which console front end the binary starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontEnd {
    /// Numbered menus with prompt/retry loops
    #[default]
    Menu,
    /// Full-screen command shell
    Tui,
}

/// Startup configuration for a garage session
#[derive(Debug, Clone, PartialEq)]
pub struct GarageConfig {
    /// Garages created empty at startup, in order
    pub capacities: Vec<usize>,

    /// Create the demo garages and cars
    pub prepopulate: bool,

    /// JSON seed file loaded after the garages above
    pub seed_path: Option<PathBuf>,

    /// Upper bound for any garage capacity
    pub max_capacity: usize,

    pub front_end: FrontEnd,
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GarageConfig {
    pub fn new() -> Self {
        Self {
            capacities: Vec::new(),
            prepopulate: false,
            seed_path: None,
            max_capacity: DEFAULT_MAX_CAPACITY,
            front_end: FrontEnd::Menu,
        }
    }

    /// Add one garage to create at startup
    pub fn garage(mut self, capacity: usize) -> Self {
        self.capacities.push(capacity);
        self
    }

    pub fn capacities(mut self, capacities: Vec<usize>) -> Self {
        self.capacities = capacities;
        self
    }

    pub fn prepopulate(mut self, prepopulate: bool) -> Self {
        self.prepopulate = prepopulate;
        self
    }

    pub fn seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(path.into());
        self
    }

    pub fn max_capacity(mut self, max: usize) -> Self {
        self.max_capacity = max;
        self
    }

    pub fn front_end(mut self, front_end: FrontEnd) -> Self {
        self.front_end = front_end;
        self
    }

    /// Parse a comma separated capacity list such as `"4,10,3"`.
    pub fn parse_capacities(list: &str) -> Result<Vec<usize>> {
        list.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| GarageError::Config(format!("Invalid garage capacity '{}'", part)))
            })
            .collect()
    }

    /// Check every configured capacity against the ceiling.
    pub fn validate(&self) -> Result<()> {
        if self.max_capacity == 0 {
            return Err(GarageError::Config("max capacity must be positive".into()));
        }
        for &capacity in &self.capacities {
            self.check_capacity(capacity)?;
        }
        Ok(())
    }

    pub fn check_capacity(&self, capacity: usize) -> Result<()> {
        if capacity == 0 || capacity > self.max_capacity {
            return Err(GarageError::InvalidCapacity(capacity));
        }
        Ok(())
    }
}

/// One garage in a seed file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedGarage {
    pub capacity: usize,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

/// Garages and vehicles to load at startup.
///
/// ```json
/// { "garages": [ { "capacity": 2, "vehicles": [
///     { "kind": "car", "plate": "ABC123", "wheels": 4,
///       "color": "Blue", "top_speed": 150.0, "doors": 4 } ] } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedFile {
    pub garages: Vec<SeedGarage>,
}

impl SeedFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            GarageError::Config(format!("cannot read seed file {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
