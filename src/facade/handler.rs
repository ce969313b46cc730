use crate::config::{DEFAULT_MAX_CAPACITY, GarageConfig, SeedFile, SeedGarage};
use crate::core::{GarageError, Result};
use crate::factory::validate_vehicle;
use crate::storage::{CollectionRegistry, Located, SlottedCollection};
use crate::vehicle::{Vehicle, VehicleColor, VehicleKind, VehicleQuery};
use log::{debug, info, warn};
use std::collections::{BTreeMap, BTreeSet};

pub type Garage = SlottedCollection<Vehicle>;

const DEMO_CAPACITIES: [usize; 4] = [4, 10, 3, 8];

/// Entry point for front ends: a registry of vehicle garages with licence
/// plates unique across all of them.
#[derive(Debug, Clone)]
pub struct GarageHandler {
    registry: CollectionRegistry<Vehicle>,
    max_capacity: usize,
}

impl Default for GarageHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GarageHandler {
    pub fn new() -> Self {
        Self {
            registry: CollectionRegistry::new(),
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }

    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Build a handler from startup configuration: plain garages first,
    /// then the demo data, then the seed file.
    pub fn from_config(config: &GarageConfig) -> Result<Self> {
        config.validate()?;
        let mut handler = Self::new().with_max_capacity(config.max_capacity);

        for &capacity in &config.capacities {
            handler.create_garage(capacity)?;
        }
        if config.prepopulate {
            for line in handler.prepopulate()? {
                debug!("{}", line);
            }
        }
        if let Some(path) = &config.seed_path {
            let seed = SeedFile::from_path(path)?;
            let added = handler.load_seed(&seed)?;
            info!("Loaded {} vehicles from {}", added, path.display());
        }
        Ok(handler)
    }

    pub fn registry(&self) -> &CollectionRegistry<Vehicle> {
        &self.registry
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn garages(&self) -> &[Garage] {
        self.registry.collections()
    }

    pub fn garage(&self, index: usize) -> Result<&Garage> {
        self.registry.collection(index)
    }

    pub fn garage_count(&self) -> usize {
        self.registry.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.registry.item_count()
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.registry.iter_items()
    }

    pub fn create_garage(&mut self, capacity: usize) -> Result<usize> {
        if capacity > self.max_capacity {
            return Err(GarageError::InvalidCapacity(capacity));
        }
        let index = self.registry.create_collection(capacity)?;
        info!("Created garage #{} with capacity {}", index, capacity);
        Ok(index)
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle, garage: usize) -> Result<&Vehicle> {
        debug!("Adding {} to garage #{}", vehicle.plate, garage);
        let plate = vehicle.plate.clone();
        match self.registry.add_item(vehicle, garage) {
            Ok(stored) => Ok(stored),
            Err(err) => {
                warn!("Rejected {}: {}", plate, err);
                Err(err)
            }
        }
    }

    pub fn remove_vehicle(&mut self, plate: &str) -> bool {
        self.take_vehicle(plate).is_some()
    }

    pub fn take_vehicle(&mut self, plate: &str) -> Option<Vehicle> {
        let removed = self.registry.take_item(plate);
        match &removed {
            Some(vehicle) => debug!("Removed {}", vehicle.plate),
            None => debug!("Nothing to remove for {}", plate),
        }
        removed
    }

    pub fn find_vehicle(&self, plate: &str) -> Result<Located<'_, Vehicle>> {
        self.registry.find_item(plate)
    }

    pub fn does_plate_exist(&self, plate: &str) -> bool {
        self.registry.does_key_exist(plate)
    }

    pub fn count_vehicle_types<I>(&self, kinds: I) -> BTreeMap<VehicleKind, usize>
    where
        I: IntoIterator<Item = VehicleKind>,
    {
        self.registry.count_by_kind(kinds)
    }

    pub fn count_all_types(&self) -> BTreeMap<VehicleKind, usize> {
        self.count_vehicle_types(VehicleKind::ALL)
    }

    pub fn query_vehicles(&self, query: &VehicleQuery) -> Vec<&Vehicle> {
        debug!("Query: {}", query);
        self.registry.query_items(query)
    }

    pub fn list_contents(&self) -> String {
        self.registry.list_contents()
    }

    /// Create four demo garages and park three cars in them. Returns one
    /// outcome line per car.
    ///
    /// Nothing is created when any demo capacity exceeds the ceiling.
    pub fn prepopulate(&mut self) -> Result<Vec<String>> {
        if let Some(&capacity) = DEMO_CAPACITIES
            .iter()
            .find(|&&capacity| capacity > self.max_capacity)
        {
            return Err(GarageError::InvalidCapacity(capacity));
        }

        let first = self.garage_count();
        for capacity in DEMO_CAPACITIES {
            self.create_garage(capacity)?;
        }

        let demo = [
            (Vehicle::car("ABC123", 4).with_color(VehicleColor::Blue).with_top_speed(150.0), 0),
            (Vehicle::car("DEF456", 5).with_color(VehicleColor::Black).with_top_speed(160.0), 2),
            (Vehicle::car("GHI789", 3).with_color(VehicleColor::White).with_top_speed(170.0), 0),
        ];

        let mut lines = Vec::with_capacity(demo.len());
        for (vehicle, offset) in demo {
            let target = first + offset;
            let kind = vehicle.kind();
            let outcome = self.add_vehicle(vehicle, target).map(|_| ());
            let line = match outcome {
                Ok(()) => format!("Added {} to {}", kind, self.garage(target)?.short_description()),
                Err(err) => err.to_string(),
            };
            lines.push(line);
        }
        info!("Pre-populated garages #{}..#{}", first, first + 3);
        Ok(lines)
    }

    /// Create the seed's garages and add its vehicles.
    ///
    /// The whole seed is checked first; a rejected seed leaves the handler
    /// untouched.
    pub fn load_seed(&mut self, seed: &SeedFile) -> Result<usize> {
        self.check_seed(seed)?;

        let mut added = 0;
        for garage in &seed.garages {
            let index = self.create_garage(garage.capacity)?;
            for vehicle in &garage.vehicles {
                self.add_vehicle(vehicle.clone(), index)?;
                added += 1;
            }
        }
        Ok(added)
    }

    fn check_seed(&self, seed: &SeedFile) -> Result<()> {
        let mut plates = BTreeSet::new();

        for garage in &seed.garages {
            if garage.capacity == 0 || garage.capacity > self.max_capacity {
                return Err(GarageError::InvalidCapacity(garage.capacity));
            }
            if garage.vehicles.len() > garage.capacity {
                return Err(GarageError::CollectionFull {
                    capacity: garage.capacity,
                });
            }

            for vehicle in &garage.vehicles {
                validate_vehicle(vehicle).map_err(|err| {
                    GarageError::Config(format!("seed vehicle '{}': {}", vehicle.plate, err))
                })?;
                if self.does_plate_exist(&vehicle.plate) || !plates.insert(vehicle.plate.as_str()) {
                    return Err(GarageError::DuplicateKey(vehicle.plate.clone()));
                }
            }
        }
        Ok(())
    }

    /// Current garages and vehicles in seed file form.
    pub fn export_seed(&self) -> SeedFile {
        SeedFile {
            garages: self
                .garages()
                .iter()
                .map(|garage| SeedGarage {
                    capacity: garage.capacity(),
                    vehicles: garage.iter().cloned().collect(),
                })
                .collect(),
        }
    }
}
