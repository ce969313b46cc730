// ============================================================================
// garagedb library
// ============================================================================

//! In-memory garage inventory.
//!
//! The generic core is [`storage::SlottedCollection`], a fixed-capacity slot
//! array, and [`storage::CollectionRegistry`], an ordered pool of those with
//! keys unique across the whole pool. [`GarageHandler`] specialises the pool
//! for [`Vehicle`]s; validation, factories and the console front ends sit on
//! top.
//!
//! ```
//! use garagedb::{GarageHandler, GarageError, Vehicle, VehicleColor};
//!
//! # fn main() -> garagedb::Result<()> {
//! let mut handler = GarageHandler::new();
//! let garage = handler.create_garage(1)?;
//!
//! handler.add_vehicle(Vehicle::car("ABC123", 4).with_color(VehicleColor::Red), garage)?;
//! let full = handler.add_vehicle(Vehicle::car("DEF456", 2), garage);
//! assert!(matches!(full, Err(GarageError::CollectionFull { .. })));
//!
//! let found = handler.find_vehicle("abc123")?;
//! assert_eq!(found.index, garage);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod console;
pub mod core;
pub mod facade;
pub mod factory;
pub mod input;
pub mod shell;
pub mod storage;
pub mod vehicle;

// Re-export main types for convenience
pub use config::{FrontEnd, GarageConfig, SeedFile, SeedGarage};
pub use core::{Criteria, GarageError, Keyed, Kinded, Result};
pub use facade::{Garage, GarageHandler};
pub use storage::{CollectionRegistry, Located, SlottedCollection};
pub use vehicle::{Vehicle, VehicleColor, VehicleDetails, VehicleKind, VehicleQuery};
