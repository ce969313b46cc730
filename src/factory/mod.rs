//! Construction of concrete vehicles from validated user input.
//!
//! Factories are registered statically in [`available_factories`]; each one
//! knows how to prompt for and validate the single attribute its kind adds.

pub mod kinds;

pub use kinds::{AirplaneFactory, BoatFactory, BusFactory, CarFactory, MotorcycleFactory};

use crate::core::{GarageError, Result};
use crate::facade::GarageHandler;
use crate::input::{Prompter, validate_float_bounded, validate_new_plate, validate_number_bounded};
use crate::vehicle::{Vehicle, VehicleDetails, VehicleKind, is_valid_plate};
use std::io::{BufRead, Write};

pub const MAX_WHEELS: u32 = 8;
pub const MAX_TOP_SPEED: f64 = 450.0;

pub trait VehicleFactory {
    fn kind(&self) -> VehicleKind;

    fn description(&self) -> &'static str {
        self.kind().name()
    }

    /// Prompt shown for the kind-specific attribute
    fn detail_prompt(&self) -> &'static str;

    /// Validate raw text for the kind-specific attribute
    fn parse_details(&self, input: &str) -> Result<VehicleDetails>;
}

pub fn available_factories() -> Vec<Box<dyn VehicleFactory>> {
    vec![
        Box::new(CarFactory),
        Box::new(BusFactory),
        Box::new(BoatFactory),
        Box::new(MotorcycleFactory),
        Box::new(AirplaneFactory),
    ]
}

pub fn factory_for(kind: VehicleKind) -> Box<dyn VehicleFactory> {
    match kind {
        VehicleKind::Car => Box::new(CarFactory),
        VehicleKind::Bus => Box::new(BusFactory),
        VehicleKind::Boat => Box::new(BoatFactory),
        VehicleKind::Motorcycle => Box::new(MotorcycleFactory),
        VehicleKind::Airplane => Box::new(AirplaneFactory),
    }
}

/// Check an already built vehicle (e.g. from a seed file) against the same
/// bounds the prompts enforce.
pub fn validate_vehicle(vehicle: &Vehicle) -> Result<()> {
    if !is_valid_plate(&vehicle.plate) {
        return Err(GarageError::Validation(
            "Licence plate must be three capital letters followed by three digits.".into(),
        ));
    }
    if vehicle.wheels > MAX_WHEELS {
        return Err(GarageError::Validation(format!(
            "Input must be between 0 and {}.",
            MAX_WHEELS
        )));
    }
    if !(0.0..=MAX_TOP_SPEED).contains(&vehicle.top_speed) {
        return Err(GarageError::Validation(format!(
            "Input must be between 0 and {}.",
            MAX_TOP_SPEED
        )));
    }

    let factory = factory_for(vehicle.kind());
    factory.parse_details(&vehicle.details.value_text())?;
    Ok(())
}

/// Prompt for every attribute of a new vehicle, shared ones first and the
/// kind-specific one last. The plate is checked for uniqueness against
/// `handler` while prompting.
pub fn create_vehicle<R, W>(
    factory: &dyn VehicleFactory,
    prompter: &mut Prompter<R, W>,
    handler: &GarageHandler,
) -> Result<Vehicle>
where
    R: BufRead,
    W: Write,
{
    let plate = prompter.retrieve_input("Licence plate: ", |s| validate_new_plate(s, handler))?;
    let wheels =
        prompter.retrieve_input("Wheels: ", |s| validate_number_bounded(s, 0, MAX_WHEELS))?;
    let color = prompter.select_color()?;
    let top_speed = prompter.retrieve_input("Top speed: ", |s| {
        validate_float_bounded(s, 0.0, MAX_TOP_SPEED)
    })?;
    let details = prompter.retrieve_input(factory.detail_prompt(), |s| factory.parse_details(s))?;

    Ok(Vehicle {
        plate,
        wheels,
        color,
        top_speed,
        details,
    })
}
