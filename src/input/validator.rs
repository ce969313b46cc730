//! Conversion and bounds checking of raw user text.
//!
//! Every validator returns `GarageError::Validation` with a message meant to
//! be shown to the user verbatim before re-prompting.

use crate::core::{GarageError, Result};
use crate::facade::GarageHandler;
use crate::vehicle::{VehicleColor, is_valid_plate, normalize_plate};

pub fn validate_number_bounded(input: &str, min: u32, max: u32) -> Result<u32> {
    let number: i64 = input
        .trim()
        .parse()
        .map_err(|_| GarageError::Validation("Must be able to read as number".into()))?;

    if number < i64::from(min) || number > i64::from(max) {
        return Err(GarageError::Validation(format!(
            "Input must be between {} and {}.",
            min, max
        )));
    }
    Ok(number as u32)
}

pub fn validate_float_bounded(input: &str, min: f64, max: f64) -> Result<f64> {
    let number: f64 = input
        .trim()
        .parse()
        .map_err(|_| GarageError::Validation("Must be able to read as number".into()))?;

    if !number.is_finite() || number < min || number > max {
        return Err(GarageError::Validation(format!(
            "Input must be between {} and {}.",
            min, max
        )));
    }
    Ok(number)
}

pub fn validate_capacity(input: &str, max: usize) -> Result<usize> {
    let ceiling = u32::try_from(max).unwrap_or(u32::MAX);
    validate_number_bounded(input, 1, ceiling).map(|n| n as usize)
}

/// Plate typed for a lookup: any letter case, returned upper-cased.
pub fn validate_plate_search(input: &str) -> Result<String> {
    normalize_plate(input).ok_or_else(|| {
        GarageError::Validation(
            "Licence plate must be three letters followed by three digits.".into(),
        )
    })
}

/// Plate for a new vehicle: canonical upper-case form and not in use
/// anywhere in the handler's garages.
pub fn validate_new_plate(input: &str, handler: &GarageHandler) -> Result<String> {
    let plate = input.trim();
    if !is_valid_plate(plate) {
        return Err(GarageError::Validation(
            "Licence plate must be three capital letters followed by three digits.".into(),
        ));
    }
    if handler.does_plate_exist(plate) {
        return Err(GarageError::Validation(format!(
            "Licence plate {} is already in use",
            plate
        )));
    }
    Ok(plate.to_string())
}

pub fn validate_color(input: &str) -> Result<VehicleColor> {
    input.parse()
}
