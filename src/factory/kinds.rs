use super::VehicleFactory;
use crate::core::Result;
use crate::input::{validate_float_bounded, validate_number_bounded};
use crate::vehicle::{VehicleDetails, VehicleKind};

pub struct CarFactory;

impl VehicleFactory for CarFactory {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn detail_prompt(&self) -> &'static str {
        "Doors: "
    }

    fn parse_details(&self, input: &str) -> Result<VehicleDetails> {
        let doors = validate_number_bounded(input, 0, 5)?;
        Ok(VehicleDetails::Car { doors })
    }
}

pub struct BusFactory;

impl VehicleFactory for BusFactory {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Bus
    }

    fn detail_prompt(&self) -> &'static str {
        "Seats: "
    }

    fn parse_details(&self, input: &str) -> Result<VehicleDetails> {
        let seats = validate_number_bounded(input, 1, 100)?;
        Ok(VehicleDetails::Bus { seats })
    }
}

pub struct BoatFactory;

impl VehicleFactory for BoatFactory {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Boat
    }

    fn detail_prompt(&self) -> &'static str {
        "Length (m): "
    }

    fn parse_details(&self, input: &str) -> Result<VehicleDetails> {
        let length = validate_float_bounded(input, 1.0, 500.0)?;
        Ok(VehicleDetails::Boat { length })
    }
}

pub struct MotorcycleFactory;

impl VehicleFactory for MotorcycleFactory {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Motorcycle
    }

    fn detail_prompt(&self) -> &'static str {
        "Cylinder volume (cc): "
    }

    fn parse_details(&self, input: &str) -> Result<VehicleDetails> {
        let cylinder_volume = validate_number_bounded(input, 50, 2500)?;
        Ok(VehicleDetails::Motorcycle { cylinder_volume })
    }
}

pub struct AirplaneFactory;

impl VehicleFactory for AirplaneFactory {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Airplane
    }

    fn detail_prompt(&self) -> &'static str {
        "Engines: "
    }

    fn parse_details(&self, input: &str) -> Result<VehicleDetails> {
        let engines = validate_number_bounded(input, 1, 8)?;
        Ok(VehicleDetails::Airplane { engines })
    }
}
