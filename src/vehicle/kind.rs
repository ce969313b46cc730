use crate::core::GarageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle paint colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleColor {
    Black,
    White,
    Blue,
    Red,
    Green,
    Yellow,
    Pink,
}

impl VehicleColor {
    pub const ALL: [VehicleColor; 7] = [
        VehicleColor::Black,
        VehicleColor::White,
        VehicleColor::Blue,
        VehicleColor::Red,
        VehicleColor::Green,
        VehicleColor::Yellow,
        VehicleColor::Pink,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VehicleColor::Black => "Black",
            VehicleColor::White => "White",
            VehicleColor::Blue => "Blue",
            VehicleColor::Red => "Red",
            VehicleColor::Green => "Green",
            VehicleColor::Yellow => "Yellow",
            VehicleColor::Pink => "Pink",
        }
    }
}

impl fmt::Display for VehicleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleColor {
    type Err = GarageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GarageError::Validation(format!("Unknown colour: '{}'", s.trim())))
    }
}

/// Concrete vehicle kinds. Counting by kind is exact, there is no hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Bus,
    Boat,
    Motorcycle,
    Airplane,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 5] = [
        VehicleKind::Car,
        VehicleKind::Bus,
        VehicleKind::Boat,
        VehicleKind::Motorcycle,
        VehicleKind::Airplane,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Bus => "Bus",
            VehicleKind::Boat => "Boat",
            VehicleKind::Motorcycle => "Motorcycle",
            VehicleKind::Airplane => "Airplane",
        }
    }

    /// Wheel count used when a vehicle is built without an explicit one.
    pub fn default_wheels(&self) -> u32 {
        match self {
            VehicleKind::Car => 4,
            VehicleKind::Bus => 6,
            VehicleKind::Boat => 0,
            VehicleKind::Motorcycle => 2,
            VehicleKind::Airplane => 3,
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleKind {
    type Err = GarageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(VehicleKind::Car),
            "bus" => Ok(VehicleKind::Bus),
            "boat" => Ok(VehicleKind::Boat),
            "motorcycle" | "mc" | "bike" => Ok(VehicleKind::Motorcycle),
            "airplane" | "plane" | "aeroplane" => Ok(VehicleKind::Airplane),
            other => Err(GarageError::Validation(format!(
                "Unknown vehicle type: '{}'",
                other
            ))),
        }
    }
}
