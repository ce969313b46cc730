//! Vehicle domain: the item type stored in garages.
//!
//! Every kind shares plate, wheels, colour and top speed; the single
//! kind-specific attribute lives in [`VehicleDetails`].

pub mod kind;
pub mod plate;
pub mod query;

pub use kind::{VehicleColor, VehicleKind};
pub use plate::{is_valid_plate, normalize_plate};
pub use query::VehicleQuery;

use crate::core::{Keyed, Kinded};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind-specific attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VehicleDetails {
    Car { doors: u32 },
    Bus { seats: u32 },
    /// Length in metres
    Boat { length: f64 },
    /// Engine displacement in cc
    Motorcycle { cylinder_volume: u32 },
    Airplane { engines: u32 },
}

impl VehicleDetails {
    pub fn kind(&self) -> VehicleKind {
        match self {
            VehicleDetails::Car { .. } => VehicleKind::Car,
            VehicleDetails::Bus { .. } => VehicleKind::Bus,
            VehicleDetails::Boat { .. } => VehicleKind::Boat,
            VehicleDetails::Motorcycle { .. } => VehicleKind::Motorcycle,
            VehicleDetails::Airplane { .. } => VehicleKind::Airplane,
        }
    }

    /// The kind-specific value as it would be typed at its prompt.
    pub fn value_text(&self) -> String {
        match self {
            VehicleDetails::Car { doors } => doors.to_string(),
            VehicleDetails::Bus { seats } => seats.to_string(),
            VehicleDetails::Boat { length } => length.to_string(),
            VehicleDetails::Motorcycle { cylinder_volume } => cylinder_volume.to_string(),
            VehicleDetails::Airplane { engines } => engines.to_string(),
        }
    }
}

impl fmt::Display for VehicleDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleDetails::Car { doors } => write!(f, "doors={}", doors),
            VehicleDetails::Bus { seats } => write!(f, "seats={}", seats),
            VehicleDetails::Boat { length } => write!(f, "length={}m", length),
            VehicleDetails::Motorcycle { cylinder_volume } => {
                write!(f, "cylinder_volume={}cc", cylinder_volume)
            }
            VehicleDetails::Airplane { engines } => write!(f, "engines={}", engines),
        }
    }
}

/// A parked vehicle. Equality is value equality over all fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate: String,
    pub wheels: u32,
    pub color: VehicleColor,
    pub top_speed: f64,
    #[serde(flatten)]
    pub details: VehicleDetails,
}

impl Vehicle {
    /// Create a vehicle with the kind's default wheel count, white paint
    /// and zero top speed.
    pub fn new(plate: impl Into<String>, details: VehicleDetails) -> Self {
        Self {
            plate: plate.into(),
            wheels: details.kind().default_wheels(),
            color: VehicleColor::White,
            top_speed: 0.0,
            details,
        }
    }

    pub fn car(plate: impl Into<String>, doors: u32) -> Self {
        Self::new(plate, VehicleDetails::Car { doors })
    }

    pub fn bus(plate: impl Into<String>, seats: u32) -> Self {
        Self::new(plate, VehicleDetails::Bus { seats })
    }

    pub fn boat(plate: impl Into<String>, length: f64) -> Self {
        Self::new(plate, VehicleDetails::Boat { length })
    }

    pub fn motorcycle(plate: impl Into<String>, cylinder_volume: u32) -> Self {
        Self::new(plate, VehicleDetails::Motorcycle { cylinder_volume })
    }

    pub fn airplane(plate: impl Into<String>, engines: u32) -> Self {
        Self::new(plate, VehicleDetails::Airplane { engines })
    }

    pub fn with_wheels(mut self, wheels: u32) -> Self {
        self.wheels = wheels;
        self
    }

    pub fn with_color(mut self, color: VehicleColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_top_speed(mut self, top_speed: f64) -> Self {
        self.top_speed = top_speed;
        self
    }

    pub fn kind(&self) -> VehicleKind {
        self.details.kind()
    }
}

impl Keyed for Vehicle {
    fn key(&self) -> &str {
        &self.plate
    }
}

impl Kinded for Vehicle {
    type Kind = VehicleKind;

    fn kind(&self) -> VehicleKind {
        self.details.kind()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} plate={} wheels={} color={} top_speed={} {}",
            self.kind(),
            self.plate,
            self.wheels,
            self.color,
            self.top_speed,
            self.details
        )
    }
}
