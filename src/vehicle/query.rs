use super::{Vehicle, VehicleColor, VehicleKind};
use crate::core::{Criteria, keys_match};
use std::fmt;

/// Partial vehicle used as search criteria.
///
/// Unset fields impose no constraint; set fields are AND-ed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleQuery {
    pub plate: Option<String>,
    pub wheels: Option<u32>,
    pub color: Option<VehicleColor>,
    pub top_speed: Option<f64>,
    pub kind: Option<VehicleKind>,
}

impl VehicleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = Some(plate.into());
        self
    }

    pub fn with_wheels(mut self, wheels: u32) -> Self {
        self.wheels = Some(wheels);
        self
    }

    pub fn with_color(mut self, color: VehicleColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_top_speed(mut self, top_speed: f64) -> Self {
        self.top_speed = Some(top_speed);
        self
    }

    pub fn with_kind(mut self, kind: VehicleKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.plate.is_none()
            && self.wheels.is_none()
            && self.color.is_none()
            && self.top_speed.is_none()
            && self.kind.is_none()
    }
}

impl Criteria<Vehicle> for VehicleQuery {
    fn matches(&self, vehicle: &Vehicle) -> bool {
        if let Some(plate) = &self.plate
            && !keys_match(plate, &vehicle.plate)
        {
            return false;
        }
        if self.wheels.is_some_and(|wheels| wheels != vehicle.wheels) {
            return false;
        }
        if self.color.is_some_and(|color| color != vehicle.color) {
            return false;
        }
        if self.top_speed.is_some_and(|speed| speed != vehicle.top_speed) {
            return false;
        }
        if self.kind.is_some_and(|kind| kind != vehicle.kind()) {
            return false;
        }
        true
    }
}

impl fmt::Display for VehicleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(kind) = self.kind {
            parts.push(format!("kind={}", kind));
        }
        if let Some(plate) = &self.plate {
            parts.push(format!("plate={}", plate));
        }
        if let Some(wheels) = self.wheels {
            parts.push(format!("wheels={}", wheels));
        }
        if let Some(color) = self.color {
            parts.push(format!("color={}", color));
        }
        if let Some(speed) = self.top_speed {
            parts.push(format!("top_speed={}", speed));
        }

        if parts.is_empty() {
            f.write_str("(Empty)")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        let query = VehicleQuery::new();
        assert!(query.is_empty());
        assert!(query.matches(&Vehicle::car("ABC123", 4)));
        assert!(query.matches(&Vehicle::boat("BOA123", 8.0)));
        assert_eq!(query.to_string(), "(Empty)");
    }

    #[test]
    fn test_fields_are_anded() {
        let red_car = Vehicle::car("RED001", 4).with_color(VehicleColor::Red);
        let red_bus = Vehicle::bus("RED002", 30).with_color(VehicleColor::Red);

        let query = VehicleQuery::new()
            .with_color(VehicleColor::Red)
            .with_wheels(4);
        assert!(query.matches(&red_car));
        assert!(!query.matches(&red_bus));
        assert_eq!(query.to_string(), "wheels=4 color=Red");
    }

    #[test]
    fn test_plate_ignores_case() {
        let query = VehicleQuery::new().with_plate("abc123");
        assert!(query.matches(&Vehicle::car("ABC123", 4)));
        assert!(!query.matches(&Vehicle::car("ABC124", 4)));
    }

    #[test]
    fn test_kind_and_speed() {
        let fast_bike = Vehicle::motorcycle("MOT999", 1000).with_top_speed(299.0);
        let query = VehicleQuery::new()
            .with_kind(VehicleKind::Motorcycle)
            .with_top_speed(299.0);
        assert!(query.matches(&fast_bike));
        assert!(!query.with_top_speed(300.0).matches(&fast_bike));
    }
}
