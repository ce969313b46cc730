use crate::core::{GarageError, Result};
use crate::factory::{MAX_TOP_SPEED, MAX_WHEELS, factory_for};
use crate::input::{
    validate_capacity, validate_color, validate_float_bounded, validate_number_bounded,
    validate_plate_search,
};
use crate::vehicle::{Vehicle, VehicleKind, VehicleQuery, is_valid_plate};

/// Words the shell understands as the first token of a line.
pub const COMMAND_WORDS: [&str; 11] = [
    "garage", "add", "remove", "find", "query", "count", "list", "json", "seed", "help", "quit",
];

pub const USAGE: &[&str] = &[
    "garage <capacity>                         create a garage",
    "add <kind> <plate> <wheels> <color> <top_speed> <extra> [to <garage>]",
    "                                          park a vehicle (first free garage by default)",
    "remove <plate>                            remove a vehicle",
    "find <plate>                              show a vehicle and its garage",
    "query [kind=..] [plate=..] [wheels=..] [color=..] [speed=..]",
    "                                          list matching vehicles",
    "count                                     vehicles per type",
    "list                                      all garages and their vehicles",
    "json                                      garages as seed-file JSON",
    "seed                                      create the demo garages",
    "help | quit",
];

/// One parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateGarage(usize),
    Add {
        vehicle: Vehicle,
        garage: Option<usize>,
    },
    Remove(String),
    Find(String),
    Query(VehicleQuery),
    Count,
    List,
    Json,
    Seed,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. `max_capacity` bounds the `garage` command.
    pub fn parse(line: &str, max_capacity: usize) -> Result<Self> {
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some((first, rest)) = args.split_first() else {
            return Err(GarageError::Validation("Empty command".into()));
        };

        match first.to_lowercase().as_str() {
            "garage" | "g" => {
                let capacity = single_arg(rest, "garage <capacity>")?;
                Ok(Command::CreateGarage(validate_capacity(capacity, max_capacity)?))
            }
            "add" | "park" => parse_add(rest),
            "remove" | "rm" => {
                let plate = single_arg(rest, "remove <plate>")?;
                Ok(Command::Remove(validate_plate_search(plate)?))
            }
            "find" | "search" => {
                let plate = single_arg(rest, "find <plate>")?;
                Ok(Command::Find(validate_plate_search(plate)?))
            }
            "query" | "q" => parse_query(rest).map(Command::Query),
            "count" | "types" => Ok(Command::Count),
            "list" | "ls" | "l" => Ok(Command::List),
            "json" => Ok(Command::Json),
            "seed" | "prepopulate" => Ok(Command::Seed),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(GarageError::Validation(format!(
                "Unknown command: '{}'. Type 'help' for available commands.",
                other
            ))),
        }
    }
}

fn single_arg<'a>(args: &[&'a str], usage: &str) -> Result<&'a str> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(GarageError::Validation(format!("Usage: {}", usage))),
    }
}

fn parse_add(args: &[&str]) -> Result<Command> {
    let usage = || {
        GarageError::Validation(
            "Usage: add <kind> <plate> <wheels> <color> <top_speed> <extra> [to <garage>]".into(),
        )
    };

    let (fields, garage) = match args {
        [fields @ .., to, garage] if to.eq_ignore_ascii_case("to") => {
            let garage = garage
                .parse::<usize>()
                .map_err(|_| GarageError::Validation(format!("Invalid garage number '{}'", garage)))?;
            (fields, Some(garage))
        }
        _ => (args, None),
    };

    let [kind, plate, wheels, color, top_speed, extra] = fields else {
        return Err(usage());
    };

    let kind: VehicleKind = kind.parse()?;
    if !is_valid_plate(plate) {
        return Err(GarageError::Validation(
            "Licence plate must be three capital letters followed by three digits.".into(),
        ));
    }
    let details = factory_for(kind).parse_details(extra)?;

    let vehicle = Vehicle::new(*plate, details)
        .with_wheels(validate_number_bounded(wheels, 0, MAX_WHEELS)?)
        .with_color(validate_color(color)?)
        .with_top_speed(validate_float_bounded(top_speed, 0.0, MAX_TOP_SPEED)?);

    Ok(Command::Add { vehicle, garage })
}

fn parse_query(args: &[&str]) -> Result<VehicleQuery> {
    let mut query = VehicleQuery::new();

    for arg in args {
        let (key, value) = arg.split_once('=').ok_or_else(|| {
            GarageError::Validation(format!("Expected key=value, got '{}'", arg))
        })?;

        query = match key.to_lowercase().as_str() {
            "kind" | "type" => query.with_kind(value.parse()?),
            "plate" => query.with_plate(validate_plate_search(value)?),
            "wheels" => query.with_wheels(validate_number_bounded(value, 0, MAX_WHEELS)?),
            "color" | "colour" => query.with_color(validate_color(value)?),
            "speed" | "top_speed" => {
                query.with_top_speed(validate_float_bounded(value, 0.0, MAX_TOP_SPEED)?)
            }
            other => {
                return Err(GarageError::Validation(format!(
                    "Unknown query field '{}'",
                    other
                )));
            }
        };
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{VehicleColor, VehicleDetails};

    #[test]
    fn test_parse_garage() {
        assert_eq!(Command::parse("garage 4", 10).unwrap(), Command::CreateGarage(4));
        assert!(Command::parse("garage 0", 10).is_err());
        assert!(Command::parse("garage 11", 10).is_err());
        assert!(Command::parse("garage", 10).is_err());
    }

    #[test]
    fn test_parse_add_with_target() {
        let command = Command::parse("add car ABC123 4 blue 150 4 to 1", 10).unwrap();
        let Command::Add { vehicle, garage } = command else {
            panic!("expected add");
        };
        assert_eq!(garage, Some(1));
        assert_eq!(vehicle.plate, "ABC123");
        assert_eq!(vehicle.color, VehicleColor::Blue);
        assert_eq!(vehicle.top_speed, 150.0);
        assert_eq!(vehicle.details, VehicleDetails::Car { doors: 4 });
    }

    #[test]
    fn test_parse_add_without_target() {
        let command = Command::parse("add boat BOA001 0 white 40 12.5", 10).unwrap();
        assert!(matches!(command, Command::Add { garage: None, .. }));
    }

    #[test]
    fn test_parse_add_rejects_bad_fields() {
        assert!(Command::parse("add car abc123 4 blue 150 4", 10).is_err());
        assert!(Command::parse("add truck ABC123 4 blue 150 4", 10).is_err());
        assert!(Command::parse("add car ABC123 4 purple 150 4", 10).is_err());
        assert!(Command::parse("add car ABC123 4 blue 150", 10).is_err());
        assert!(Command::parse("add car ABC123 4 blue 150 4 to x", 10).is_err());
    }

    #[test]
    fn test_parse_query() {
        let Command::Query(query) = Command::parse("query color=red kind=bus", 10).unwrap() else {
            panic!("expected query");
        };
        assert_eq!(
            query,
            VehicleQuery::new()
                .with_color(VehicleColor::Red)
                .with_kind(VehicleKind::Bus)
        );

        assert_eq!(
            Command::parse("query", 10).unwrap(),
            Command::Query(VehicleQuery::new())
        );
        assert!(Command::parse("query colour", 10).is_err());
        assert!(Command::parse("query doors=4", 10).is_err());
    }

    #[test]
    fn test_lookup_plates_are_normalized() {
        assert_eq!(
            Command::parse("find car123", 10).unwrap(),
            Command::Find("CAR123".into())
        );
        assert_eq!(
            Command::parse("RM car123", 10).unwrap(),
            Command::Remove("CAR123".into())
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::parse("fly away", 10).unwrap_err();
        assert!(err.to_string().contains("Unknown command"));
        assert!(Command::parse("   ", 10).is_err());
    }
}
