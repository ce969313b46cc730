//! Numbered-menu console front end.
//!
//! Every question goes through [`Prompter`], so bad input is reported and
//! asked again; handler rejections (duplicate plate, full garage, unknown
//! plate) are printed and the main menu comes back.

use crate::core::{GarageError, Result};
use crate::facade::GarageHandler;
use crate::factory::{MAX_TOP_SPEED, MAX_WHEELS, available_factories, create_vehicle};
use crate::input::{
    Prompter, validate_capacity, validate_float_bounded, validate_number_bounded,
    validate_plate_search,
};
use crate::shell::format_type_counts;
use crate::vehicle::{VehicleKind, VehicleQuery};
use log::{debug, warn};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Exit,
    AddGarage,
    AddVehicle,
    RemoveVehicle,
    SearchVehicle,
    QueryVehicles,
    ListParked,
    ListTypes,
    Prepopulate,
}

const MAIN_MENU: [(&str, MenuAction); 9] = [
    ("Exit", MenuAction::Exit),
    ("Add garage", MenuAction::AddGarage),
    ("Add vehicle", MenuAction::AddVehicle),
    ("Remove vehicle", MenuAction::RemoveVehicle),
    ("Search for vehicle", MenuAction::SearchVehicle),
    ("Query vehicles by properties", MenuAction::QueryVehicles),
    ("List parked vehicles (& garages)", MenuAction::ListParked),
    ("List vehicle types", MenuAction::ListTypes),
    ("Pre-populate garages", MenuAction::Prepopulate),
];

#[derive(Debug, Clone, Copy)]
enum QueryField {
    Done,
    Kind,
    Plate,
    Wheels,
    Color,
    TopSpeed,
    Clear,
}

const QUERY_MENU: [(&str, QueryField); 7] = [
    ("Run query", QueryField::Done),
    ("Vehicle type", QueryField::Kind),
    ("Licence plate", QueryField::Plate),
    ("Wheels", QueryField::Wheels),
    ("Color", QueryField::Color),
    ("Top speed", QueryField::TopSpeed),
    ("Clear criteria", QueryField::Clear),
];

pub struct MenuConsole<R, W> {
    handler: GarageHandler,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> MenuConsole<R, W> {
    pub fn new(handler: GarageHandler, prompter: Prompter<R, W>) -> Self {
        Self { handler, prompter }
    }

    pub fn handler(&self) -> &GarageHandler {
        &self.handler
    }

    pub fn into_parts(self) -> (GarageHandler, Prompter<R, W>) {
        (self.handler, self.prompter)
    }

    /// Main loop. Returns when the user picks Exit or input runs out.
    ///
    /// Rejected actions are printed and the menu comes back; only output
    /// failures end the session with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(GarageError::InputClosed) => {
                    debug!("Console input closed");
                    return Ok(());
                }
                Err(err @ GarageError::Io(_)) => return Err(err),
                Err(err) => {
                    warn!("Menu action failed: {}", err);
                    self.prompter.say(err)?;
                }
            }
        }
    }

    fn step(&mut self) -> Result<bool> {
        self.prompter.say("")?;
        let action = *self.prompter.select_from_menu("action", &MAIN_MENU)?;
        self.prompter.say("")?;

        match action {
            MenuAction::Exit => return Ok(false),
            MenuAction::AddGarage => self.add_garage()?,
            MenuAction::AddVehicle => self.add_vehicle()?,
            MenuAction::RemoveVehicle => self.remove_vehicle()?,
            MenuAction::SearchVehicle => self.search_vehicle()?,
            MenuAction::QueryVehicles => self.query_vehicles()?,
            MenuAction::ListParked => {
                let contents = self.handler.list_contents();
                self.prompter.say(contents)?;
            }
            MenuAction::ListTypes => {
                let counts = format_type_counts(&self.handler);
                self.prompter.say(counts)?;
            }
            MenuAction::Prepopulate => {
                for line in self.handler.prepopulate()? {
                    self.prompter.say(line)?;
                }
            }
        }
        Ok(true)
    }

    fn add_garage(&mut self) -> Result<()> {
        let max = self.handler.max_capacity();
        let capacity = self
            .prompter
            .retrieve_input("Capacity: ", |s| validate_capacity(s, max))?;

        self.handler.create_garage(capacity)?;
        self.prompter
            .say(format_args!("New garage with capacity {} created. Garages:", capacity))?;
        for garage in self.handler.garages() {
            self.prompter.say(garage.short_description())?;
        }
        Ok(())
    }

    fn add_vehicle(&mut self) -> Result<()> {
        if self.handler.garage_count() == 0 {
            return self.prompter.say("Create a garage first!");
        }

        let factories: Vec<_> = available_factories()
            .into_iter()
            .map(|factory| (factory.description(), factory))
            .collect();
        let factory = self.prompter.select_from_menu("vehicle type", &factories)?;
        let vehicle = create_vehicle(factory.as_ref(), &mut self.prompter, &self.handler)?;

        self.prompter.say("Vehicle details:")?;
        self.prompter.say(&vehicle)?;

        let garages: Vec<(String, usize)> = self
            .handler
            .garages()
            .iter()
            .enumerate()
            .map(|(index, garage)| (garage.short_description(), index))
            .collect();
        let target = *self.prompter.select_from_menu("garage", &garages)?;

        let kind = vehicle.kind();
        let message = match self.handler.add_vehicle(vehicle, target).map(|_| ()) {
            Ok(()) => format!(
                "Added {} to {}",
                kind,
                self.handler.garage(target)?.short_description()
            ),
            Err(err) => err.to_string(),
        };
        self.prompter.say(message)
    }

    fn remove_vehicle(&mut self) -> Result<()> {
        let plate = self
            .prompter
            .retrieve_input("Licence plate: ", validate_plate_search)?;

        let message = if self.handler.remove_vehicle(&plate) {
            format!("Removed vehicle with licence plate {}", plate)
        } else {
            "Could not find vehicle".to_string()
        };
        self.prompter.say(message)
    }

    fn search_vehicle(&mut self) -> Result<()> {
        self.prompter
            .say("Enter licence plate to search for (format 'ABC123', not case sensitive)")?;
        let plate = self
            .prompter
            .retrieve_input("Plate number: ", validate_plate_search)?;

        match self.handler.find_vehicle(&plate) {
            Ok(found) => {
                self.prompter.say("Found vehicle!")?;
                self.prompter.say(format_args!("Vehicle: {}", found.item))?;
                self.prompter.say(format_args!(
                    "Found in garage #{}: {}",
                    found.index,
                    found.collection.short_description()
                ))
            }
            Err(err) => self.prompter.say(err),
        }
    }

    fn query_vehicles(&mut self) -> Result<()> {
        let mut query = VehicleQuery::new();

        loop {
            self.prompter.say(format_args!("Criteria: {}", query))?;
            let field = *self.prompter.select_from_menu("criterion", &QUERY_MENU)?;
            query = match field {
                QueryField::Done => break,
                QueryField::Clear => VehicleQuery::new(),
                QueryField::Kind => {
                    let kinds = VehicleKind::ALL.map(|kind| (kind, kind));
                    let kind = *self.prompter.select_from_menu("vehicle type", &kinds)?;
                    query.with_kind(kind)
                }
                QueryField::Plate => {
                    let plate = self
                        .prompter
                        .retrieve_input("Licence plate: ", validate_plate_search)?;
                    query.with_plate(plate)
                }
                QueryField::Wheels => {
                    let wheels = self.prompter.retrieve_input("Wheels: ", |s| {
                        validate_number_bounded(s, 0, MAX_WHEELS)
                    })?;
                    query.with_wheels(wheels)
                }
                QueryField::Color => query.with_color(self.prompter.select_color()?),
                QueryField::TopSpeed => {
                    let speed = self.prompter.retrieve_input("Top speed: ", |s| {
                        validate_float_bounded(s, 0.0, MAX_TOP_SPEED)
                    })?;
                    query.with_top_speed(speed)
                }
            };
        }

        let matches = self.handler.query_vehicles(&query);
        self.prompter
            .say(format_args!("{} vehicle(s) matching {}", matches.len(), query))?;
        for vehicle in matches {
            self.prompter.say(format_args!("    {}", vehicle))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(handler: GarageHandler, script: &str) -> (GarageHandler, String) {
        let prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut console = MenuConsole::new(handler, prompter);
        console.run().unwrap();
        let (handler, prompter) = console.into_parts();
        (handler, String::from_utf8(prompter.into_inner().1).unwrap())
    }

    #[test]
    fn test_exit_immediately() {
        let (handler, out) = run_script(GarageHandler::new(), "0\n");
        assert_eq!(handler.garage_count(), 0);
        assert!(out.contains("Select action"));
        assert!(out.contains("8. Pre-populate garages"));
    }

    #[test]
    fn test_closed_input_ends_session() {
        let (handler, _) = run_script(GarageHandler::new(), "1\n3\n");
        assert_eq!(handler.garage_count(), 1);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_is_reported() {
        let prompter = Prompter::new(Cursor::new(b"0\n".to_vec()), BrokenPipe);
        let mut console = MenuConsole::new(GarageHandler::new(), prompter);
        assert!(matches!(console.run(), Err(GarageError::Io(_))));
    }

    #[test]
    fn test_rejected_action_returns_to_menu() {
        let handler = GarageHandler::new().with_max_capacity(5);
        let (handler, out) = run_script(handler, "8\n6\n0\n");
        assert!(out.contains("Invalid garage capacity: 10"));
        assert!(out.contains("Garages:"));
        assert_eq!(handler.garage_count(), 0);
    }

    #[test]
    fn test_add_vehicle_without_garage() {
        let (_, out) = run_script(GarageHandler::new(), "2\n0\n");
        assert!(out.contains("Create a garage first!"));
    }

    #[test]
    fn test_query_menu() {
        // pre-populate, query: type=Car, color=Black (index 0), run, exit
        let script = "8\n5\n1\n0\n4\n0\n0\n0\n";
        let (_, out) = run_script(GarageHandler::new(), script);
        assert!(out.contains("1 vehicle(s) matching kind=Car color=Black"));
        assert!(out.contains("    Car plate=DEF456"));
    }
}
