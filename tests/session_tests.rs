/// Scripted sessions against the menu console and the command shell
///
/// Run with: cargo test --test session_tests

use garagedb::console::MenuConsole;
use garagedb::input::Prompter;
use garagedb::shell::{Outcome, Shell};
use garagedb::{GarageError, GarageHandler, VehicleColor, VehicleKind};
use std::io::Cursor;

fn run_console(handler: GarageHandler, script: &str) -> (GarageHandler, String) {
    let prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut console = MenuConsole::new(handler, prompter);
    console.run().unwrap();
    let (handler, prompter) = console.into_parts();
    (handler, String::from_utf8(prompter.into_inner().1).unwrap())
}

fn lines(outcome: Outcome) -> Vec<String> {
    match outcome {
        Outcome::Output(lines) => lines,
        Outcome::Quit => panic!("shell quit unexpectedly"),
    }
}

#[test]
fn test_console_add_garage_and_vehicle() {
    // garage of 2; add a red car NEW123 into it; list; exit
    let script = "1\n2\n2\n0\nNEW123\n4\n3\n120\n4\n0\n6\n0\n";
    let (handler, out) = run_console(GarageHandler::new(), script);

    assert!(out.contains("New garage with capacity 2 created."));
    assert!(out.contains("Added Car to Garage with capacity = 2, #stored = 1"));
    assert!(out.contains("Car plate=NEW123 wheels=4 color=Red top_speed=120 doors=4"));

    let stored = handler.find_vehicle("new123").unwrap().item;
    assert_eq!(stored.color, VehicleColor::Red);
}

#[test]
fn test_console_retries_bad_input() {
    // capacity "abc" then 0 then 3
    let script = "1\nabc\n0\n3\n0\n";
    let (handler, out) = run_console(GarageHandler::new(), script);

    assert!(out.contains("Must be able to read as number"));
    assert_eq!(handler.garage(0).unwrap().capacity(), 3);
}

#[test]
fn test_console_search_and_remove() {
    let script = "8\n4\nghi789\n3\nGHI789\n4\nGHI789\n0\n";
    let (handler, out) = run_console(GarageHandler::new(), script);

    assert!(out.contains("Found in garage #0: Garage with capacity = 4, #stored = 2"));
    assert!(out.contains("Removed vehicle with licence plate GHI789"));
    assert!(out.contains("Cannot find vehicle 'GHI789'"));
    assert_eq!(handler.vehicle_count(), 2);
}

#[test]
fn test_console_lists_types() {
    let (_, out) = run_console(GarageHandler::new(), "8\n7\n0\n");
    assert!(out.contains(
        "Vehicle types (#): Car (3), Bus (0), Boat (0), Motorcycle (0), Airplane (0)"
    ));
}

#[test]
fn test_shell_session() {
    let mut shell = Shell::new(GarageHandler::new().with_max_capacity(20));

    lines(shell.run_line("garage 1").unwrap());
    lines(shell.run_line("garage 3").unwrap());
    lines(shell.run_line("add car ABC123 4 blue 150 4").unwrap());
    lines(shell.run_line("add bus BUS001 6 red 90 40").unwrap());

    let err = shell.run_line("add boat ABC123 0 white 40 8 to 1").unwrap_err();
    assert_eq!(err, GarageError::DuplicateKey("ABC123".into()));

    let err = shell.run_line("add boat SEA001 0 white 40 8 to 0").unwrap_err();
    assert_eq!(err, GarageError::CollectionFull { capacity: 1 });

    let err = shell.run_line("garage 21").unwrap_err();
    assert!(matches!(err, GarageError::Validation(_)));

    let found = lines(shell.run_line("query kind=bus color=red").unwrap());
    assert_eq!(found[0], "1 vehicle(s) matching kind=Bus color=Red");

    let listing = lines(shell.run_line("list").unwrap());
    assert_eq!(listing[0], "Garages:");
    assert_eq!(listing.len(), 5);

    let json = lines(shell.run_line("json").unwrap()).join("\n");
    assert!(json.contains("\"plate\": \"BUS001\""));

    assert_eq!(shell.run_line("quit").unwrap(), Outcome::Quit);

    let handler = shell.into_handler();
    assert_eq!(handler.count_all_types()[&VehicleKind::Bus], 1);
}

#[test]
fn test_console_survives_rejected_prepopulate() {
    // pre-populate fails under a ceiling of 5; list types; exit
    let (handler, out) = run_console(GarageHandler::new().with_max_capacity(5), "8\n7\n0\n");

    assert!(out.contains("Invalid garage capacity: 10"));
    assert!(out.contains("Vehicle types (#): Car (0)"));
    assert_eq!(handler.garage_count(), 0);
}
