use std::fs;
use std::io::Cursor;

use airops::console::{menu_text, Console, MenuOption};
use airops::db::{DataFiles, Database};
use airops::models::*;
use speculate2::speculate;
use tempfile::TempDir;

/// Runs a console session over `script` and returns the store and transcript.
fn run(db: Database, files: &DataFiles, script: &str) -> (Database, String) {
    let mut console = Console::new(db, files.clone(), Cursor::new(script.to_string()), Vec::new());
    console.run().expect("console failed");
    let (db, output) = console.into_parts();
    (db, String::from_utf8(output).expect("output is not UTF-8"))
}

fn seeded() -> Database {
    let mut db = Database::new();
    db.add_flight(Flight::new(1).unwrap());
    db.add_plane(Plane::new(1, 10, 5, "lot").unwrap()).unwrap();
    db.add_ticket(Ticket::new("A", 1, "economic", 1, 4).unwrap()).unwrap();
    db.add_passenger(Passenger::new("Jan", "Kowalski", "A").unwrap()).unwrap();
    db
}

speculate! {
    before {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let files = DataFiles::in_dir(dir.path());
    }

    describe "menu" {
        it "numbers every option from zero" {
            let text = menu_text();
            assert!(text.starts_with("Choose option - type number 0-15\n"));
            assert!(text.contains("0. Add data from predefined files\n"));
            assert!(text.contains("15. Exit\n"));
            assert_eq!(MenuOption::from_input(" 9 "), Some(MenuOption::BoardingPass));
            assert_eq!(MenuOption::from_input("16"), None);
            assert_eq!(MenuOption::from_input("x"), None);
        }

        it "greets and says goodbye" {
            let (_, out) = run(Database::new(), &files, "15\n");
            assert!(out.starts_with("Hello there!\n"));
            assert!(out.ends_with("Goodbye!\n"));
        }

        it "ends the session when input closes" {
            let (_, out) = run(Database::new(), &files, "1\n");
            assert!(out.contains("Enter plane number: "));
            assert!(out.ends_with("Goodbye!\n"));
        }

        it "rejects an unknown option" {
            let (_, out) = run(Database::new(), &files, "42\n15\n");
            assert!(out.contains("Invalid option.\n"));
        }
    }

    describe "adding records" {
        it "adds a flight and a plane" {
            let (db, out) = run(Database::new(), &files, "1\n7\n2\n7\n120\n12\nlot\n15\n");
            assert!(out.contains("Flight data added.\n"));
            assert!(out.contains("Plane data added.\n"));
            assert_eq!(db.find_plane(7).unwrap().carrier(), "LOT");
        }

        it "reports a duplicate flight" {
            let (_, out) = run(seeded(), &files, "1\n1\n15\n");
            assert!(out.contains("Flight data with such key already exists in the database.\n"));
        }

        it "reports an occupied seat" {
            let (db, out) = run(seeded(), &files, "3\nB\n1\neconomic\n1\n4\n15\n");
            assert!(out.contains("Chosen seat is occupied.\nPlease choose another seat.\n"));
            assert!(db.find_ticket("B").is_none());
        }

        it "rejects a non-numeric answer" {
            let (db, out) = run(Database::new(), &files, "1\nseven\n15\n");
            assert!(out.contains("Invalid value."));
            assert!(db.flights().is_empty());
        }
    }

    describe "queries" {
        it "shows stored records" {
            let (_, out) = run(seeded(), &files, "8\n15\n");
            assert!(out.contains("Passenger: Jan Kowalski, ticket id number: A\n"));
        }

        it "says when there is nothing to show" {
            let (_, out) = run(Database::new(), &files, "5\n15\n");
            assert!(out.contains("No flights in the database.\n"));
        }

        it "prints a boarding pass" {
            let (_, out) = run(seeded(), &files, "9\nA\n15\n");
            assert!(out.contains("| last name    |    Kowalski |"));
        }

        it "prints the departure gate" {
            let (_, out) = run(seeded(), &files, "13\nA\n15\n");
            assert!(out.contains("| gate number |          4 |"));
        }

        it "prints the flight parameters" {
            let (_, out) = run(seeded(), &files, "14\n1\n15\n");
            assert!(out.contains("continental |"));
        }
    }

    describe "seats and assistance" {
        it "changes a seat" {
            let (db, out) = run(seeded(), &files, "10\nA\nbusiness\n3\n15\n");
            assert!(out.contains("Seat changed successfully.\n"));
            assert_eq!(db.find_ticket("A").unwrap().seat_class(), SeatClass::Business);
        }

        it "asks for and thanks an assistant" {
            let (db, out) = run(seeded(), &files, "11\nA\n12\nA\n15\n");
            assert!(out.contains("Assistant will take care of the Passenger's needs.\n"));
            assert!(out.contains("Assistant has been released.\n"));
            assert!(db.find_plane(1).unwrap().assistance().is_empty());
        }

        it "refuses an unknown ticket" {
            let (_, out) = run(seeded(), &files, "11\nZ\n15\n");
            assert!(out.contains("Chosen ticket id does not exist in the Database.\n"));
        }
    }

    describe "loading files" {
        it "loads the data directory" {
            fs::write(&files.flights, "plane_number\n1\n").unwrap();
            fs::write(
                &files.planes,
                "plane_number,economic_seats_number,business_seats_number,carrier\n1,10,5,lot\n",
            )
            .unwrap();
            fs::write(&files.tickets, "ticket_id,plane_number,seat_class,seat_number,gate_number\n").unwrap();
            fs::write(&files.passengers, "first_name,last_name,ticket_id\n").unwrap();

            let (db, out) = run(Database::new(), &files, "0\n15\n");
            assert!(out.contains("Database loaded successfully.\n"));
            assert!(db.find_plane(1).is_some());
        }

        it "reports missing files" {
            let (_, out) = run(Database::new(), &files, "0\n15\n");
            assert!(out.contains(&format!("File: {} cannot be found.", files.flights.display())));
            assert!(!out.contains("Database loaded successfully."));
        }
    }
}
