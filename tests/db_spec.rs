use airops::db::{Database, Insertion};
use airops::error::*;
use airops::models::*;
use speculate2::speculate;

/// Flight 1 with a plane of 10 economic and 5 business seats.
fn seed_plane(db: &mut Database) {
    db.add_flight(Flight::new(1).expect("valid flight"));
    db.add_plane(Plane::new(1, 10, 5, "lot").expect("valid plane"))
        .expect("Failed to add plane");
}

fn ticket(id: &str, class: &str, seat: u32) -> Ticket {
    Ticket::new(id, 1, class, seat, 3).expect("valid ticket")
}

fn seed_passenger(db: &mut Database, id: &str, seat: u32) -> Ticket {
    let ticket = ticket(id, "economic", seat);
    db.add_ticket(ticket.clone()).expect("Failed to add ticket");
    db.add_passenger(Passenger::new("Jan", "Kowalski", id).expect("valid passenger"))
        .expect("Failed to add passenger");
    ticket
}

speculate! {
    before {
        let mut db = Database::new();
    }

    describe "flights" {
        it "stores a new flight" {
            let result = db.add_flight(Flight::new(7).unwrap());
            assert_eq!(result, Insertion::Inserted);
            assert_eq!(result.rejected(), 0);
            assert!(db.find_flight(7).is_some());
        }

        it "skips a duplicate plane number" {
            db.add_flight(Flight::new(7).unwrap());
            let result = db.add_flight(Flight::new(7).unwrap());
            assert_eq!(result, Insertion::Duplicate);
            assert_eq!(result.rejected(), 1);
            assert_eq!(db.flights().len(), 1);
        }

        it "lists flights in plane number order" {
            for n in [3, 1, 2] {
                db.add_flight(Flight::new(n).unwrap());
            }
            let numbers: Vec<u32> = db.flights().keys().copied().collect();
            assert_eq!(numbers, vec![1, 2, 3]);
        }
    }

    describe "planes" {
        it "requires its flight" {
            let err = db.add_plane(Plane::new(4, 10, 5, "lot").unwrap()).unwrap_err();
            assert_eq!(err, AddError::MissingFlightReference(4));
            assert!(db.planes().is_empty());
        }

        it "stores a plane with all seats free" {
            seed_plane(&mut db);
            let plane = db.find_plane(1).unwrap();
            assert_eq!(plane.carrier(), "LOT");
            assert_eq!(plane.free_seats(SeatClass::Economic), 10);
            assert_eq!(plane.free_seats(SeatClass::Business), 5);
            assert!(plane.assistance().is_empty());
        }

        it "reports a duplicate before a missing flight" {
            seed_plane(&mut db);
            let result = db.add_plane(Plane::new(1, 99, 9, "other").unwrap()).unwrap();
            assert_eq!(result, Insertion::Duplicate);
            assert_eq!(db.find_plane(1).unwrap().economic_seats_number(), 10);
        }
    }

    describe "tickets" {
        before {
            seed_plane(&mut db);
        }

        it "books the seat when added" {
            let result = db.add_ticket(ticket("A1", "economic", 4)).unwrap();
            assert_eq!(result, Insertion::Inserted);
            let plane = db.find_plane(1).unwrap();
            assert_eq!(plane.seat_state(SeatClass::Economic, 4), Some(SeatState::Occupied));
            assert_eq!(plane.seat_state(SeatClass::Business, 4), Some(SeatState::Free));
        }

        it "rejects an occupied seat and stores nothing" {
            db.add_ticket(ticket("A1", "economic", 4)).unwrap();
            let err = db.add_ticket(ticket("A2", "economic", 4)).unwrap_err();
            assert_eq!(
                err,
                AddError::Booking(BookingError::SeatOccupied { class: SeatClass::Economic, seat: 4 })
            );
            assert!(db.find_ticket("A2").is_none());
        }

        it "allows the same seat number in the other class" {
            db.add_ticket(ticket("A1", "economic", 4)).unwrap();
            assert!(db.add_ticket(ticket("A2", "business", 4)).is_ok());
        }

        it "rejects a seat beyond the plane's capacity" {
            let err = db.add_ticket(ticket("A1", "business", 6)).unwrap_err();
            assert!(matches!(
                err,
                AddError::Booking(BookingError::InvalidSeatNumber { seat: 6, capacity: 5, .. })
            ));
            assert!(db.tickets().is_empty());
        }

        it "requires its flight" {
            let orphan = Ticket::new("A1", 9, "economic", 1, 1).unwrap();
            assert_eq!(db.add_ticket(orphan).unwrap_err(), AddError::MissingFlightReference(9));
        }

        it "fails when the flight has no plane" {
            db.add_flight(Flight::new(2).unwrap());
            let ticket = Ticket::new("A1", 2, "economic", 1, 1).unwrap();
            assert_eq!(
                db.add_ticket(ticket).unwrap_err(),
                AddError::Booking(BookingError::UnknownPlane(2))
            );
        }

        it "skips a duplicate id without touching seats" {
            db.add_ticket(ticket("A1", "economic", 4)).unwrap();
            let result = db.add_ticket(ticket("A1", "economic", 5)).unwrap();
            assert_eq!(result, Insertion::Duplicate);
            let plane = db.find_plane(1).unwrap();
            assert_eq!(plane.seat_state(SeatClass::Economic, 5), Some(SeatState::Free));
        }
    }

    describe "seat release" {
        before {
            seed_plane(&mut db);
        }

        it "frees an occupied seat" {
            let ticket = ticket("A1", "economic", 4);
            db.add_ticket(ticket.clone()).unwrap();
            db.release_seat(&ticket).unwrap();
            let plane = db.find_plane(1).unwrap();
            assert_eq!(plane.seat_state(SeatClass::Economic, 4), Some(SeatState::Free));
        }

        it "is a no-op on a free seat" {
            assert!(db.release_seat(&ticket("A1", "economic", 4)).is_ok());
        }

        it "rejects a seat out of range" {
            let err = db.release_seat(&ticket("A1", "business", 50)).unwrap_err();
            assert!(matches!(err, BookingError::InvalidSeatNumber { .. }));
        }
    }

    describe "change_seat" {
        before {
            seed_plane(&mut db);
            db.add_ticket(ticket("A1", "economic", 4)).unwrap();
        }

        it "moves the ticket and frees the old seat" {
            db.change_seat("A1", "business", 2).unwrap();

            let moved = db.find_ticket("A1").unwrap();
            assert_eq!(moved.seat_class(), SeatClass::Business);
            assert_eq!(moved.seat_number(), 2);

            let plane = db.find_plane(1).unwrap();
            assert_eq!(plane.seat_state(SeatClass::Economic, 4), Some(SeatState::Free));
            assert_eq!(plane.seat_state(SeatClass::Business, 2), Some(SeatState::Occupied));
        }

        it "leaves everything untouched when the new seat is taken" {
            db.add_ticket(ticket("A2", "economic", 5)).unwrap();
            let err = db.change_seat("A1", "economic", 5).unwrap_err();
            assert!(matches!(err, ChangeSeatError::Booking(BookingError::SeatOccupied { .. })));

            assert_eq!(db.find_ticket("A1").unwrap().seat_number(), 4);
            let plane = db.find_plane(1).unwrap();
            assert_eq!(plane.seat_state(SeatClass::Economic, 4), Some(SeatState::Occupied));
        }

        it "validates the requested seat" {
            assert_eq!(
                db.change_seat("A1", "first", 1).unwrap_err(),
                ChangeSeatError::Validation(ValidationError::InvalidSeatClass)
            );
            assert_eq!(
                db.change_seat("A1", "economic", 0).unwrap_err(),
                ChangeSeatError::Validation(ValidationError::InvalidSeatNumber)
            );
        }

        it "rejects an unknown ticket" {
            assert_eq!(
                db.change_seat("nope", "economic", 1).unwrap_err(),
                ChangeSeatError::UnknownTicket("nope".to_string())
            );
        }
    }

    describe "passengers" {
        before {
            seed_plane(&mut db);
        }

        it "requires its ticket" {
            let err = db
                .add_passenger(Passenger::new("Jan", "Kowalski", "A1").unwrap())
                .unwrap_err();
            assert_eq!(err, AddError::MissingTicketReference("A1".to_string()));
        }

        it "skips a second passenger on the same ticket" {
            seed_passenger(&mut db, "A1", 1);
            let result = db
                .add_passenger(Passenger::new("Anna", "Nowak", "A1").unwrap())
                .unwrap();
            assert_eq!(result, Insertion::Duplicate);
            assert_eq!(db.find_passenger("A1").unwrap().first_name(), "Jan");
        }
    }

    describe "assistance" {
        before {
            seed_plane(&mut db);
        }

        it "assigns up to three assistants per plane" {
            let tickets: Vec<Ticket> =
                (1..=4).map(|n| seed_passenger(&mut db, &format!("T{}", n), n)).collect();

            for t in &tickets[..3] {
                db.ask_for_assistance(t).unwrap();
            }
            assert_eq!(
                db.ask_for_assistance(&tickets[3]).unwrap_err(),
                AssistanceError::AllAssistantsBusy
            );
            assert_eq!(db.find_plane(1).unwrap().assistance().len(), ASSISTANT_COUNT);

            db.thank_for_assistance(&tickets[0]).unwrap();
            assert!(db.ask_for_assistance(&tickets[3]).is_ok());
        }

        it "refuses a second request from the same passenger" {
            let t = seed_passenger(&mut db, "A1", 1);
            db.ask_for_assistance(&t).unwrap();
            assert_eq!(
                db.ask_for_assistance(&t).unwrap_err(),
                AssistanceError::AlreadyRequested("A1".to_string())
            );
        }

        it "refuses a repeat request even when all assistants are busy" {
            let tickets: Vec<Ticket> =
                (1..=3).map(|n| seed_passenger(&mut db, &format!("T{}", n), n)).collect();
            for t in &tickets {
                db.ask_for_assistance(t).unwrap();
            }
            assert_eq!(
                db.ask_for_assistance(&tickets[0]).unwrap_err(),
                AssistanceError::AlreadyRequested("T1".to_string())
            );
        }

        it "serves a passenger whose ticket id is only whitespace" {
            let t = seed_passenger(&mut db, " ", 1);
            assert!(db.find_ticket(" ").is_some());
            db.ask_for_assistance(&t).unwrap();
            assert!(db.find_plane(1).unwrap().assistance().contains(" "));
            db.thank_for_assistance(&t).unwrap();
        }

        it "refuses an unregistered ticket" {
            let t = ticket("ghost", "economic", 1);
            assert_eq!(
                db.ask_for_assistance(&t).unwrap_err(),
                AssistanceError::UnknownPassenger("ghost".to_string())
            );
        }

        it "checks the plane first" {
            let t = Ticket::new("A1", 8, "economic", 1, 1).unwrap();
            assert_eq!(db.ask_for_assistance(&t).unwrap_err(), AssistanceError::UnknownPlane(8));
        }

        it "fails to dismiss an assistant that was never requested" {
            let t = seed_passenger(&mut db, "A1", 1);
            assert_eq!(
                db.thank_for_assistance(&t).unwrap_err(),
                AssistanceError::NotRequested("A1".to_string())
            );
        }
    }

    describe "lookups" {
        before {
            seed_plane(&mut db);
        }

        it "joins ticket and passenger into a boarding pass" {
            seed_passenger(&mut db, "A1", 7);
            let pass = db.boarding_pass("A1").unwrap();
            assert_eq!(pass.first_name, "Jan");
            assert_eq!(pass.seat_class, SeatClass::Economic);
            assert_eq!(pass.seat_number, 7);
            assert_eq!(pass.gate_number, 3);
        }

        it "needs a passenger for a boarding pass" {
            db.add_ticket(ticket("A1", "economic", 1)).unwrap();
            assert_eq!(
                db.boarding_pass("A1").unwrap_err(),
                LookupError::UnknownPassenger("A1".to_string())
            );
            assert_eq!(db.departure_gate("A1").unwrap(), 3);
        }

        it "reports unknown keys" {
            assert_eq!(
                db.departure_gate("nope").unwrap_err(),
                LookupError::UnknownTicket("nope".to_string())
            );
            assert_eq!(db.flight_parameters(9).unwrap_err(), LookupError::UnknownPlane(9));
        }

        it "classifies the plane" {
            let params = db.flight_parameters(1).unwrap();
            assert_eq!(params.kind, PlaneKind::Continental);
            assert_eq!(params.carrier, "LOT");
            assert_eq!(params.business_seats_number, 5);
        }
    }

    describe "end to end" {
        it "registers a passenger and refuses their seat to another ticket" {
            db.add_flight(Flight::new(1).unwrap());
            db.add_plane(Plane::new(1, 200, 50, "lot").unwrap()).unwrap();
            assert_eq!(db.find_plane(1).unwrap().carrier(), "LOT");

            db.add_ticket(Ticket::new("5", 1, "economic", 10, 2).unwrap()).unwrap();
            let plane = db.find_plane(1).unwrap();
            assert_eq!(plane.seat_state(SeatClass::Economic, 10), Some(SeatState::Occupied));

            db.add_passenger(Passenger::new("Jan", "Kowalski", "5").unwrap()).unwrap();
            let err = db.add_ticket(Ticket::new("6", 1, "economic", 10, 2).unwrap()).unwrap_err();
            assert!(matches!(err, AddError::Booking(BookingError::SeatOccupied { .. })));
        }

        it "rebooks a released seat" {
            seed_plane(&mut db);
            let first = ticket("A1", "economic", 4);
            db.add_ticket(first.clone()).unwrap();
            db.release_seat(&first).unwrap();
            assert!(db.add_ticket(ticket("A2", "economic", 4)).is_ok());
        }

        it "books, moves and assists a passenger" {
            db.add_flight(Flight::new(1).unwrap());
            db.add_plane(Plane::new(1, 150, 20, "lot").unwrap()).unwrap();
            db.add_ticket(Ticket::new("X", 1, "economic", 10, 2).unwrap()).unwrap();
            db.add_passenger(Passenger::new("Jan", "Kowalski", "X").unwrap()).unwrap();

            db.change_seat("X", "business", 1).unwrap();
            let ticket = db.find_ticket("X").unwrap().clone();
            db.ask_for_assistance(&ticket).unwrap();

            let plane = db.find_plane(1).unwrap();
            assert_eq!(plane.kind(), PlaneKind::NarrowBody);
            assert_eq!(plane.free_seats(SeatClass::Economic), 150);
            assert_eq!(plane.free_seats(SeatClass::Business), 19);
            assert!(plane.assistance().contains("X"));
            assert_eq!(
                ticket.to_string(),
                "Ticket: id: X, plane number: 1, seat class: business, seat number: 1, gate number: 2"
            );
        }
    }
}
