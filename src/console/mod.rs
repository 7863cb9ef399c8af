//! Interactive numbered menu over the record store.
//!
//! The console works on any `BufRead`/`Write` pair so it can be driven from a
//! terminal or from a script. Closing the input ends the session.

mod messages;

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::db::{DataFiles, Database, Insertion};
use crate::models::*;
use crate::render;

#[derive(Debug, Error)]
enum ConsoleError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("input closed")]
    Eof,
}

type Step = Result<(), ConsoleError>;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    LoadFiles,
    AddFlight,
    AddPlane,
    AddTicket,
    AddPassenger,
    ShowFlights,
    ShowPlanes,
    ShowTickets,
    ShowPassengers,
    BoardingPass,
    ChangeSeat,
    AskForAssistance,
    ThankAssistant,
    DepartureGate,
    FlightParameters,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 16] = [
        Self::LoadFiles,
        Self::AddFlight,
        Self::AddPlane,
        Self::AddTicket,
        Self::AddPassenger,
        Self::ShowFlights,
        Self::ShowPlanes,
        Self::ShowTickets,
        Self::ShowPassengers,
        Self::BoardingPass,
        Self::ChangeSeat,
        Self::AskForAssistance,
        Self::ThankAssistant,
        Self::DepartureGate,
        Self::FlightParameters,
        Self::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::LoadFiles => "Add data from predefined files",
            Self::AddFlight => "Add new flight",
            Self::AddPlane => "Add new plane",
            Self::AddTicket => "Add new ticket",
            Self::AddPassenger => "Add new passenger",
            Self::ShowFlights => "Show existing flights",
            Self::ShowPlanes => "Show existing planes",
            Self::ShowTickets => "Show existing tickets",
            Self::ShowPassengers => "Show existing passengers",
            Self::BoardingPass => "Print boarding pass",
            Self::ChangeSeat => "Change passenger seat",
            Self::AskForAssistance => "Ask for assistant",
            Self::ThankAssistant => "Thank assistant for help",
            Self::DepartureGate => "Check departure gate",
            Self::FlightParameters => "Check flight parameters",
            Self::Exit => "Exit",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

pub fn menu_text() -> String {
    let mut text = format!(
        "Choose option - type number 0-{}\n",
        MenuOption::ALL.len() - 1
    );
    for (i, option) in MenuOption::ALL.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i, option.label()));
    }
    text.push_str("If you want to close the program instantly please enter Ctrl + D");
    text
}

pub struct Console<R, W> {
    db: Database,
    files: DataFiles,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(db: Database, files: DataFiles, input: R, output: W) -> Self {
        Self {
            db,
            files,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (Database, W) {
        (self.db, self.output)
    }

    /// Runs the menu loop until the user exits or the input is closed.
    pub fn run(&mut self) -> io::Result<()> {
        self.say("Hello there!")?;
        loop {
            self.say(&menu_text())?;
            let choice = match self.read_line() {
                Ok(line) => line,
                Err(ConsoleError::Eof) => break,
                Err(ConsoleError::Io(e)) => return Err(e),
            };
            let Some(option) = MenuOption::from_input(&choice) else {
                self.say("Invalid option.\n")?;
                continue;
            };
            if option == MenuOption::Exit {
                break;
            }
            tracing::debug!(?option, "Menu option selected");
            match self.dispatch(option) {
                Ok(()) => {}
                Err(ConsoleError::Eof) => break,
                Err(ConsoleError::Io(e)) => return Err(e),
            }
        }
        self.say("Goodbye!")
    }

    fn dispatch(&mut self, option: MenuOption) -> Step {
        match option {
            MenuOption::LoadFiles => self.load_files(),
            MenuOption::AddFlight => self.add_flight(),
            MenuOption::AddPlane => self.add_plane(),
            MenuOption::AddTicket => self.add_ticket(),
            MenuOption::AddPassenger => self.add_passenger(),
            MenuOption::ShowFlights => self.show_records(RecordKind::Flight),
            MenuOption::ShowPlanes => self.show_records(RecordKind::Plane),
            MenuOption::ShowTickets => self.show_records(RecordKind::Ticket),
            MenuOption::ShowPassengers => self.show_records(RecordKind::Passenger),
            MenuOption::BoardingPass => self.boarding_pass(),
            MenuOption::ChangeSeat => self.change_seat(),
            MenuOption::AskForAssistance => self.ask_for_assistance(),
            MenuOption::ThankAssistant => self.thank_assistant(),
            MenuOption::DepartureGate => self.departure_gate(),
            MenuOption::FlightParameters => self.flight_parameters(),
            MenuOption::Exit => Ok(()),
        }
    }

    // ============================================================
    // Loading and adding records
    // ============================================================

    fn load_files(&mut self) -> Step {
        let outcomes = self.db.load_all(&self.files);
        let mut clean = true;
        for outcome in &outcomes {
            match &outcome.result {
                Ok(report) if report.rejected == 0 => {}
                Ok(report) => {
                    clean = false;
                    self.show(&messages::rows_omitted(report))?;
                }
                Err(e) => {
                    clean = false;
                    self.show(&messages::load_failed(outcome.kind, e))?;
                }
            }
        }
        if clean {
            self.show("Database loaded successfully.\n")
        } else {
            self.show("")
        }
    }

    fn add_flight(&mut self) -> Step {
        let Some(plane_number) = self.ask_number("Enter plane number: ")? else {
            return Ok(());
        };
        match Flight::new(plane_number) {
            Ok(flight) => {
                let insertion = self.db.add_flight(flight);
                self.report_insertion(RecordKind::Flight, insertion)
            }
            Err(e) => self.show(&e.to_string()),
        }
    }

    fn add_plane(&mut self) -> Step {
        let Some(plane_number) = self.ask_number("Enter plane number: ")? else {
            return Ok(());
        };
        let Some(economic) = self.ask_number("Enter the number of economy class seats: ")? else {
            return Ok(());
        };
        let Some(business) = self.ask_number("Enter the number of business class seats: ")? else {
            return Ok(());
        };
        let carrier = self.ask("Enter carrier name: ")?;

        let plane = match Plane::new(plane_number, economic, business, &carrier) {
            Ok(plane) => plane,
            Err(e) => return self.show(&e.to_string()),
        };
        match self.db.add_plane(plane) {
            Ok(insertion) => self.report_insertion(RecordKind::Plane, insertion),
            Err(e) => self.show(&messages::add_failed(&e)),
        }
    }

    fn add_ticket(&mut self) -> Step {
        let ticket_id = self.ask("Enter ticket id: ")?;
        let Some(plane_number) = self.ask_number("Enter plane number: ")? else {
            return Ok(());
        };
        let seat_class = self.ask("Enter seat class - must be economic or business: ")?;
        let Some(seat_number) = self.ask_number("Enter seat number: ")? else {
            return Ok(());
        };
        let Some(gate_number) = self.ask_number("Enter gate number: ")? else {
            return Ok(());
        };

        let ticket = match Ticket::new(&ticket_id, plane_number, &seat_class, seat_number, gate_number) {
            Ok(ticket) => ticket,
            Err(e) => {
                self.show(&e.to_string())?;
                return self.show("Invalid data - Ticket cannot be created.\n");
            }
        };
        match self.db.add_ticket(ticket) {
            Ok(insertion) => self.report_insertion(RecordKind::Ticket, insertion),
            Err(e) => self.show(&messages::add_failed(&e)),
        }
    }

    fn add_passenger(&mut self) -> Step {
        let first_name = self.ask("Enter passenger's first name: ")?;
        let last_name = self.ask("Enter passenger's last name: ")?;
        let ticket_id = self.ask("Enter passenger's ticket id: ")?;

        let passenger = match Passenger::new(&first_name, &last_name, &ticket_id) {
            Ok(passenger) => passenger,
            Err(e) => return self.show(&e.to_string()),
        };
        match self.db.add_passenger(passenger) {
            Ok(insertion) => self.report_insertion(RecordKind::Passenger, insertion),
            Err(e) => self.show(&messages::add_failed(&e)),
        }
    }

    fn report_insertion(&mut self, kind: RecordKind, insertion: Insertion) -> Step {
        match insertion {
            Insertion::Inserted => self.show(&format!("{} data added.\n", kind)),
            Insertion::Duplicate => self.show(&messages::duplicate(kind)),
        }
    }

    // ============================================================
    // Queries
    // ============================================================

    fn show_records(&mut self, kind: RecordKind) -> Step {
        let text = match kind {
            RecordKind::Flight => render::render_records(self.db.flights().values()),
            RecordKind::Plane => render::render_records(self.db.planes().values()),
            RecordKind::Ticket => render::render_records(self.db.tickets().values()),
            RecordKind::Passenger => render::render_records(self.db.passengers().values()),
        };
        if text.is_empty() {
            self.show(&format!("No {} in the database.\n", kind.as_str()))
        } else {
            self.show(&text)
        }
    }

    fn boarding_pass(&mut self) -> Step {
        let Some(ticket_id) = self.ask_passenger()? else {
            return Ok(());
        };
        match self.db.boarding_pass(&ticket_id) {
            Ok(pass) => self.show(&render::boarding_pass_table(&pass)),
            Err(e) => self.show(&e.to_string()),
        }
    }

    fn departure_gate(&mut self) -> Step {
        let ticket_id = self.ask("Enter passenger's ticket id: ")?;
        match self.db.departure_gate(&ticket_id) {
            Ok(gate) => self.show(&render::gate_table(gate)),
            Err(e) => self.show(&e.to_string()),
        }
    }

    fn flight_parameters(&mut self) -> Step {
        let Some(plane_number) = self.ask_number("Enter plane number: ")? else {
            return Ok(());
        };
        let Ok(plane_number) = u32::try_from(plane_number) else {
            return self.show("Invalid value.");
        };
        match self.db.flight_parameters(plane_number) {
            Ok(params) => self.show(&render::flight_parameters_table(&params)),
            Err(e) => self.show(&e.to_string()),
        }
    }

    // ============================================================
    // Seats and assistance
    // ============================================================

    fn change_seat(&mut self) -> Step {
        let Some(ticket_id) = self.ask_passenger()? else {
            return self.show("Something went wrong - seat cannot be changed.\n");
        };
        let seat_class = self.ask("Enter seat class - must be economic or business: ")?;
        let Some(seat_number) = self.ask_number("Enter seat number: ")? else {
            return self.show("Something went wrong - seat cannot be changed.\n");
        };
        match self.db.change_seat(&ticket_id, &seat_class, seat_number) {
            Ok(()) => self.show("Seat changed successfully.\n"),
            Err(e) => self.show(&messages::change_seat_failed(&e)),
        }
    }

    fn ask_for_assistance(&mut self) -> Step {
        let Some(ticket) = self.ask_ticket()? else {
            return Ok(());
        };
        match self.db.ask_for_assistance(&ticket) {
            Ok(()) => self.show("Assistant will take care of the Passenger's needs.\n"),
            Err(e) => self.show(&messages::assistance_failed(&e)),
        }
    }

    fn thank_assistant(&mut self) -> Step {
        let Some(ticket) = self.ask_ticket()? else {
            return Ok(());
        };
        match self.db.thank_for_assistance(&ticket) {
            Ok(()) => self.show("Assistant has been released.\n"),
            Err(e) => self.show(&messages::assistance_failed(&e)),
        }
    }

    // ============================================================
    // Input helpers
    // ============================================================

    /// Asks for a ticket id that has both a ticket and a passenger.
    fn ask_passenger(&mut self) -> Result<Option<String>, ConsoleError> {
        let ticket_id = self.ask("Enter passenger's ticket id: ")?;
        if self.db.find_ticket(&ticket_id).is_none() {
            self.show("Chosen ticket id does not exist in Database.\n")?;
            return Ok(None);
        }
        if self.db.find_passenger(&ticket_id).is_none() {
            self.show("Passenger with chosen ticket id does not exist in Database.\n")?;
            return Ok(None);
        }
        Ok(Some(ticket_id))
    }

    fn ask_ticket(&mut self) -> Result<Option<Ticket>, ConsoleError> {
        let ticket_id = self.ask("Enter Passenger's ticket id: ")?;
        match self.db.find_ticket(&ticket_id) {
            Some(ticket) => Ok(Some(ticket.clone())),
            None => {
                self.show("Chosen ticket id does not exist in the Database.\n")?;
                Ok(None)
            }
        }
    }

    fn ask_number(&mut self, prompt: &str) -> Result<Option<i64>, ConsoleError> {
        let answer = self.ask(prompt)?;
        match answer.trim().parse::<i64>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                self.show("Invalid value.")?;
                Ok(None)
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.show(prompt)?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Eof);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn show(&mut self, message: &str) -> Step {
        Ok(self.say(message)?)
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}
