mod loader;

use std::collections::BTreeMap;

pub use loader::{DataFiles, LoadOutcome, LoadReport};

use crate::error::{AddError, AssistanceError, BookingError, ChangeSeatError, LookupError};
use crate::models::*;

/// Whether an `add_*` call stored its record or skipped a duplicate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    Duplicate,
}

impl Insertion {
    /// `0` for an inserted record, `1` for a skipped duplicate.
    pub fn rejected(self) -> usize {
        match self {
            Self::Inserted => 0,
            Self::Duplicate => 1,
        }
    }
}

/// In-memory record store.
///
/// Owns every flight, plane, ticket and passenger, and keeps the references
/// between them valid: planes and tickets need their flight, passengers need
/// their ticket. There is no deletion; after creation only seat occupancy and
/// assistance sets change.
///
/// The store is meant for a single caller. Sharing it across threads requires
/// wrapping it in a lock, since booking and assistance are read-modify-write.
#[derive(Debug, Default)]
pub struct Database {
    flights: BTreeMap<u32, Flight>,
    planes: BTreeMap<u32, Plane>,
    tickets: BTreeMap<String, Ticket>,
    passengers: BTreeMap<String, Passenger>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Views
    // ============================================================

    pub fn flights(&self) -> &BTreeMap<u32, Flight> {
        &self.flights
    }

    pub fn planes(&self) -> &BTreeMap<u32, Plane> {
        &self.planes
    }

    pub fn tickets(&self) -> &BTreeMap<String, Ticket> {
        &self.tickets
    }

    pub fn passengers(&self) -> &BTreeMap<String, Passenger> {
        &self.passengers
    }

    pub fn find_flight(&self, plane_number: u32) -> Option<&Flight> {
        self.flights.get(&plane_number)
    }

    pub fn find_plane(&self, plane_number: u32) -> Option<&Plane> {
        self.planes.get(&plane_number)
    }

    pub fn find_ticket(&self, ticket_id: &str) -> Option<&Ticket> {
        self.tickets.get(ticket_id)
    }

    pub fn find_passenger(&self, ticket_id: &str) -> Option<&Passenger> {
        self.passengers.get(ticket_id)
    }

    // ============================================================
    // Record insertion
    // ============================================================

    pub fn add_flight(&mut self, flight: Flight) -> Insertion {
        let key = flight.plane_number();
        if self.flights.contains_key(&key) {
            tracing::debug!(plane_number = key, "Skipping duplicate flight");
            return Insertion::Duplicate;
        }
        self.flights.insert(key, flight);
        tracing::debug!(plane_number = key, "Added flight");
        Insertion::Inserted
    }

    pub fn add_plane(&mut self, plane: Plane) -> Result<Insertion, AddError> {
        let key = plane.plane_number();
        if self.planes.contains_key(&key) {
            tracing::debug!(plane_number = key, "Skipping duplicate plane");
            return Ok(Insertion::Duplicate);
        }
        if !self.flights.contains_key(&key) {
            tracing::warn!(plane_number = key, "Plane refers to an unknown flight");
            return Err(AddError::MissingFlightReference(key));
        }
        self.planes.insert(key, plane);
        tracing::debug!(plane_number = key, "Added plane");
        Ok(Insertion::Inserted)
    }

    /// Adds a ticket by booking its seat.
    ///
    /// The ticket is only stored if the booking succeeds.
    pub fn add_ticket(&mut self, ticket: Ticket) -> Result<Insertion, AddError> {
        if self.tickets.contains_key(ticket.ticket_id()) {
            tracing::debug!(ticket_id = ticket.ticket_id(), "Skipping duplicate ticket");
            return Ok(Insertion::Duplicate);
        }
        if !self.flights.contains_key(&ticket.plane_number()) {
            tracing::warn!(
                ticket_id = ticket.ticket_id(),
                plane_number = ticket.plane_number(),
                "Ticket refers to an unknown flight"
            );
            return Err(AddError::MissingFlightReference(ticket.plane_number()));
        }
        self.book_seat(ticket)?;
        Ok(Insertion::Inserted)
    }

    pub fn add_passenger(&mut self, passenger: Passenger) -> Result<Insertion, AddError> {
        let key = passenger.ticket_id();
        if self.passengers.contains_key(key) {
            tracing::debug!(ticket_id = key, "Skipping duplicate passenger");
            return Ok(Insertion::Duplicate);
        }
        if !self.tickets.contains_key(key) {
            tracing::warn!(ticket_id = key, "Passenger refers to an unknown ticket");
            return Err(AddError::MissingTicketReference(key.to_string()));
        }
        let key = key.to_string();
        tracing::debug!(ticket_id = %key, "Added passenger");
        self.passengers.insert(key, passenger);
        Ok(Insertion::Inserted)
    }

    // ============================================================
    // Seat occupancy
    // ============================================================

    /// Occupies the ticket's seat and registers the ticket.
    ///
    /// Any ticket already stored under the same id is replaced.
    pub fn book_seat(&mut self, ticket: Ticket) -> Result<(), BookingError> {
        let plane = self.plane_mut(ticket.plane_number())?;
        plane.occupy_seat(ticket.seat_class(), ticket.seat_number())?;
        tracing::debug!(
            ticket_id = ticket.ticket_id(),
            plane_number = ticket.plane_number(),
            class = %ticket.seat_class(),
            seat = ticket.seat_number(),
            "Booked seat"
        );
        self.tickets.insert(ticket.ticket_id().to_string(), ticket);
        Ok(())
    }

    /// Frees the ticket's seat. Releasing a free seat is not an error.
    pub fn release_seat(&mut self, ticket: &Ticket) -> Result<(), BookingError> {
        let plane = self.plane_mut(ticket.plane_number())?;
        plane.release_seat(ticket.seat_class(), ticket.seat_number())?;
        tracing::debug!(
            ticket_id = ticket.ticket_id(),
            plane_number = ticket.plane_number(),
            class = %ticket.seat_class(),
            seat = ticket.seat_number(),
            "Released seat"
        );
        Ok(())
    }

    /// Moves a registered ticket to another seat on the same plane.
    ///
    /// The new seat is booked before the old one is released, so a failed
    /// move leaves both the ticket and the seat maps untouched.
    pub fn change_seat(
        &mut self,
        ticket_id: &str,
        seat_class: &str,
        seat_number: impl WholeNumber,
    ) -> Result<(), ChangeSeatError> {
        let current = self
            .tickets
            .get(ticket_id)
            .cloned()
            .ok_or_else(|| ChangeSeatError::UnknownTicket(ticket_id.to_string()))?;

        let mut moved = current.clone();
        moved.set_seat_class(seat_class)?;
        moved.set_seat_number(seat_number)?;

        if let Err(e) = self.book_seat(moved) {
            tracing::warn!(ticket_id, error = %e, "Seat change rejected");
            return Err(e.into());
        }
        self.release_seat(&current)?;
        Ok(())
    }

    // ============================================================
    // Assistance
    // ============================================================

    pub fn ask_for_assistance(&mut self, ticket: &Ticket) -> Result<(), AssistanceError> {
        let ticket_id = self.assistance_target(ticket)?;
        let plane = self
            .planes
            .get_mut(&ticket.plane_number())
            .ok_or(AssistanceError::UnknownPlane(ticket.plane_number()))?;
        plane.request_assistance(ticket_id)?;
        tracing::debug!(ticket_id, "Assistant assigned");
        Ok(())
    }

    pub fn thank_for_assistance(&mut self, ticket: &Ticket) -> Result<(), AssistanceError> {
        let ticket_id = self.assistance_target(ticket)?;
        let plane = self
            .planes
            .get_mut(&ticket.plane_number())
            .ok_or(AssistanceError::UnknownPlane(ticket.plane_number()))?;
        plane.dismiss_assistance(ticket_id)?;
        tracing::debug!(ticket_id, "Assistant released");
        Ok(())
    }

    fn assistance_target<'t>(&self, ticket: &'t Ticket) -> Result<&'t str, AssistanceError> {
        if !self.planes.contains_key(&ticket.plane_number()) {
            return Err(AssistanceError::UnknownPlane(ticket.plane_number()));
        }
        let ticket_id = ticket.ticket_id();
        if ticket_id.is_empty() {
            return Err(AssistanceError::InvalidPassengerId);
        }
        if !self.tickets.contains_key(ticket_id) {
            return Err(AssistanceError::UnknownPassenger(ticket_id.to_string()));
        }
        Ok(ticket_id)
    }

    // ============================================================
    // Joined lookups
    // ============================================================

    pub fn boarding_pass(&self, ticket_id: &str) -> Result<BoardingPass, LookupError> {
        let ticket = self
            .find_ticket(ticket_id)
            .ok_or_else(|| LookupError::UnknownTicket(ticket_id.to_string()))?;
        let passenger = self
            .find_passenger(ticket_id)
            .ok_or_else(|| LookupError::UnknownPassenger(ticket_id.to_string()))?;
        Ok(BoardingPass::new(ticket, passenger))
    }

    pub fn departure_gate(&self, ticket_id: &str) -> Result<u32, LookupError> {
        self.find_ticket(ticket_id)
            .map(Ticket::gate_number)
            .ok_or_else(|| LookupError::UnknownTicket(ticket_id.to_string()))
    }

    pub fn flight_parameters(&self, plane_number: u32) -> Result<FlightParameters, LookupError> {
        self.find_plane(plane_number)
            .map(FlightParameters::from)
            .ok_or(LookupError::UnknownPlane(plane_number))
    }

    fn plane_mut(&mut self, plane_number: u32) -> Result<&mut Plane, BookingError> {
        self.planes
            .get_mut(&plane_number)
            .ok_or(BookingError::UnknownPlane(plane_number))
    }
}
