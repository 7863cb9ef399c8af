use serde::Serialize;

use super::{Passenger, Plane, PlaneKind, SeatClass, Ticket};

/// A ticket joined with the passenger holding it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BoardingPass {
    pub ticket_id: String,
    pub first_name: String,
    pub last_name: String,
    pub plane_number: u32,
    pub seat_class: SeatClass,
    pub seat_number: u32,
    pub gate_number: u32,
}

impl BoardingPass {
    pub fn new(ticket: &Ticket, passenger: &Passenger) -> Self {
        Self {
            ticket_id: ticket.ticket_id().to_string(),
            first_name: passenger.first_name().to_string(),
            last_name: passenger.last_name().to_string(),
            plane_number: ticket.plane_number(),
            seat_class: ticket.seat_class(),
            seat_number: ticket.seat_number(),
            gate_number: ticket.gate_number(),
        }
    }
}

/// Summary of a plane's configuration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightParameters {
    pub plane_number: u32,
    pub kind: PlaneKind,
    pub business_seats_number: u32,
    pub economic_seats_number: u32,
    pub carrier: String,
}

impl From<&Plane> for FlightParameters {
    fn from(plane: &Plane) -> Self {
        Self {
            plane_number: plane.plane_number(),
            kind: plane.kind(),
            business_seats_number: plane.business_seats_number(),
            economic_seats_number: plane.economic_seats_number(),
            carrier: plane.carrier().to_string(),
        }
    }
}
