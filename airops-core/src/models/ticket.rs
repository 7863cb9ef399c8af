use std::fmt;

use serde::Serialize;

use super::flight::plane_number_of;
use super::occupancy::SeatClass;
use super::validate::{non_empty, positive_integer, WholeNumber};
use crate::error::ValidationError;

/// A seat assignment on a flight.
///
/// Changing the class or seat number of a ticket does not move any seat
/// occupancy; that is done by [`Database::change_seat`](crate::db::Database::change_seat).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Ticket {
    ticket_id: String,
    plane_number: u32,
    seat_class: SeatClass,
    seat_number: u32,
    gate_number: u32,
}

impl Ticket {
    pub fn new(
        ticket_id: &str,
        plane_number: impl WholeNumber,
        seat_class: &str,
        seat_number: impl WholeNumber,
        gate_number: impl WholeNumber,
    ) -> Result<Self, ValidationError> {
        let plane_number = plane_number_of(plane_number)?;
        let ticket_id = non_empty(ticket_id).ok_or(ValidationError::InvalidTicketId)?;
        let seat_class = seat_class_of(seat_class)?;
        let seat_number = seat_number_of(seat_number)?;
        let gate_number =
            positive_integer(gate_number).ok_or(ValidationError::InvalidGateNumber)?;

        Ok(Self {
            ticket_id,
            plane_number,
            seat_class,
            seat_number,
            gate_number,
        })
    }

    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    pub fn plane_number(&self) -> u32 {
        self.plane_number
    }

    pub fn seat_class(&self) -> SeatClass {
        self.seat_class
    }

    pub fn seat_number(&self) -> u32 {
        self.seat_number
    }

    pub fn gate_number(&self) -> u32 {
        self.gate_number
    }

    /// Sets the seat class. On error the previous class is kept.
    pub fn set_seat_class(&mut self, seat_class: &str) -> Result<(), ValidationError> {
        self.seat_class = seat_class_of(seat_class)?;
        Ok(())
    }

    /// Sets the seat number. On error the previous number is kept.
    pub fn set_seat_number(&mut self, seat_number: impl WholeNumber) -> Result<(), ValidationError> {
        self.seat_number = seat_number_of(seat_number)?;
        Ok(())
    }
}

fn seat_class_of(value: &str) -> Result<SeatClass, ValidationError> {
    SeatClass::from_str(value).ok_or(ValidationError::InvalidSeatClass)
}

fn seat_number_of(value: impl WholeNumber) -> Result<u32, ValidationError> {
    positive_integer(value).ok_or(ValidationError::InvalidSeatNumber)
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticket: id: {}, plane number: {}, seat class: {}, seat number: {}, gate number: {}",
            self.ticket_id, self.plane_number, self.seat_class, self.seat_number, self.gate_number
        )
    }
}

#[cfg(test)]
impl Ticket {
    /// A copy with an empty id, which `new` never produces.
    pub(crate) fn with_blank_id(mut self) -> Self {
        self.ticket_id.clear();
        self
    }
}
