//! Error taxonomy for the record store.
//!
//! Each operation family has its own closed enum so callers can match on the
//! exact outcome instead of inspecting messages.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{RecordKind, SeatClass};

/// Field-level validation failures raised by record constructors and setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Plane number must be a positive integer")]
    InvalidPlaneNumber,

    #[error("Number of seats must be a positive integer")]
    InvalidNumberOfSeats,

    #[error("Carrier name must not be empty")]
    InvalidCarrierName,

    #[error("Ticket id must not be empty")]
    InvalidTicketId,

    #[error("Seat class must be either 'business' or 'economic'")]
    InvalidSeatClass,

    #[error("Seat number must be a positive integer")]
    InvalidSeatNumber,

    #[error("Gate number must be a positive integer")]
    InvalidGateNumber,

    #[error("Passenger first name must not be empty")]
    InvalidFirstName,

    #[error("Passenger last name must not be empty")]
    InvalidLastName,

    #[error("Passenger ticket id must not be empty")]
    InvalidPassengerTicketId,
}

/// Seat booking and release failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("No plane registered with number {0}")]
    UnknownPlane(u32),

    #[error("Seat {seat} does not exist in {class} class (plane has {capacity} seats)")]
    InvalidSeatNumber {
        class: SeatClass,
        seat: u32,
        capacity: u32,
    },

    #[error("Seat {seat} in {class} class is already occupied")]
    SeatOccupied { class: SeatClass, seat: u32 },
}

/// Failures of `add_plane`, `add_ticket` and `add_passenger`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddError {
    #[error("No flight registered with plane number {0}")]
    MissingFlightReference(u32),

    #[error("No ticket registered with id '{0}'")]
    MissingTicketReference(String),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

/// Failures of the assistance request/dismiss pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistanceError {
    #[error("No plane registered with number {0}")]
    UnknownPlane(u32),

    #[error("No passenger registered with ticket id '{0}'")]
    UnknownPassenger(String),

    #[error("Passenger ticket id must not be empty")]
    InvalidPassengerId,

    #[error("Passenger '{0}' has already asked for assistance")]
    AlreadyRequested(String),

    #[error("All assistants are busy")]
    AllAssistantsBusy,

    #[error("Passenger '{0}' has not asked for assistance")]
    NotRequested(String),
}

/// Failures of keyed lookups that join several collections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No ticket registered with id '{0}'")]
    UnknownTicket(String),

    #[error("No passenger registered with ticket id '{0}'")]
    UnknownPassenger(String),

    #[error("No plane registered with number {0}")]
    UnknownPlane(u32),
}

/// Failures of moving a ticket to another seat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeSeatError {
    #[error("No ticket registered with id '{0}'")]
    UnknownTicket(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

/// Failures of the CSV record parser.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{kind} data is missing the '{column}' column")]
    MissingColumn {
        kind: RecordKind,
        column: &'static str,
    },

    #[error("{kind} data cannot be decoded: {source}")]
    Malformed {
        kind: RecordKind,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read {kind} data: {source}")]
    Io {
        kind: RecordKind,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of loading a record file into the store.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File {} cannot be found", .0.display())]
    NotFound(PathBuf),

    #[error("File {} is a directory", .0.display())]
    IsADirectory(PathBuf),

    #[error("File {} has an invalid header: missing '{column}' column", .path.display())]
    MalformedHeader { path: PathBuf, column: &'static str },

    #[error("File {} cannot be read: {source}", .path.display())]
    MalformedStream {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] AddError),
}

impl LoadError {
    pub(crate) fn from_parse(path: PathBuf, err: ParseError) -> Self {
        match err {
            ParseError::MissingColumn { column, .. } => Self::MalformedHeader { path, column },
            ParseError::Malformed { source, .. } => Self::MalformedStream { path, source },
            ParseError::Io { source, .. } => Self::Io { path, source },
        }
    }

    pub(crate) fn from_open(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::IsADirectory => Self::IsADirectory(path),
            _ => Self::Io { path, source: err },
        }
    }
}
