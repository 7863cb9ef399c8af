//! Record types for the ground-operations ledger.
//!
//! # Core Concepts
//!
//! - [`Flight`]: a registered plane number. Everything else hangs off it.
//! - [`Plane`]: seating configuration for a flight, with its live
//!   [`SeatMap`]s and [`AssistanceSet`].
//! - [`Ticket`]: a seat assignment (class + seat number + gate) on a flight.
//! - [`Passenger`]: the person holding a ticket, keyed by the ticket id.
//!
//! Every constructor validates its fields up front and either returns a
//! complete record or a [`ValidationError`](crate::error::ValidationError).

mod assistance;
mod flight;
mod occupancy;
mod passenger;
mod plane;
mod ticket;
pub mod validate;
mod views;

use std::fmt;

use serde::Serialize;

pub use assistance::*;
pub use flight::Flight;
pub use occupancy::*;
pub use passenger::*;
pub use plane::*;
pub use ticket::*;
pub use validate::WholeNumber;
pub use views::*;

/// The four kinds of records held by the store.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Flight,
    Plane,
    Ticket,
    Passenger,
}

impl RecordKind {
    /// The order records must be loaded in for references to resolve.
    pub const LOAD_ORDER: [RecordKind; 4] = [
        RecordKind::Flight,
        RecordKind::Plane,
        RecordKind::Ticket,
        RecordKind::Passenger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flight => "flights",
            Self::Plane => "planes",
            Self::Ticket => "tickets",
            Self::Passenger => "passengers",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.as_str();
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}
