use std::fmt;

use serde::Serialize;

use super::validate::{positive_integer, WholeNumber};
use crate::error::ValidationError;

/// A registered plane number.
///
/// Flights carry no state beyond their identity; they exist so that planes and
/// tickets have something to refer to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Flight {
    plane_number: u32,
}

impl Flight {
    pub fn new(plane_number: impl WholeNumber) -> Result<Self, ValidationError> {
        Ok(Self {
            plane_number: plane_number_of(plane_number)?,
        })
    }

    pub fn plane_number(&self) -> u32 {
        self.plane_number
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flight: plane number: {}", self.plane_number)
    }
}

/// Validates a plane number for any record that refers to a flight.
pub(crate) fn plane_number_of(value: impl WholeNumber) -> Result<u32, ValidationError> {
    positive_integer(value).ok_or(ValidationError::InvalidPlaneNumber)
}
