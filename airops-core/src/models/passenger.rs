use std::fmt;

use serde::Serialize;

use super::validate::non_empty;
use crate::error::ValidationError;

/// A person travelling on a ticket.
///
/// A passenger has no key of their own: `ticket_id` must match a ticket
/// already registered in the store.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Passenger {
    first_name: String,
    last_name: String,
    ticket_id: String,
}

impl Passenger {
    pub fn new(first_name: &str, last_name: &str, ticket_id: &str) -> Result<Self, ValidationError> {
        let first_name = non_empty(first_name).ok_or(ValidationError::InvalidFirstName)?;
        let last_name = non_empty(last_name).ok_or(ValidationError::InvalidLastName)?;
        let ticket_id = non_empty(ticket_id).ok_or(ValidationError::InvalidPassengerTicketId)?;
        Ok(Self {
            first_name,
            last_name,
            ticket_id,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Passenger: {} {}, ticket id number: {}",
            self.first_name, self.last_name, self.ticket_id
        )
    }
}
