use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::AssistanceError;

/// Number of assistants available on every plane.
pub const ASSISTANT_COUNT: usize = 3;

/// Ticket ids of passengers currently being helped by an assistant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssistanceSet {
    busy: BTreeSet<String>,
}

impl AssistanceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a free assistant to `ticket_id`.
    ///
    /// A repeated request is reported as such even when every assistant is busy.
    pub fn request(&mut self, ticket_id: &str) -> Result<(), AssistanceError> {
        if self.busy.contains(ticket_id) {
            return Err(AssistanceError::AlreadyRequested(ticket_id.to_string()));
        }
        if self.busy.len() >= ASSISTANT_COUNT {
            return Err(AssistanceError::AllAssistantsBusy);
        }
        self.busy.insert(ticket_id.to_string());
        Ok(())
    }

    pub fn dismiss(&mut self, ticket_id: &str) -> Result<(), AssistanceError> {
        if self.busy.remove(ticket_id) {
            Ok(())
        } else {
            Err(AssistanceError::NotRequested(ticket_id.to_string()))
        }
    }

    pub fn contains(&self, ticket_id: &str) -> bool {
        self.busy.contains(ticket_id)
    }

    pub fn len(&self) -> usize {
        self.busy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.busy.is_empty()
    }
}
