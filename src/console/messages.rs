//! User-facing wording for store outcomes.

use crate::db::LoadReport;
use crate::error::{AddError, AssistanceError, BookingError, ChangeSeatError, LoadError};
use crate::models::RecordKind;

pub(super) fn rows_omitted(report: &LoadReport) -> String {
    format!(
        "{} {} data rows omitted due to already existing keys, missing references or occupied seats.",
        report.rejected,
        report.kind.as_str()
    )
}

pub(super) fn duplicate(kind: RecordKind) -> String {
    format!(
        "{} data with such key already exists in the database.\nData describing it will be omitted.\n",
        kind
    )
}

pub(super) fn load_failed(kind: RecordKind, err: &LoadError) -> String {
    match err {
        LoadError::MalformedHeader { .. } => {
            format!("{} data cannot be read due to invalid header in file.\n", kind)
        }
        LoadError::MalformedStream { .. } => {
            "Critical error occurred - file cannot be read.\n".to_string()
        }
        LoadError::NotFound(path) => format!("File: {} cannot be found.", path.display()),
        LoadError::IsADirectory(path) => format!("File: {} is a directory.", path.display()),
        LoadError::Io { .. } => err.to_string(),
        LoadError::Store(e) => add_failed(e),
    }
}

pub(super) fn add_failed(err: &AddError) -> String {
    match err {
        AddError::MissingFlightReference(plane_number) => format!(
            "Detected invalid data - data cannot be added into Database.\n\
             A flight with plane number {} must be added first.\n",
            plane_number
        ),
        AddError::MissingTicketReference(ticket_id) => format!(
            "Detected invalid data - data cannot be added into Database.\n\
             A ticket with id '{}' must be added first.\n",
            ticket_id
        ),
        AddError::Booking(e) => booking_failed(e),
    }
}

pub(super) fn booking_failed(err: &BookingError) -> String {
    match err {
        BookingError::SeatOccupied { .. } => {
            "Chosen seat is occupied.\nPlease choose another seat.\n".to_string()
        }
        BookingError::InvalidSeatNumber { .. } => format!(
            "Invalid seat number: {}.\n\
             If you want to get more information about chosen plane,\n\
             you can always use option \"Show existing planes\" in main menu.\n",
            err
        ),
        BookingError::UnknownPlane(_) => format!("{}.\n", err),
    }
}

pub(super) fn change_seat_failed(err: &ChangeSeatError) -> String {
    match err {
        ChangeSeatError::Booking(e) => booking_failed(e),
        ChangeSeatError::Validation(e) => format!("{}.\nSeat cannot be changed.\n", e),
        ChangeSeatError::UnknownTicket(_) => format!("{}.\n", err),
    }
}

pub(super) fn assistance_failed(err: &AssistanceError) -> String {
    match err {
        AssistanceError::AllAssistantsBusy => {
            "All assistants are busy now. Please try again later.\n".to_string()
        }
        _ => format!("{}.\n", err),
    }
}
