//! CSV decoding of the four record files.
//!
//! Each reader checks the header for the columns it needs, then turns every
//! row into a record. Rows that cannot be turned into a valid record are
//! skipped and counted; only an unusable header or undecodable data fails
//! the whole read.

use std::collections::BTreeMap;
use std::io::Read;

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ParseError;
use crate::models::*;

pub const FLIGHT_COLUMNS: &[&str] = &["plane_number"];
pub const PLANE_COLUMNS: &[&str] = &[
    "plane_number",
    "economic_seats_number",
    "business_seats_number",
    "carrier",
];
pub const TICKET_COLUMNS: &[&str] = &[
    "ticket_id",
    "plane_number",
    "seat_class",
    "seat_number",
    "gate_number",
];
pub const PASSENGER_COLUMNS: &[&str] = &["first_name", "last_name", "ticket_id"];

/// Records decoded from one file.
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    /// One record per key, in the order each key first appeared. A later row
    /// with a repeated key replaces the earlier record in place.
    pub records: Vec<T>,
    /// Rows dropped because they did not form a valid record.
    pub skipped: usize,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FlightRow {
    plane_number: String,
}

#[derive(Debug, Deserialize)]
struct PlaneRow {
    plane_number: String,
    economic_seats_number: String,
    business_seats_number: String,
    carrier: String,
}

#[derive(Debug, Deserialize)]
struct TicketRow {
    ticket_id: String,
    plane_number: String,
    seat_class: String,
    seat_number: String,
    gate_number: String,
}

#[derive(Debug, Deserialize)]
struct PassengerRow {
    first_name: String,
    last_name: String,
    ticket_id: String,
}

pub fn read_flights<R: Read>(input: R) -> Result<Parsed<Flight>, ParseError> {
    read_records(
        input,
        RecordKind::Flight,
        FLIGHT_COLUMNS,
        |row: FlightRow| Flight::new(int(&row.plane_number)?).ok(),
        Flight::plane_number,
    )
}

pub fn read_planes<R: Read>(input: R) -> Result<Parsed<Plane>, ParseError> {
    read_records(
        input,
        RecordKind::Plane,
        PLANE_COLUMNS,
        |row: PlaneRow| {
            Plane::new(
                int(&row.plane_number)?,
                int(&row.economic_seats_number)?,
                int(&row.business_seats_number)?,
                &row.carrier,
            )
            .ok()
        },
        Plane::plane_number,
    )
}

pub fn read_tickets<R: Read>(input: R) -> Result<Parsed<Ticket>, ParseError> {
    read_records(
        input,
        RecordKind::Ticket,
        TICKET_COLUMNS,
        |row: TicketRow| {
            Ticket::new(
                &row.ticket_id,
                int(&row.plane_number)?,
                &row.seat_class,
                int(&row.seat_number)?,
                int(&row.gate_number)?,
            )
            .ok()
        },
        |t: &Ticket| t.ticket_id().to_string(),
    )
}

pub fn read_passengers<R: Read>(input: R) -> Result<Parsed<Passenger>, ParseError> {
    read_records(
        input,
        RecordKind::Passenger,
        PASSENGER_COLUMNS,
        |row: PassengerRow| Passenger::new(&row.first_name, &row.last_name, &row.ticket_id).ok(),
        |p: &Passenger| p.ticket_id().to_string(),
    )
}

fn int(field: &str) -> Option<i64> {
    field.trim().parse().ok()
}

fn read_records<R, Row, T, K>(
    input: R,
    kind: RecordKind,
    columns: &'static [&'static str],
    build: impl Fn(Row) -> Option<T>,
    key: impl Fn(&T) -> K,
) -> Result<Parsed<T>, ParseError>
where
    R: Read,
    Row: DeserializeOwned,
    K: Ord,
{
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| stream_error(kind, e))?
        .clone();
    if headers.is_empty() {
        return Ok(Parsed::default());
    }
    check_columns(kind, &headers, columns)?;

    let mut parsed = Parsed::default();
    let mut positions: BTreeMap<K, usize> = BTreeMap::new();

    for result in reader.deserialize::<Row>() {
        let row = match result {
            Ok(row) => row,
            Err(e) if matches!(e.kind(), ErrorKind::Deserialize { .. }) => {
                parsed.skipped += 1;
                continue;
            }
            Err(e) => return Err(stream_error(kind, e)),
        };

        let Some(record) = build(row) else {
            parsed.skipped += 1;
            continue;
        };

        match positions.get(&key(&record)) {
            Some(&i) => parsed.records[i] = record,
            None => {
                positions.insert(key(&record), parsed.records.len());
                parsed.records.push(record);
            }
        }
    }

    tracing::debug!(
        kind = %kind,
        records = parsed.records.len(),
        skipped = parsed.skipped,
        "Parsed record file"
    );
    Ok(parsed)
}

fn check_columns(
    kind: RecordKind,
    headers: &StringRecord,
    columns: &'static [&'static str],
) -> Result<(), ParseError> {
    match columns.iter().find(|c| !headers.iter().any(|h| h == **c)) {
        Some(column) => Err(ParseError::MissingColumn { kind, column }),
        None => Ok(()),
    }
}

fn stream_error(kind: RecordKind, err: csv::Error) -> ParseError {
    if err.is_io_error() {
        ParseError::Io {
            kind,
            source: err.into(),
        }
    } else {
        ParseError::Malformed { kind, source: err }
    }
}
