//! Bulk loading of record files into the store.
//!
//! Files must be loaded flights → planes → tickets → passengers: each kind
//! refers to records of the kind before it, and rows whose parent is not yet
//! loaded are rejected.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::{Database, Insertion};
use crate::csv_io;
use crate::error::{AddError, BookingError, LoadError};
use crate::models::RecordKind;

/// Counts from loading one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub kind: RecordKind,
    /// Records newly added to the store.
    pub inserted: usize,
    /// Rows refused by the store: duplicate keys, missing parents and, for
    /// tickets, seats that were already taken.
    pub rejected: usize,
    /// Rows that did not form a valid record and never reached the store.
    pub malformed_rows: usize,
}

impl LoadReport {
    fn new(kind: RecordKind, malformed_rows: usize) -> Self {
        Self {
            kind,
            inserted: 0,
            rejected: 0,
            malformed_rows,
        }
    }

    fn count(&mut self, insertion: Insertion) {
        match insertion {
            Insertion::Inserted => self.inserted += 1,
            Insertion::Duplicate => self.rejected += 1,
        }
    }
}

/// Locations of the four record files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub flights: PathBuf,
    pub planes: PathBuf,
    pub tickets: PathBuf,
    pub passengers: PathBuf,
}

impl DataFiles {
    pub const FLIGHTS: &'static str = "flights_database.csv";
    pub const PLANES: &'static str = "planes_database.csv";
    pub const TICKETS: &'static str = "tickets_database.csv";
    pub const PASSENGERS: &'static str = "passengers_database.csv";

    /// The default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            flights: dir.join(Self::FLIGHTS),
            planes: dir.join(Self::PLANES),
            tickets: dir.join(Self::TICKETS),
            passengers: dir.join(Self::PASSENGERS),
        }
    }

    pub fn path(&self, kind: RecordKind) -> &Path {
        match kind {
            RecordKind::Flight => &self.flights,
            RecordKind::Plane => &self.planes,
            RecordKind::Ticket => &self.tickets,
            RecordKind::Passenger => &self.passengers,
        }
    }
}

/// Result of loading one file as part of [`Database::load_all`].
#[derive(Debug)]
pub struct LoadOutcome {
    pub kind: RecordKind,
    pub path: PathBuf,
    pub result: Result<LoadReport, LoadError>,
}

impl Database {
    pub fn read_flights(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let parsed = csv_io::read_flights(open(path)?)
            .map_err(|e| LoadError::from_parse(path.to_path_buf(), e))?;

        let mut report = LoadReport::new(RecordKind::Flight, parsed.skipped);
        for flight in parsed.records {
            report.count(self.add_flight(flight));
        }
        Ok(finish(path, report))
    }

    pub fn read_planes(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let parsed = csv_io::read_planes(open(path)?)
            .map_err(|e| LoadError::from_parse(path.to_path_buf(), e))?;

        let mut report = LoadReport::new(RecordKind::Plane, parsed.skipped);
        for plane in parsed.records {
            match self.add_plane(plane) {
                Ok(insertion) => report.count(insertion),
                Err(AddError::MissingFlightReference(_)) => report.rejected += 1,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(finish(path, report))
    }

    pub fn read_tickets(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let parsed = csv_io::read_tickets(open(path)?)
            .map_err(|e| LoadError::from_parse(path.to_path_buf(), e))?;

        let mut report = LoadReport::new(RecordKind::Ticket, parsed.skipped);
        for ticket in parsed.records {
            match self.add_ticket(ticket) {
                Ok(insertion) => report.count(insertion),
                Err(AddError::MissingFlightReference(_))
                | Err(AddError::Booking(BookingError::SeatOccupied { .. })) => {
                    report.rejected += 1
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(finish(path, report))
    }

    pub fn read_passengers(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let parsed = csv_io::read_passengers(open(path)?)
            .map_err(|e| LoadError::from_parse(path.to_path_buf(), e))?;

        let mut report = LoadReport::new(RecordKind::Passenger, parsed.skipped);
        for passenger in parsed.records {
            match self.add_passenger(passenger) {
                Ok(insertion) => report.count(insertion),
                Err(AddError::MissingTicketReference(_)) => report.rejected += 1,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(finish(path, report))
    }

    pub fn read(&mut self, kind: RecordKind, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        match kind {
            RecordKind::Flight => self.read_flights(path),
            RecordKind::Plane => self.read_planes(path),
            RecordKind::Ticket => self.read_tickets(path),
            RecordKind::Passenger => self.read_passengers(path),
        }
    }

    /// Loads every file in dependency order.
    ///
    /// A file that fails to load does not stop the ones after it; their rows
    /// may then be rejected for lack of parents.
    pub fn load_all(&mut self, files: &DataFiles) -> Vec<LoadOutcome> {
        RecordKind::LOAD_ORDER
            .iter()
            .map(|&kind| {
                let path = files.path(kind).to_path_buf();
                let result = self.read(kind, &path);
                if let Err(e) = &result {
                    tracing::warn!(kind = %kind, error = %e, "Failed to load record file");
                }
                LoadOutcome { kind, path, result }
            })
            .collect()
    }
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    if path.is_dir() {
        return Err(LoadError::IsADirectory(path.to_path_buf()));
    }
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LoadError::from_open(path.to_path_buf(), e))
}

fn finish(path: &Path, report: LoadReport) -> LoadReport {
    tracing::info!(
        kind = %report.kind,
        path = %path.display(),
        inserted = report.inserted,
        rejected = report.rejected,
        malformed_rows = report.malformed_rows,
        "Loaded record file"
    );
    report
}
