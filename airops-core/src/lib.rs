//! Record store and seat-occupancy engine for airline ground operations.
//!
//! - [`models`]: flights, planes, tickets, passengers and the seat/assistance
//!   state planes carry.
//! - [`db`]: the [`Database`](db::Database) that owns all records, enforces the
//!   references between them and loads record files.
//! - [`csv_io`]: decoding of the CSV record files.
//! - [`error`]: one error enum per operation family.

pub mod csv_io;
pub mod db;
pub mod error;
pub mod models;
