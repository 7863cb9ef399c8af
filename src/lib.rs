//! Ground-operations ledger: the record store from `airops-core` plus the
//! terminal front end (configuration, table rendering, interactive console).

pub mod config;
pub mod console;
pub mod render;

pub use airops_core::{csv_io, db, error, models};
