use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use airops::config::AppConfig;
use airops::console::Console;
use airops::db::{Database, LoadOutcome};
use airops::render;

#[derive(Parser)]
#[command(name = "airops")]
#[command(about = "Ground-operations ledger for flights, planes, tickets and passengers")]
struct Cli {
    /// Directory holding the record files (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file to use instead of the one in the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Console,
    /// Print stored records of one kind
    Show {
        kind: ShowKind,

        /// Plane number for flights/planes, ticket id for tickets/passengers
        #[arg(long)]
        id: Option<String>,

        /// Print JSON instead of description lines
        #[arg(long)]
        json: bool,
    },
    /// Print the boarding pass for a ticket
    BoardingPass {
        ticket_id: String,

        #[arg(long)]
        json: bool,
    },
    /// Print the parameters of a plane
    FlightParams {
        plane_number: u32,

        #[arg(long)]
        json: bool,
    },
    /// Print the departure gate for a ticket
    CheckGate { ticket_id: String },
    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ShowKind {
    Flights,
    Planes,
    Tickets,
    Passengers,
}

/// Initialize tracing with output to stderr so stdout only carries results
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "airops=warn,airops_core=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = AppConfig::load(cli.config.as_deref());
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "Using data directory");

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => {
            let stdin = io::stdin();
            let mut console = Console::new(
                Database::new(),
                config.data_files(),
                stdin.lock(),
                io::stdout(),
            );
            console.run()?;
        }
        Commands::Show { kind, id, json } => {
            let db = load_database(&config);
            show(&db, kind, id.as_deref(), json)?;
        }
        Commands::BoardingPass { ticket_id, json } => {
            let db = load_database(&config);
            let pass = db.boarding_pass(&ticket_id)?;
            if json {
                print_json(&pass)?;
            } else {
                print!("{}", render::boarding_pass_table(&pass));
            }
        }
        Commands::FlightParams { plane_number, json } => {
            let db = load_database(&config);
            let params = db.flight_parameters(plane_number)?;
            if json {
                print_json(&params)?;
            } else {
                print!("{}", render::flight_parameters_table(&params));
            }
        }
        Commands::CheckGate { ticket_id } => {
            let db = load_database(&config);
            print!("{}", render::gate_table(db.departure_gate(&ticket_id)?));
        }
        Commands::Config { init } => {
            if init {
                let path = config.save(cli.config.as_deref())?;
                tracing::info!("Wrote config to {}", path.display());
            }
            print_json(&config)?;
        }
    }

    Ok(())
}

/// Load every record file, reporting problems without aborting.
fn load_database(config: &AppConfig) -> Database {
    let mut db = Database::new();
    for LoadOutcome { kind, path, result } in db.load_all(&config.data_files()) {
        match result {
            Ok(report) if report.rejected > 0 => eprintln!(
                "{} {} rows from {} were rejected",
                report.rejected,
                kind.as_str(),
                path.display()
            ),
            Ok(_) => {}
            Err(e) => eprintln!("{}", e),
        }
    }
    db
}

fn show(db: &Database, kind: ShowKind, id: Option<&str>, json: bool) -> anyhow::Result<()> {
    let Some(id) = id else {
        return match kind {
            ShowKind::Flights => emit_all(db.flights().values(), json),
            ShowKind::Planes => emit_all(db.planes().values(), json),
            ShowKind::Tickets => emit_all(db.tickets().values(), json),
            ShowKind::Passengers => emit_all(db.passengers().values(), json),
        };
    };

    match kind {
        ShowKind::Flights => {
            let plane_number = parse_plane_number(id)?;
            match db.find_flight(plane_number) {
                Some(flight) => emit_one(flight, json),
                None => bail!("No flight with plane number {}", plane_number),
            }
        }
        ShowKind::Planes => {
            let plane_number = parse_plane_number(id)?;
            match db.find_plane(plane_number) {
                Some(plane) => emit_one(plane, json),
                None => bail!("No plane with plane number {}", plane_number),
            }
        }
        ShowKind::Tickets => match db.find_ticket(id) {
            Some(ticket) => emit_one(ticket, json),
            None => bail!("No ticket with id '{}'", id),
        },
        ShowKind::Passengers => match db.find_passenger(id) {
            Some(passenger) => emit_one(passenger, json),
            None => bail!("No passenger with ticket id '{}'", id),
        },
    }
}

fn parse_plane_number(id: &str) -> anyhow::Result<u32> {
    id.trim()
        .parse()
        .with_context(|| format!("'{}' is not a valid plane number", id))
}

fn emit_all<'a, T, I>(records: I, json: bool) -> anyhow::Result<()>
where
    T: Serialize + std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if json {
        let records: Vec<&T> = records.into_iter().collect();
        print_json(&records)
    } else {
        print!("{}", render::render_records(records));
        Ok(())
    }
}

fn emit_one<T: Serialize + std::fmt::Display>(record: &T, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(record)
    } else {
        println!("{}", record);
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
