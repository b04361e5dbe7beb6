//! `dayview` CLI — lay out calendar events for a day view from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out today's events (stdin → stdout)
//! cat events.json | dayview layout
//!
//! # Lay out a specific day against a custom window
//! dayview layout -i events.json --day 2012-12-25 --start-time 8:00 --end-time 18:00
//!
//! # Lay out every day in the file, pretty-printed, to a file
//! dayview layout -i events.json --all --pretty -o layout.json
//!
//! # List the days present and how many events each holds
//! dayview days -i events.json
//! ```
//!
//! Input is a JSON array of `{id?, start, end, title?, location?}` records.
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dayview_engine::view::all_days;
use dayview_engine::{day_view, decode_events, EventStore, VisibleWindow};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dayview", version, about = "Day view layout for calendar events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log layout details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute {top, left, width, height} for each event
    Layout {
        /// Input file, `-` or omitted for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file, `-` or omitted for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Start of the visible window, HH:MM
        #[arg(long, default_value = "9:00")]
        start_time: String,
        /// End of the visible window, HH:MM
        #[arg(long, default_value = "21:00")]
        end_time: String,
        /// Day to show, YYYY-MM-DD (defaults to today)
        #[arg(long, conflicts_with = "all")]
        day: Option<String>,
        /// Emit every day in the input, keyed by date
        #[arg(long)]
        all: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the days present in the input with their event counts
    Days {
        /// Input file, `-` or omitted for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Layout {
            input,
            output,
            start_time,
            end_time,
            day,
            all,
            pretty,
        } => {
            let window = VisibleWindow::parse(&start_time, &end_time)
                .context("Invalid visible window")?;
            let day = match day.as_deref() {
                Some(raw) => parse_day(raw)?,
                None => Local::now().date_naive(),
            };
            let store = load_store(input.as_deref(), day, window)?;

            let json = if all {
                to_json(&all_days(&store), pretty)?
            } else {
                let placed = day_view(&store, day);
                info!(%day, events = placed.len(), "day view ready");
                to_json(&placed, pretty)?
            };
            write_layout(output.as_deref(), &json)?;
        }
        Commands::Days { input } => {
            let today = Local::now().date_naive();
            let store = load_store(input.as_deref(), today, VisibleWindow::default())?;
            for (day, events) in store.groups() {
                println!("{}  {}", day, events.len());
            }
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Decode the input document and lay it out. Minute-offset timestamps in the
/// input are anchored to `reference_day`.
fn load_store(path: Option<&Path>, reference_day: NaiveDate, window: VisibleWindow) -> Result<EventStore> {
    let json = read_events(path)?;
    let events = decode_events(&json, reference_day).context("Failed to decode events")?;
    debug!(events = events.len(), "decoded input");
    EventStore::with_events(events, window).context("Failed to lay out events")
}

fn parse_day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid day '{}': expected YYYY-MM-DD", raw))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Stdin or stdout stand-in for a path argument.
const STDIO: &str = "-";

fn file_arg(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| *p != Path::new(STDIO))
}

/// Read the events document from `path`, or from stdin when it is absent or `-`.
fn read_events(path: Option<&Path>) -> Result<String> {
    let mut json = String::new();
    match file_arg(path) {
        Some(path) => {
            File::open(path)
                .and_then(|mut file| file.read_to_string(&mut json))
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
        }
        None => {
            io::stdin()
                .lock()
                .read_to_string(&mut json)
                .context("Failed to read from stdin")?;
        }
    }
    Ok(json)
}

/// Write `json` plus a newline to `path`, or to stdout when it is absent or `-`.
fn write_layout(path: Option<&Path>, json: &str) -> Result<()> {
    match file_arg(path) {
        Some(path) => {
            let context = || format!("Failed to write file: {}", path.display());
            let mut file = File::create(path).with_context(context)?;
            writeln!(file, "{}", json).with_context(context)?;
        }
        None => {
            writeln!(io::stdout().lock(), "{}", json).context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
