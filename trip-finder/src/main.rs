use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use trip_finder::catalog::TripCatalog;
use trip_finder::domain::{Criterion, Trip};
use trip_finder::query::{QueryError, find_trips};

/// Catalog location when no path is given on the command line.
const DEFAULT_DATA_FILE: &str = "data.json";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let data_file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    match run(&data_file) {
        Ok(trips) => {
            for trip in &trips {
                println!("{trip}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Load the catalog, collect the query input, and run the query.
fn run(data_file: &Path) -> Result<Vec<Trip>, QueryError> {
    let catalog = TripCatalog::load(data_file)?;

    println!("Please, specify your departure info:");
    let departure = prompt("departureStation").expect("failed to read stdin");
    let arrival = prompt("arrivalStation").expect("failed to read stdin");

    let values: Vec<String> = Criterion::ALL.iter().map(|c| format!("\"{c}\"")).collect();
    println!(
        "!! -- Keep in mind: valid criteria values are {} (without quotes).",
        values.join(", ")
    );
    let criterion = prompt("criteria").expect("failed to read stdin");

    find_trips(&catalog, &departure, &arrival, &criterion)
}

/// Print a prompt label and read one whitespace-trimmed line from stdin.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line.trim().to_string())
}
