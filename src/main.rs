//! Memtable demo program entry
//!
//! Builds a small `users` table, runs the condition given on the command
//! line (default `age > 26`) and prints the matches and the JSON report.

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use memtable::query::tokenize;
use memtable::types::LogLevel;
use memtable::{Attribute, TableBuilder, TableResult};
use std::process::ExitCode;
use tracing::{error, info};

const DEFAULT_CONDITION: &str = "age > 26";

fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(condition: &str) -> TableResult<()> {
    let mut table = TableBuilder::new("users")
        .attribute(Attribute::new("name", "string"))
        .attribute(Attribute::new("age", "int"))
        .build();

    table.add_row(&["name", "age"], &["Ada", "30"])?;
    table.add_row(&["name", "age"], &["Grace", "25"])?;
    table.add_row(&["name", "age"], &["Alan", "41"])?;
    info!(table = %table, "demo table ready");

    let tokens = tokenize(condition);
    let columns: Vec<&str> = table.attributes().iter().map(|a| a.name()).collect();
    let rows = table.select(&columns, &tokens)?;

    println!("{} matching row(s) for `{}`", rows.len(), condition);
    for row in &rows {
        let cells: Vec<String> = row.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        println!("  {}", cells.join(" "));
    }

    match table.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => error!(error = %e, "failed to render report"),
    }

    Ok(())
}

fn main() -> ExitCode {
    init_logging(LogLevel::Info);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let condition = if args.is_empty() {
        DEFAULT_CONDITION.to_string()
    } else {
        args.join(" ")
    };

    match run(&condition) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
