//! stsdb CLI
//!
//! Command-line tool for looking up Slay the Spire cards and relics.
//! Every query prints a JSON result on stdout and exits zero, even when
//! nothing matched; only bad arguments or an unloadable dataset fail.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use stsdb_core::{Dataset, MatchMode, QueryEngine};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stsdb")]
#[command(about = "Deterministic card and relic query toolset", long_about = None)]
#[command(version)]
struct Cli {
    /// Load tables from this directory instead of the bundled dataset
    #[arg(long, env = "STSDB_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Name matching mode (exact or case-insensitive)
    #[arg(long, env = "STSDB_MATCH_MODE", default_value = "case-insensitive", global = true)]
    match_mode: MatchMode,

    /// Indent the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query a card by name
    #[command(name = "query_card", alias = "query-card")]
    QueryCard {
        /// Card name
        name: String,

        /// Requested upgrade count
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        upgrade_times: i64,
    },

    /// Query a relic by name
    #[command(name = "query_relic", alias = "query-relic")]
    QueryRelic {
        /// Relic name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> stsdb_core::Result<()> {
    let dataset = load_dataset(cli.data_dir.as_ref(), cli.match_mode)?;
    let engine = QueryEngine::new(&dataset);

    let output = match cli.command {
        Commands::QueryCard { name, upgrade_times } => {
            render(&engine.query_card(&name, upgrade_times), cli.pretty)?
        }
        Commands::QueryRelic { name } => render(&engine.query_relic(&name), cli.pretty)?,
    };

    println!("{}", output);
    Ok(())
}

fn load_dataset(data_dir: Option<&PathBuf>, mode: MatchMode) -> stsdb_core::Result<Dataset> {
    let dataset = match data_dir {
        Some(dir) => Dataset::load_dir(dir, mode)?,
        None => Dataset::bundled(mode)?,
    };

    debug!(
        cards = dataset.card_count(),
        relics = dataset.relic_count(),
        %mode,
        "dataset ready"
    );

    Ok(dataset)
}

/// Serialize a query result as ASCII-only JSON
fn render<T: Serialize>(result: &T, pretty: bool) -> stsdb_core::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(escape_non_ascii(&json))
}

/// Replace non-ASCII characters with `\uXXXX` escapes (surrogate pairs above the BMP)
///
/// Only valid inside JSON strings, which is the only place serde_json emits them.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{:04x}", unit);
            }
        }
    }
    out
}
