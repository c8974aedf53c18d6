#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::{io::Write, path::PathBuf, process::ExitCode};

use asset_ledger::{
    AssetStore, ContractError, Context, RedbStore, config::Config, util::logging::init_logging,
};
use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

/// Runs one asset contract function against an on-disk state file.
#[derive(Parser, Debug)]
#[command(name = "asset-ledger", author, version, about, long_about = None)]
struct Args {
    /// State database file (created if missing)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Function to invoke: exists, create, read, update, delete
    function: String,

    /// Positional arguments, asset id first. Taken verbatim, so values may start with '-'
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Args {
    fn config(&self) -> Config {
        self.db.as_ref().map_or_else(Config::default, Config::new)
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{code}: {err}", code = .0.code(), err = .0)]
    Contract(#[from] ContractError),
    #[error("failed to write response: {0}")]
    Output(#[from] std::io::Error),
}

/// Opens the configured state, runs the invocation and writes any payload to `out`.
fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let config = args.config();
    let store = RedbStore::new(&config.db_path).map_err(ContractError::from)?;
    info!(path = %config.db_path.display(), contract = AssetStore::NAME, "state opened");

    let ctx = Context::new(&store);
    let payload = AssetStore::new().invoke(&ctx, &args.function, &args.args)?;
    if !payload.is_empty() {
        out.write_all(&payload)?;
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging(LevelFilter::WARN);
    let args = Args::parse();

    match run(&args, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, function = %args.function, "invocation failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
