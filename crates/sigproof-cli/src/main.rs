use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use sigproof_cli::config::{default_config_path, load_config_or_default};

#[derive(Parser)]
#[command(name = "sigproof", about = "Verify proof-of-approval signatures on validation results")]
struct Cli {
    /// Config file (defaults to ~/.sigproof/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify every signature in the given request files
    Verify {
        /// Request files; defaults to the `requests` list in the config file
        paths: Vec<PathBuf>,
        /// Print a JSON report instead of one line per result
        #[arg(long)]
        json: bool,
        /// Exit with an error if any signature is invalid
        #[arg(long)]
        strict: bool,
    },
    /// Print canonical messages and their SHA-512 digests
    Message { path: PathBuf },
    /// Show the signer certificate embedded in a request
    Inspect { path: PathBuf },
    /// Add request files to the list `verify` uses by default
    Track {
        /// Request files to add
        paths: Vec<PathBuf>,
        /// Also turn on strict mode in the config file
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Verify { paths, json, strict } => {
            let cfg = load_config_or_default(&config_path)?;
            let paths = if paths.is_empty() { cfg.requests } else { paths };
            if paths.is_empty() {
                bail!("no request files given and none configured");
            }
            let totals = sigproof_cli::commands::verify::run_verify(&paths, json, &mut stdout)?;
            if totals.failed_files > 0 {
                bail!("{} of {} request files could not be verified", totals.failed_files, paths.len());
            }
            if (strict || cfg.strict) && totals.invalid > 0 {
                bail!("{} of {} signatures are invalid", totals.invalid, totals.valid + totals.invalid);
            }
        }
        Commands::Message { path } => {
            sigproof_cli::commands::message::run_message(&path, &mut stdout)?;
        }
        Commands::Inspect { path } => {
            sigproof_cli::commands::inspect::run_inspect(&path, &mut stdout)?;
        }
        Commands::Track { paths, strict } => {
            sigproof_cli::commands::track::run_track(&config_path, &paths, strict, &mut stdout)?;
        }
    }
    Ok(())
}
