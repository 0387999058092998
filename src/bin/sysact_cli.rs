/*!
 * sysact CLI - system completion actions
 *
 * Invokes a named completion action against the live system and prints the
 * candidates, either as tab-separated lines or as one JSON document.
 */

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use sysact_core::{Completion, Config, Registry, Request};

#[derive(Parser)]
#[command(name = "sysact_cli")]
#[command(about = "System completion actions - users, groups, processes, PATH and more", long_about = None)]
struct Cli {
    /// Config file (default: $SYSACT_CONFIG or <config dir>/sysact/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available actions
    List,

    /// Complete with a named action
    Complete {
        /// Action name (see `list`)
        action: String,

        /// Partial token under the cursor
        #[arg(short = 'C', long, default_value = "")]
        current: String,

        /// Only keep values starting with this text
        #[arg(short, long)]
        prefix: Option<String>,

        /// Emit JSON instead of tab-separated lines
        #[arg(short, long)]
        json: bool,

        /// Arguments already on the command line
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => {
            let registry = Registry::new(&load_config(cli.config)?);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for (name, description) in registry.list() {
                writeln!(out, "{}\t{}", name, description)?;
            }
        }
        Commands::Complete { action, current, prefix, json, args } => {
            let config = load_config(cli.config)?;
            let registry = Registry::new(&config);
            let action = registry
                .get(&action)
                .ok_or_else(|| anyhow!("unknown action '{}' (try `sysact_cli list`)", action))?;

            let request = Request::new(args, current);
            let mut completion = action.invoke(&config.system_context(), &request);
            if let Some(prefix) = prefix {
                completion = completion.filter_prefix(&prefix);
            }
            debug!("{} candidates", completion.candidates().len());

            emit(&mut io::stdout().lock(), &completion, json)?;
        }
        Commands::Version => {
            println!("sysact_cli v{}", env!("CARGO_PKG_VERSION"));
            println!("System completion actions");
        }
    }
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    Config::discover(path.as_deref()).context("Failed to load configuration")
}

fn emit(writer: &mut impl Write, completion: &Completion, json: bool) -> io::Result<()> {
    if json {
        let document = serde_json::to_string(completion)?;
        return writeln!(writer, "{}", document);
    }

    match completion {
        Completion::Message(text) => writeln!(writer, "{}", text),
        Completion::Candidates(candidates) => {
            for candidate in candidates {
                if candidate.description.is_empty() {
                    writeln!(writer, "{}", candidate.value)?;
                } else {
                    writeln!(writer, "{}\t{}", candidate.value, candidate.description)?;
                }
            }
            Ok(())
        }
    }
}
