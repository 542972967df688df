mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, init, inspect, validate, ApplyArgs, InitArgs, InspectArgs, ValidateArgs};
use tracing_subscriber::EnvFilter;

/// Formcraft CLI - Build and check form schemas from the terminal
#[derive(Parser, Debug)]
#[command(name = "formcraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show passing files and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Formcraft project
    Init(InitArgs),

    /// Check forms before publishing
    Validate(ValidateArgs),

    /// Print a form's element tree and pages
    Inspect(InspectArgs),

    /// Run an edit script against a form
    Apply(ApplyArgs),
}

/// `RUST_LOG` wins; otherwise warnings, or everything from debug up with --verbose
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Validate(args) => validate(args, cli.verbose, &cwd).map(|_| ()),
            Command::Inspect(args) => inspect(args, &cwd),
            Command::Apply(args) => apply(args, &cwd).map(|_| ()),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
