mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{batch, convert, init, validate, BatchArgs, ConvertArgs, InitArgs, ValidateArgs};
use tracing_subscriber::EnvFilter;

/// PDA - convert arithmetic expressions between infix, postfix and prefix notation
#[derive(Parser, Debug)]
#[command(name = "pda")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a pda.config.json with default notations
    Init(InitArgs),

    /// Convert an expression and print its value
    Convert(ConvertArgs),

    /// Check whether an expression is well formed
    Validate(ValidateArgs),

    /// Convert every expression in a file
    Batch(BatchArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Convert(args) => convert(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
        Command::Batch(args) => batch(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
