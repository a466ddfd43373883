use crate::config::{Config, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pda_engine::{format_value, process, Notation, ProcessResult};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with one expression per line; blank lines and lines starting with '#' are skipped
    pub input: PathBuf,

    /// Notation the expressions are written in (infix, postfix, prefix)
    #[arg(short, long)]
    pub from: Option<Notation>,

    /// Notation to convert to (infix, postfix, prefix)
    #[arg(short, long)]
    pub to: Option<Notation>,

    /// Output format (json prints one object per line)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    line: usize,
    input: &'a str,
    #[serde(flatten)]
    result: ProcessResult,
}

pub fn batch(args: BatchArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let from = args.from.unwrap_or(config.default_from);
    let to = args.to.unwrap_or(config.default_to);
    let format = args.format.unwrap_or(config.format);

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Cannot read {}", args.input.display()))?;

    let expressions = expression_lines(&content);
    info!(count = expressions.len(), %from, %to, "Processing batch");

    let failures = run_lines(&expressions, from, to, format)?;

    if format == OutputFormat::Text {
        println!();
        println!("   Expressions: {}", expressions.len());
        if failures > 0 {
            println!("   {} {}", "Errors:".red(), failures);
        } else {
            println!("   {} No errors", "✓".green());
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Process and print each line, returning how many failed
fn run_lines(
    expressions: &[(usize, &str)],
    from: Notation,
    to: Notation,
    format: OutputFormat,
) -> Result<usize> {
    let mut failures = 0;
    for &(line, input) in expressions {
        let result = process(input, from, to);
        if !result.is_success() {
            failures += 1;
        }

        match format {
            OutputFormat::Json => {
                let entry = BatchEntry {
                    line,
                    input,
                    result,
                };
                println!("{}", serde_json::to_string(&entry)?);
            }
            OutputFormat::Text => print_text(line, input, &result),
        }
    }
    Ok(failures)
}

fn print_text(line: usize, input: &str, result: &ProcessResult) {
    match result {
        ProcessResult::Success { converted, value } => println!(
            "{} {:>4}: {}  =  {}",
            "✓".green(),
            line,
            converted,
            format_value(*value).cyan()
        ),
        ProcessResult::Error { message } => println!(
            "{} {:>4}: {}  ({})",
            "✗".red(),
            line,
            input,
            message.red()
        ),
    }
}

/// Non-blank, non-comment lines with their 1-based line numbers
fn expression_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
