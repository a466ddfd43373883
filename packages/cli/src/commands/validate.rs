use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pda_engine::{validate as validate_expression, Notation};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Expression to check
    pub expression: String,

    /// Notation the expression is written in (infix, postfix, prefix)
    #[arg(short, long)]
    pub notation: Option<Notation>,
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    super::ensure_expression(&args.expression)?;

    let config = Config::load(cwd)?;
    let notation = args.notation.unwrap_or(config.default_from);

    if validate_expression(&args.expression, notation) {
        println!("{} valid {} expression", "✓".green(), notation);
        return Ok(());
    }

    println!("{} invalid {} expression", "✗".red(), notation);
    // Same normalization path as `validate`, kept for its error
    if let Err(err) = pda_engine::convert(&args.expression, notation, Notation::Postfix) {
        eprintln!("{}", super::report(&args.expression, &err));
    }
    std::process::exit(1);
}
