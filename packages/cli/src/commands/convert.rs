use crate::config::{Config, OutputFormat};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pda_engine::{format_value, try_process, EngineError, Notation, ParseError, ProcessResult};

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Expression to convert, e.g. "(10 + 20) * 5"
    pub expression: String,

    /// Notation the expression is written in (infix, postfix, prefix)
    #[arg(short, long)]
    pub from: Option<Notation>,

    /// Notation to convert to (infix, postfix, prefix)
    #[arg(short, long)]
    pub to: Option<Notation>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn convert(args: ConvertArgs, cwd: &str) -> Result<()> {
    super::ensure_expression(&args.expression)?;

    let config = Config::load(cwd)?;
    let from = args.from.unwrap_or(config.default_from);
    let to = args.to.unwrap_or(config.default_to);
    let format = args.format.unwrap_or(config.format);

    let result = try_process(&args.expression, from, to);

    if format == OutputFormat::Json {
        let ok = result.is_ok();
        let json = serde_json::to_string_pretty(&ProcessResult::from(result))?;
        println!("{}", json);
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    match result {
        Ok(conversion) => {
            println!("{} {} → {}", "✓".green(), from, to);
            println!("   Converted: {}", conversion.converted.bright_white().bold());
            println!("   Value:     {}", format_value(conversion.value).cyan());
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", super::report(&args.expression, &err));
            if let Some(tip) = tip(&err) {
                eprintln!("{} {}", "Tip:".dimmed(), tip);
            }
            std::process::exit(1);
        }
    }
}

/// Advice for errors caused by the shape of the expression
fn tip(err: &EngineError) -> Option<&'static str> {
    match err {
        EngineError::Parse(
            ParseError::MismatchedParentheses { .. }
            | ParseError::InvalidPrefixExpression { .. }
            | ParseError::InvalidPostfixExpression { .. }
            | ParseError::InvalidExpression { .. },
        ) => Some("Check for unbalanced parentheses or missing operators."),
        _ => None,
    }
}
