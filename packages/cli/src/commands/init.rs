use crate::config::{Config, OutputFormat, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pda_engine::Notation;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Default input notation
    #[arg(short, long, default_value = "infix")]
    pub from: Notation,

    /// Default output notation
    #[arg(short, long, default_value = "postfix")]
    pub to: Notation,

    /// Default output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Force overwrite existing config
    #[arg(long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = Config::path(cwd);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config {
        default_from: args.from,
        default_to: args.to,
        format: args.format,
    };

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!(
        "  Converting {} → {} by default",
        config.default_from.to_string().cyan(),
        config.default_to.to_string().cyan()
    );

    Ok(())
}
