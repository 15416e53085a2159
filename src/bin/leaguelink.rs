// src/bin/leaguelink.rs
use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use leaguelink_core::cli::{handlers, Cli, Commands};
use leaguelink_core::config::{Config, DEFAULT_CONFIG_FILE};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    config.validate()?;

    let output = dispatch(cli, &config)?;
    print!("{output}");
    Ok(())
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Config::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => Config::new(),
    };
    config.verbose = cli.verbose;
    Ok(config)
}

fn dispatch(cli: Cli, config: &Config) -> Result<String> {
    let output = match cli.command {
        Commands::Stats { input } => handlers::run_stats(input, config)?,
        Commands::Path { input, from, to } => handlers::run_path(input, &from, &to, config)?,
        Commands::Reach {
            input,
            from,
            degrees,
        } => handlers::run_reach(input, &from, degrees, config)?,
        Commands::Export { input, output } => handlers::run_export(input, &output, config)?,
    };
    Ok(output)
}
