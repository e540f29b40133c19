#![doc = include_str!("../README.md")]

mod commands;
mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, Command, GenerateConfig};
use std::io::{BufWriter, Write};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_telemetry()?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.command {
        Command::Generate(generate_args) => {
            let config = GenerateConfig::try_from(generate_args)?;
            commands::generate(&config, &mut out)?;
        }
        Command::Decode { ids } => commands::decode(&ids, &mut out)?,
        Command::Increment { digits } => commands::increment_digits(&digits, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
