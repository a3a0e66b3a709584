//! Reflex CLI - play or simulate the click-reaction game

mod board_view;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, play, simulate, ConfigArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reflex")]
#[command(about = "Click the lit targets before the clock runs out", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter directive (overrides RUST_LOG), e.g. "reflex=debug"
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal: type a cell like "b3" to click it
    Play {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Run a headless round with a scripted player
    Simulate {
        #[command(flatten)]
        config: ConfigArgs,

        /// Probability that a click lands on its target
        #[arg(long, default_value = "0.9")]
        accuracy: f64,

        /// Delay between a target lighting up and the click, in milliseconds
        #[arg(long, default_value = "450")]
        reaction_ms: u64,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Print the default config, or write it to a file
    Config {
        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: text, json", s)),
    }
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reflex=info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match cli.command {
        Commands::Play { config } => play::run(config),
        Commands::Simulate {
            config,
            accuracy,
            reaction_ms,
            format,
        } => simulate::run(simulate::SimulateArgs {
            config,
            accuracy,
            reaction_ms,
            format,
        }),
        Commands::Config { output } => config::run(output.as_deref()),
    }
}
