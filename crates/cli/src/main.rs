use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod chat;
mod config;

use chat::ChatArgs;

/// Patter — LLM role-play training for retail sales teams.
#[derive(Debug, Parser)]
#[command(name = "patter", version, about)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "patter.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run an interactive training session (default when no subcommand is given).
    Chat(ChatArgs),
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration.
    Show,
    /// Check that the configuration loads and the transport can be built.
    Validate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Default to an interactive session when no subcommand is given.
        None => {
            init_tracing();
            let app_config = config::load(&cli.config)?;
            chat::run(app_config, ChatArgs::default()).await
        }
        Some(Command::Chat(args)) => {
            init_tracing();
            let app_config = config::load(&cli.config)?;
            chat::run(app_config, args).await
        }
        Some(Command::Config(ConfigCommand::Show)) => {
            let app_config = config::load(&cli.config)?;
            config::show(&app_config);
            Ok(())
        }
        Some(Command::Config(ConfigCommand::Validate)) => {
            if !config::validate(&cli.config) {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Command::Version) => {
            println!("patter {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Log to stderr, keeping stdout clean for conversation output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
