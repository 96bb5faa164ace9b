//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use giveaway_core::config::{self, Config};
use giveaway_core::logging::{self, WorkerGuard};

mod commands;

#[derive(Parser)]
#[command(name = "giveaway")]
#[command(version)]
#[command(about = "Lecture giveaway page for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive giveaway page (default)
    Page,

    /// Print all lectures, highest id first
    Lectures,

    /// Draw a winner for a lecture and print it
    Draw {
        /// Lecture id
        #[arg(value_name = "LECTURE_ID")]
        lecture_id: String,

        /// Only draw among in-person attendees
        #[arg(long)]
        presencial_only: bool,

        /// Override the pause before the request, in milliseconds
        #[arg(long, value_name = "N")]
        delay_ms: Option<u64>,
    },

    /// Store a session key
    Login {
        /// Session key (read from stdin when omitted)
        #[arg(long)]
        key: Option<String>,
    },

    /// Remove the stored session
    Logout,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything; multi-threaded because the page
    // blocks its thread while requests run on the workers
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Page);

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Commands::Login { key } => commands::auth::login(key),
        Commands::Logout => commands::auth::logout(),

        Commands::Page => {
            let config = Config::load().context("load config")?;
            let _log = init_logging()?;
            commands::page::run(&config)
        }
        Commands::Lectures => {
            let config = Config::load().context("load config")?;
            let _log = init_logging()?;
            commands::lectures::run(&config).await
        }
        Commands::Draw {
            lecture_id,
            presencial_only,
            delay_ms,
        } => {
            let config = Config::load().context("load config")?;
            let _log = init_logging()?;
            commands::draw::run(
                &config,
                &commands::draw::DrawArgs {
                    lecture_id,
                    presencial_only,
                    delay_ms,
                },
            )
            .await
        }
    }
}

/// Starts file logging for commands that talk to the service. The guard
/// must outlive the command so buffered lines are flushed.
fn init_logging() -> Result<WorkerGuard> {
    logging::init(&config::paths::logs_dir()).context("init logging")
}
