//! CLI entry and dispatch.

use ajfses_core::{config, logging};
use anyhow::{Context, Result};
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "ajfses")]
#[command(version)]
#[command(about = "ajfses admin console")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hostname used to pick the API endpoint
    #[arg(long, global = true, env = "AJFSES_HOST", default_value = "")]
    host: String,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive console (default)
    Console,
    /// Show a single status dialog and exit once it is dismissed
    Notify {
        /// Dialog title
        #[arg(long)]
        title: String,
        /// Dialog message
        #[arg(long)]
        message: String,
        /// success, error or info (anything else is shown as info)
        #[arg(long, default_value = "info")]
        severity: String,
    },
    /// Inspect or seed the cached session credentials
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Convert between local dates and canonical UTC instants
    Date {
        #[command(subcommand)]
        command: DateCommands,
    },
    /// Advance the header logo and print the variant now shown
    Logo,
    /// Print the API base URL for the host
    ApiUrl,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum AuthCommands {
    /// Report whether a credential pair is cached
    Status,
    /// Cache a credential pair in persistent storage
    Login {
        #[arg(long)]
        token: String,
        #[arg(long)]
        user: String,
    },
    /// Remove the cached credential pair from persistent storage
    Logout,
}

#[derive(clap::Subcommand)]
enum DateCommands {
    /// YYYY-MM-DD (local midnight) to a canonical UTC instant
    ToUtc {
        #[arg(value_name = "DATE")]
        date: String,
        /// Viewer offset as ±HH:MM (default: this machine's timezone)
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,
    },
    /// Canonical instant to the viewer's YYYY-MM-DD
    ToLocal {
        #[arg(value_name = "INSTANT")]
        instant: String,
        /// Viewer offset as ±HH:MM (default: this machine's timezone)
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,
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

    // Logging follows the config when it parses; a broken config is reported
    // by the command that needs it.
    let log_config = config::Config::load().unwrap_or_default();
    let _log_guard = match logging::init(&log_config) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, host } = cli;
    // `config` commands must work even when the file is broken.
    let load_config = || config::Config::load().context("load config");

    // default to the console
    let Some(command) = command else {
        return commands::console::dashboard(&load_config()?, &host).await;
    };

    match command {
        Commands::Console => commands::console::dashboard(&load_config()?, &host).await,
        Commands::Notify {
            title,
            message,
            severity,
        } => {
            commands::console::notify(&load_config()?, &host, &title, &message, &severity).await
        }
        Commands::Auth { command } => match command {
            AuthCommands::Status => {
                commands::auth::status();
                Ok(())
            }
            AuthCommands::Login { token, user } => commands::auth::login(&token, &user),
            AuthCommands::Logout => commands::auth::logout(),
        },
        Commands::Date { command } => match command {
            DateCommands::ToUtc { date, offset } => {
                commands::date::to_utc(&date, offset.as_deref())
            }
            DateCommands::ToLocal { instant, offset } => {
                commands::date::to_local(&instant, offset.as_deref())
            }
        },
        Commands::Logo => commands::logo::advance(&load_config()?),
        Commands::ApiUrl => {
            commands::api::url(&load_config()?, &host);
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
