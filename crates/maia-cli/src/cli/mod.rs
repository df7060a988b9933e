//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use maia_core::api::MaiaClient;
use maia_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "maia")]
#[command(version = "0.1")]
#[command(about = "Terminal chat client for the Maia assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backend base URL (overrides the config file)
    #[arg(long, global = true, env = "MAIA_API_URL", value_name = "URL")]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the chat UI (default when no command is given)
    Chat {
        /// Session to open, as an id or a `/chat/{id}` route
        #[arg(value_name = "SESSION_ID")]
        session: Option<String>,
    },

    /// Manage chat sessions
    Sessions {
        #[command(subcommand)]
        command: SessionCommands,
    },

    /// Prints a session's transcript
    History {
        #[arg(value_name = "SESSION_ID")]
        id: String,
    },

    /// Sends one prompt to a session and prints the reply
    Send {
        #[arg(value_name = "SESSION_ID")]
        id: String,
        /// The prompt to send
        #[arg(value_name = "PROMPT")]
        prompt: String,
    },

    /// Line-mode chat on the single-session /chat endpoint
    Legacy,

    /// Checks that the backend is reachable
    Status,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum SessionCommands {
    /// Lists sessions, most recent first
    List,
    /// Creates a session
    New {
        /// Title for the session (defaults to the configured title)
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Save the backend URL to the config file
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, api_url } = cli;

    // Config commands must work even when the file is broken.
    let command = match command {
        Some(Commands::Config { command }) => return config_command(command),
        other => other,
    };

    let mut config = config::Config::load().context("load config")?;
    if let Some(url) = api_url {
        config.api_url = url;
    }

    let _log_guard = match logging::init(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    let client = MaiaClient::from_config(&config).context("create backend client")?;

    // default to chat mode
    let Some(command) = command else {
        return commands::chat::run(&config, client, None).await;
    };

    match command {
        Commands::Chat { session } => commands::chat::run(&config, client, session).await,
        Commands::Sessions { command } => match command {
            SessionCommands::List => commands::sessions::list(&client).await,
            SessionCommands::New { title } => {
                let title = title.as_deref().unwrap_or_else(|| config.session_title());
                commands::sessions::new(&client, title).await
            }
        },
        Commands::History { id } => commands::history::show(&client, &id).await,
        Commands::Send { id, prompt } => commands::send::run(client, &id, &prompt).await,
        Commands::Legacy => commands::legacy::run(client).await,
        Commands::Status => commands::status::run(&client).await,
        Commands::Config { command } => config_command(command),
    }
}

fn config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            commands::config::path();
            Ok(())
        }
        ConfigCommands::Init => commands::config::init(),
        ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
    }
}
