pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, StorageBackend};
use crate::database::Database;

#[derive(Parser)]
#[command(name = "goal")]
#[command(about = "Goal CLI - administration for the Goal API database")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create or update the database schema")]
    Migrate,

    #[command(about = "User provisioning")]
    User {
        #[command(subcommand)]
        cmd: commands::user::UserCommands,
    },

    #[command(about = "Issue an API token for an existing user")]
    Token(commands::token::TokenArgs),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Migrate => commands::migrate::handle(config, output_format).await,
        Commands::User { cmd } => commands::user::handle(cmd, config, output_format).await,
        Commands::Token(args) => commands::token::handle(args, config, output_format).await,
    }
}

/// Open the configured Postgres database. The memory backend lives inside the
/// server process, so there is nothing for the CLI to administer.
pub(crate) async fn connect(config: &AppConfig) -> anyhow::Result<Database> {
    if config.database.backend == StorageBackend::Memory {
        anyhow::bail!("the CLI requires the postgres storage backend (GOAL_STORAGE=postgres)");
    }
    Ok(Database::connect(&config.database).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_command() {
        let id = uuid::Uuid::new_v4();
        let arg = id.to_string();
        let cli = Cli::try_parse_from(["goal", "--json", "token", arg.as_str()]).unwrap();
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        match cli.command {
            Commands::Token(args) => assert_eq!(args.user_id, id),
            _ => panic!("expected token command"),
        }
    }

    #[test]
    fn rejects_malformed_user_id() {
        assert!(Cli::try_parse_from(["goal", "user", "show", "nope"]).is_err());
    }

    #[tokio::test]
    async fn refuses_memory_backend() {
        let err = connect(&AppConfig::in_memory()).await.unwrap_err();
        assert!(err.to_string().contains("postgres"));
    }
}
