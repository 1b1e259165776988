use clap::Subcommand;
use serde_json::json;
use uuid::Uuid;

use crate::cli::{connect, utils::output_success, OutputFormat};
use crate::config::AppConfig;
use crate::database::{NewUser, PgUserStore, UserStore};

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "Create a user")]
    Add {
        #[arg(long, help = "Display name")]
        name: String,
        #[arg(long, help = "Email address (unique)")]
        email: String,
    },

    #[command(about = "Show a user by id")]
    Show {
        #[arg(help = "User id")]
        id: Uuid,
    },
}

pub async fn handle(cmd: UserCommands, config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let database = connect(config).await?;
    let users = PgUserStore::new(&database);

    let result = match cmd {
        UserCommands::Add { name, email } => {
            let name = name.trim().to_string();
            let email = email.trim().to_string();
            if name.is_empty() || email.is_empty() {
                anyhow::bail!("name and email must not be empty");
            }

            let user = users.create(NewUser { name, email }).await?;
            tracing::info!("Created user {}", user.id);
            output_success(output_format, "User created", Some(json!(user)))
        }
        UserCommands::Show { id } => match users.find_by_id(id).await? {
            Some(user) => output_success(output_format, "User found", Some(json!(user))),
            None => Err(anyhow::anyhow!("user {} not found", id)),
        },
    };

    database.close().await;
    result
}
