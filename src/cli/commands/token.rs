use clap::Args;
use serde_json::json;
use uuid::Uuid;

use crate::auth::generate_jwt;
use crate::cli::{connect, utils::output_success, OutputFormat};
use crate::config::AppConfig;
use crate::database::{PgUserStore, UserStore};

#[derive(Args)]
pub struct TokenArgs {
    #[arg(help = "Id of the user the token authenticates")]
    pub user_id: Uuid,
}

pub async fn handle(args: TokenArgs, config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let database = connect(config).await?;
    let user = PgUserStore::new(&database).find_by_id(args.user_id).await?;
    database.close().await;

    let user = user.ok_or_else(|| anyhow::anyhow!("user {} not found", args.user_id))?;
    let token = generate_jwt(&config.security, user.id)?;

    output_success(
        output_format,
        &format!("Token issued for {}", user.email),
        Some(json!({
            "user_id": user.id,
            "expires_in_hours": config.security.jwt_expiry_hours,
            "token": token,
        })),
    )
}
