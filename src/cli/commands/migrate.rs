use crate::cli::{connect, utils::output_success, OutputFormat};
use crate::config::AppConfig;

pub async fn handle(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let database = connect(config).await?;
    database.migrate().await?;
    database.close().await;
    output_success(output_format, "Database schema is up to date", None)
}
