use std::path::PathBuf;

use anyhow::Context;
use nutriplan_recipe::ImportRecipe;

use crate::config::Config;

/// Loads a JSON array of recipes and inserts them in a single transaction.
pub async fn import_recipes(config: Config, file: PathBuf) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let recipes: Vec<ImportRecipe> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    crate::db::run_migrations(&pool).await?;

    let command = nutriplan_recipe::Command(nutriplan_shared::State::single(pool.clone()));
    let ids = command.import(recipes).await?;
    pool.close().await;

    tracing::info!("{} recipes imported from {}", ids.len(), file.display());

    Ok(())
}
