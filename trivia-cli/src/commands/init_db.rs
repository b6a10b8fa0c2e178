//! Table bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::ensure_schema;

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the `categories` and `questions` tables if they are missing
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    ensure_schema(&pool)
        .await
        .context("Failed to create trivia tables")?;

    println!("Trivia tables are ready");
    Ok(())
}
