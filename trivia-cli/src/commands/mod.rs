//! Subcommands of the `trivia` binary

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;
use sqlx::PgPool;

use trivia_server::config::resolve_connect_options;
use trivia_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS};

/// Database connection arguments shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (falls back to DB_HOST/DB_PORT/DB_NAME/DB_USER/DB_PASSWORD)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "TRIVIA_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Resolve the URL and open a pool.
    pub async fn connect(&self) -> Result<PgPool> {
        let options = resolve_connect_options(self.database_url.clone())
            .context("Database not configured. Set --database-url, DATABASE_URL, or DB_* in .env")?;

        create_pool_with_options(options, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
