//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{ensure_schema, PgStore};
use trivia_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Do not create missing tables on startup
    #[arg(long)]
    pub skip_schema: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting trivia server on {}", args.bind);

    let pool = args.database.connect().await?;

    if !args.skip_schema {
        ensure_schema(&pool)
            .await
            .context("Failed to create trivia tables")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(Arc::new(PgStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
