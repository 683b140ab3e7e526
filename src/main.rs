//! petstore server binary

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use petstore::db::{create_pool, schema};
use petstore::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "petstore", about = "HTTP CRUD service for a pets table")]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    bind: SocketAddr,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:pets.db")]
    database_url: String,

    /// DDL statement executed once at startup
    #[arg(long, env = "PETS_SCHEMA", default_value = schema::DEFAULT_SCHEMA)]
    schema: String,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    let pool = create_pool(&cli.database_url)
        .await
        .context("Failed to create database pool")?;

    // Fatal if the table cannot be set up; do not serve without it.
    schema::init(&pool, &cli.schema)
        .await
        .context("Schema bootstrap failed")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
