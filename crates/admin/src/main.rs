//! `folio-admin` -- maintenance commands for the portfolio database.
//!
//! # Environment variables
//!
//! | Variable       | Required | Description                   |
//! |----------------|----------|-------------------------------|
//! | `DATABASE_URL` | yes      | Postgres connection string    |
//!
//! Migrations are applied before any command runs.

mod commands;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::Command;

#[derive(Parser, Debug)]
#[command(author, version, about = "Portfolio maintenance commands")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_admin=info,folio_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = folio_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    folio_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let result = commands::execute(&pool, cli.command).await;
    pool.close().await;
    result
}
