//! Applies or reverts the schema without starting the server.
//!
//! The connection comes from the same layered configuration as the server.

use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use warehouse_api::{config, db, migrator::Migrator};

#[derive(Parser)]
#[command(name = "migration", about = "Manage the warehouse database schema", version)]
struct Cli {
    /// Defaults to `up`
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Apply every pending migration
    Up,
    /// Revert the most recent migration
    Down,
    /// Show applied and pending migrations
    Status,
    /// Drop every table and re-apply all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Up);

    let cfg = config::load_config()?;
    config::init_tracing(cfg.log_level(), cfg.log_json);
    info!("Starting database migration: {:?}", command);

    let pool = db::establish_connection_from_app_config(&cfg).await?;

    match command {
        Command::Up => Migrator::up(&pool, None).await?,
        Command::Down => Migrator::down(&pool, Some(1)).await?,
        Command::Status => Migrator::status(&pool).await?,
        Command::Fresh => Migrator::fresh(&pool).await?,
    }

    info!("Migration completed successfully");
    db::close_pool(pool).await?;

    Ok(())
}
