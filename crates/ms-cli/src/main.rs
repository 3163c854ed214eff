//! Metastore CLI - read and write per-object metadata from the command line

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{ddl, find, get, migrate, rm, set};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        cli::Commands::Ddl => ddl::execute(&cli.global).await,
        cli::Commands::Migrate => migrate::execute(&cli.global).await,
        cli::Commands::Get(args) => get::execute(args, &cli.global).await,
        cli::Commands::Set(args) => set::execute(args, &cli.global).await,
        cli::Commands::Find(args) => find::execute(args, &cli.global).await,
        cli::Commands::Rm(args) => rm::execute(args, &cli.global).await,
    }
}
