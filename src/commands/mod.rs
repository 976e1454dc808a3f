pub mod export;
pub mod import;
pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod seasons;
pub mod stats;
pub mod traits;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure season statistics")]
    Init(init::InitArgs),
    #[command(about = "List seasons with observations")]
    Seasons,
    #[command(about = "Show statistics for one season or all seasons")]
    Stats(stats::StatsArgs),
    #[command(about = "Show observation counts per trait")]
    Traits(traits::TraitsArgs),
    #[command(about = "Import observations from a CSV file", arg_required_else_help = true)]
    Import(import::ImportArgs),
    #[command(about = "Export season statistics")]
    Export(export::ExportArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Seasons => seasons::cmd(),
            Commands::Stats(args) => stats::cmd(args).await,
            Commands::Traits(args) => traits::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Export(args) => export::cmd(args).await,
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
