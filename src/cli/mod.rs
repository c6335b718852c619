pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quarano-api")]
#[command(about = "Quarano API - contact tracing case management backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP API server")]
    Serve {
        #[arg(long, help = "Port to listen on (overrides QUARANO_API_PORT)")]
        port: Option<u16>,
        #[arg(long, help = "Seed sample data into the database before serving")]
        seed: bool,
    },

    #[command(about = "Apply database migrations to DATABASE_URL")]
    Migrate,

    #[command(about = "Print the stored form of a password")]
    HashPassword {
        #[arg(help = "Plain text password")]
        password: String,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve { port, seed } => commands::serve::handle(port, seed).await,
        Commands::Migrate => commands::migrate::handle().await,
        Commands::HashPassword { password } => commands::password::handle(&password),
    }
}
