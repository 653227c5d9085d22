use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "anekazoo",
    about = "Anekazoo — animal registry over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Bootstrap the schema and serve the HTTP API
    Serve(ConnectArgs),
    /// Create the animals table if it does not exist
    Migrate(ConnectArgs),
    /// Check that the database is reachable
    Check(ConnectArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct ConnectArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Listen address, overrides the config file
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Database URL, overrides the config file
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}
