use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "urlshort")]
#[command(about = "Redirect URL paths to configured targets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the redirect server
    Serve(ServeArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to (overrides server.bind_addr)
    #[arg(long)]
    pub address: Option<SocketAddr>,

    /// YAML file with path to url map
    #[arg(long)]
    pub yaml: Option<PathBuf>,

    /// JSON file with path to url map
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Reject redirect file entries with a missing or malformed path or url
    #[arg(long)]
    pub strict: bool,

    /// Settings file (defaults to $URLSHORT_CONFIG or config/urlshort.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
