use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Command line and environment configuration for the server
#[derive(Debug, Clone, Parser)]
#[command(name = "novena-tracker", about = "Tracks novenas and their donations")]
pub struct AppConfig {
    /// JSON file holding every novena; created on the first write
    #[arg(long, value_name = "PATH", env = "NOVENA_DATA_FILE", default_value = "novenas.json")]
    pub data_file: PathBuf,

    /// Address the HTTP server listens on
    #[arg(long, value_name = "ADDR", env = "NOVENA_BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,
}
