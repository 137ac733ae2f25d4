use clap::Parser;

use crate::{Backend, StoreError};

pub const BIND_ADDRESS_DEFAULT: &str = "0.0.0.0:6390";

/// In-memory product catalog served over RESP.
#[derive(Parser, Debug, Clone)]
#[command(name = "simple-catalog")]
#[command(version)]
pub struct Config {
    /// Address the server listens on
    #[arg(short, long, env = "CATALOG_BIND", default_value = BIND_ADDRESS_DEFAULT)]
    pub bind: String,

    /// Database to select at startup (clients can still switch with USE)
    #[arg(short, long, env = "CATALOG_DATABASE")]
    pub database: Option<String>,

    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Builds a backend, applying the startup database selection if one was given.
    pub fn build_backend(&self) -> Result<Backend, StoreError> {
        let backend = Backend::new();
        if let Some(name) = &self.database {
            backend.configure(name)?;
        }
        Ok(backend)
    }
}
