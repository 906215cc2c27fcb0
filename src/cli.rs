use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::DEFAULT_BIND_ADDRESS;
use commands::{billboards, forecast, serve};

#[derive(Parser)]
#[command(name = "billboard_dashboard")]
#[command(about = "Billboard dashboard backend and terminal client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the billboard API server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:5000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// JSON file with the billboard catalogue
        ///
        /// An array of billboard objects in the `/api/billboards` format.
        /// The built-in catalogue is served when omitted.
        #[arg(short, long, env = "BILLBOARD_CATALOG")]
        catalog: Option<PathBuf>,
    },
    /// List billboards from a running server
    Billboards {
        /// Search query matched against code, region and id
        #[arg(short, long, default_value = "")]
        query: String,

        /// Backend base URL; falls back to BILLBOARD_API_URL
        #[arg(short, long)]
        api_url: Option<String>,
    },
    /// Show the 7-day impression forecast of one billboard
    Forecast {
        /// Billboard code (e.g. B001) or numeric id
        billboard: String,

        /// Backend base URL; falls back to BILLBOARD_API_URL
        #[arg(short, long)]
        api_url: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                catalog,
            } => {
                serve(&bind_address, catalog.as_deref()).await?;
            }
            Commands::Billboards { query, api_url } => {
                billboards(&query, api_url.as_deref()).await?;
            }
            Commands::Forecast { billboard, api_url } => {
                forecast(&billboard, api_url.as_deref()).await?;
            }
        }
        Ok(())
    }
}
