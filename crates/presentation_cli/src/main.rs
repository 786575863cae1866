//! Simple Weather CLI
//!
//! Command-line client for a running Simple Weather server.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod lookup;

use clap::{Parser, Subcommand};
use infrastructure::{LogConfig, LogFormat, init_logging};

use crate::lookup::{LookupRequest, fetch, render};

/// Simple Weather CLI
#[derive(Parser)]
#[command(name = "simple-weather-cli")]
#[command(author, version, about = "Simple Weather forecast client", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the forecast for a location
    ///
    /// Example: simple-weather-cli lookup --zip 10001
    /// Example: simple-weather-cli lookup --lat 40.71 --lon -74.01 --raw
    Lookup {
        /// ZIP code
        #[arg(long)]
        zip: Option<String>,

        /// Free-text street address
        #[arg(long)]
        address: Option<String>,

        /// Latitude in degrees
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude in degrees
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Server URL
        #[arg(
            short,
            long,
            env = "SIMPLE_WEATHER_URL",
            default_value = "http://localhost:8787"
        )]
        url: String,

        /// Contact email forwarded to weather.gov
        #[arg(long, env = "SIMPLE_WEATHER_EMAIL")]
        email: Option<String>,

        /// Print the full response as JSON
        #[arg(long)]
        raw: bool,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig {
        format: LogFormat::Text,
        filter: log_filter_from_verbosity(cli.verbose).to_string(),
    })?;

    let client = reqwest::Client::new();

    match cli.command {
        Commands::Lookup {
            zip,
            address,
            lat,
            lon,
            url,
            email,
            raw,
        } => {
            let request = LookupRequest {
                zip,
                address,
                lat,
                lon,
            };

            match fetch(&client, &url, &request, email.as_deref()).await {
                Ok(lookup) if raw => println!("{}", serde_json::to_string_pretty(&lookup)?),
                Ok(lookup) => println!("{}", render(&lookup)),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}
