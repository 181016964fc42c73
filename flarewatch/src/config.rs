//! Command-line and environment configuration.
//!
//! Loaded once at startup and immutable for the run. Credentials come
//! from the environment so they stay out of shell history and cron
//! lines.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::notify::DEFAULT_CALLS_URL;
use crate::source::DEFAULT_FEED_URL;

#[derive(Debug, Parser)]
#[command(name = "flarewatch", version, about = "Solar X-ray flare alerting over DAPNET")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub config: Config,
}

#[derive(Debug, Clone, Copy, Default, Subcommand)]
pub enum Command {
    /// Run one alert cycle against the configured threshold (default).
    #[default]
    Watch,
    /// Send a one-off solar-conditions bulletin.
    Bulletin,
}

#[derive(Debug, Args)]
pub struct Config {
    /// Alert threshold as a classified reading.
    #[arg(long, env = "XRAY_THRESHOLD", default_value = "M5.0")]
    pub threshold: String,

    /// DAPNET callsign(s) to page, comma separated.
    #[arg(long, env = "DAPNET_CALLSIGNS", value_delimiter = ',', required = true)]
    pub callsign: Vec<String>,

    /// DAPNET transmitter group.
    #[arg(long, env = "DAPNET_TX_GROUP", default_value = "all")]
    pub transmitter_group: String,

    /// DAPNET account name.
    #[arg(long, env = "DAPNET_USER")]
    pub user: String,

    /// DAPNET account password.
    #[arg(long, env = "DAPNET_PASS", hide_env_values = true)]
    pub password: String,

    /// Where the alert state record lives.
    #[arg(long, env = "XRAY_STATE_FILE", default_value = "xray_alert_state.json")]
    pub state_file: PathBuf,

    /// HamQSL solar XML feed URL.
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// DAPNET calls endpoint.
    #[arg(long, default_value = DEFAULT_CALLS_URL)]
    pub dapnet_url: String,
}
