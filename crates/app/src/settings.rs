//! Handles settings for the application. Configuration is read from
//! `splitter.toml` (optional), then `SPLITTER_*` environment variables, then
//! command line flags.
use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "splitter.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log level for the `tracing` env filter.
    pub level: String,
    /// Session file (JSON) with the roster and the receipts.
    pub session: Option<String>,
    /// Print the final summary as JSON.
    pub summary_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            session: None,
            summary_json: false,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "splitter", about = "Split itemized receipts between friends")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Session file to split (JSON).
    #[arg(long, short)]
    session: Option<String>,
    /// Override log level (e.g. debug).
    #[arg(long)]
    level: Option<String>,
    /// Print the final summary as JSON.
    #[arg(long)]
    json: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let args = Args::parse();

        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SPLITTER"))
            .build()?
            .try_deserialize()?;

        if let Some(session) = args.session {
            settings.session = Some(session);
        }
        if let Some(level) = args.level {
            settings.level = level;
        }
        if args.json {
            settings.summary_json = true;
        }

        Ok(settings)
    }
}
