// Configuration management for cwmp-netcore
// Supports CLI arguments, config file (TOML), and environment variables

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::error::{CoreError, CoreResult};
use crate::routes::PROC_NET_ROUTE;

/// cwmp-netcore - default route and CWMP value inspection for a TR-069 CPE
#[derive(Parser, Debug, Clone)]
#[command(name = "cwmp-netcore")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(short, long, env = "CWMP_NETCORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Routing table to read instead of /proc/net/route
    #[arg(long, env = "CWMP_NETCORE_ROUTE_TABLE")]
    pub route_table: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(short, long, env = "CWMP_NETCORE_LOG")]
    pub log_level: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report the default route with hostname and timestamp
    Route,
    /// Print the default route's interface
    Interface,
    /// Print the default gateway, or "none"
    Gateway,
    /// Validate a CWMP boolean and print its canonical form
    Bool { text: String },
    /// Validate a CWMP dateTime and print its canonical form
    Date { text: String },
    /// Coerce text to a parameter type (boolean, int, unsignedInt, float,
    /// string, dateTime, enum:a,b,c)
    Value { kind: String, text: String },
}

/// Configuration file structure (TOML format)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Routing table settings
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Kernel routing table in /proc/net/route format
    #[serde(default = "default_table_path")]
    pub table_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_table_path() -> PathBuf {
    PathBuf::from(PROC_NET_ROUTE)
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        RoutesConfig {
            table_path: default_table_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

/// Merged configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub route_table: PathBuf,
    pub log_level: Level,
    pub json: bool,
    pub command: Command,
}

impl Config {
    /// Load configuration from all sources (CLI args, config file, defaults)
    /// Priority: CLI args > Config file > Defaults
    pub fn load() -> anyhow::Result<Self> {
        let cli_args = CliArgs::parse();

        let config_file = match &cli_args.config {
            Some(path) => load_config_file(path)?,
            None => {
                let default_path = Path::new("cwmp-netcore.toml");
                if default_path.exists() {
                    load_config_file(default_path)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        Ok(Config::merge(cli_args, config_file)?)
    }

    fn merge(cli_args: CliArgs, config_file: ConfigFile) -> CoreResult<Self> {
        let route_table = cli_args
            .route_table
            .unwrap_or(config_file.routes.table_path);
        let log_level = parse_log_level(
            cli_args
                .log_level
                .as_deref()
                .unwrap_or(&config_file.logging.level),
        )?;

        Ok(Config {
            route_table,
            log_level,
            json: cli_args.json,
            command: cli_args.command,
        })
    }
}

fn load_config_file(path: &Path) -> anyhow::Result<ConfigFile> {
    tracing::info!("Loading configuration from: {}", path.display());
    let config_content = std::fs::read_to_string(path)?;
    Ok(toml::from_str::<ConfigFile>(&config_content)?)
}

fn parse_log_level(level_str: &str) -> CoreResult<Level> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(CoreError::Config(format!("Invalid log level: {}", level_str))),
    }
}
