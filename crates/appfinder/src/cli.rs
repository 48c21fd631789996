//! Command-line interface.
//!
//! Every startup value can come from a flag or its environment variable, so
//! the bot runs unchanged from a shell, a `.env` file, or a container definition.

use crate::LoggingConfig;
use appfinder_cache::{CacheAuth, RedisConfig};
use appfinder_error::ConfigError;
use clap::{ArgAction, Parser, builder::BoolishValueParser};
use std::fmt;
use std::path::PathBuf;

/// Command-line arguments for the bot.
#[derive(Parser, Clone)]
#[command(name = "appfinder")]
#[command(about = "AppFinder - Search the app catalog from Telegram")]
#[command(version)]
pub struct Cli {
    /// Telegram bot token
    #[arg(long, env = "APPFINDER_BOT_TOKEN", hide_env_values = true)]
    pub bot_token: String,

    /// File that receives the log stream
    #[arg(long, env = "APPFINDER_LOG_FILE")]
    pub log_file: PathBuf,

    /// Redis address (`host:port` or `redis://` URL)
    #[arg(long, env = "APPFINDER_REDIS_HOST")]
    pub redis_host: String,

    /// Redis password (may be empty when authentication is ignored)
    #[arg(
        long,
        env = "APPFINDER_REDIS_PASSWORD",
        hide_env_values = true,
        default_value = ""
    )]
    pub redis_password: String,

    /// Connect to Redis without authentication
    #[arg(
        long,
        env = "APPFINDER_IGNORE_REDIS_PASSWORD",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set
    )]
    pub ignore_redis_password: bool,

    /// Settings file (defaults to ./appfinder.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("bot_token", &format_args!("<{} chars>", self.bot_token.len()))
            .field("log_file", &self.log_file)
            .field("redis_host", &self.redis_host)
            .field("redis_password", &"<redacted>")
            .field("ignore_redis_password", &self.ignore_redis_password)
            .field("config", &self.config)
            .field("verbose", &self.verbose)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

impl Cli {
    /// Resolve how the cache connection authenticates.
    ///
    /// # Errors
    /// Returns an error when authentication is enabled but no password was given.
    pub fn cache_auth(&self) -> Result<CacheAuth, ConfigError> {
        if self.ignore_redis_password {
            return Ok(CacheAuth::Disabled);
        }
        if self.redis_password.is_empty() {
            return Err(ConfigError::new(
                "Redis password is required unless APPFINDER_IGNORE_REDIS_PASSWORD is true",
            ));
        }
        Ok(CacheAuth::Password(self.redis_password.clone()))
    }

    /// Cache connection settings.
    pub fn redis_config(&self) -> Result<RedisConfig, ConfigError> {
        Ok(RedisConfig::new(self.redis_host.clone(), self.cache_auth()?))
    }

    /// Logging settings derived from the flags.
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig::new(self.log_file.clone())
            .with_level(if self.verbose { "debug" } else { "info" })
            .with_json(self.json_logs)
    }
}
