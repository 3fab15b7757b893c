use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: Option<BotConfig>,
    #[serde(default)]
    pub server: Option<ServerConfig>,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BotConfig {
    pub token_env: Option<String>,
    pub channel_env: Option<String>,
    pub guild_env: Option<String>,
    pub moderator: Option<String>,
    pub send_timeout_secs: Option<u64>,
    pub ready_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ServerConfig {
    pub bind: Option<String>,
    #[serde(default)]
    pub cors: Option<CorsConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, anyhow::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Bot credentials and tuning resolved from the environment. The token and
/// the default tournament channel are mandatory; startup must not proceed
/// without them.
#[derive(Debug, Clone)]
pub struct BotSettings {
    pub token: String,
    pub tournament_channel: String,
    pub guild_id: Option<u64>,
    pub moderator: String,
    pub send_timeout: Duration,
    pub ready_timeout: Duration,
}

impl BotSettings {
    pub fn resolve(config: &Config) -> Result<Self, anyhow::Error> {
        let bot = config.bot.clone().unwrap_or_default();
        let token_env = bot.token_env.as_deref().unwrap_or("DISCORD_BOT_TOKEN");
        let channel_env = bot.channel_env.as_deref().unwrap_or("CHANNEL_ID");
        let guild_env = bot.guild_env.as_deref().unwrap_or("GUILD_ID");
        let token = require_env(token_env)?;
        let tournament_channel = require_env(channel_env)?;
        let guild_id = match optional_env(guild_env) {
            Some(value) => Some(
                value
                    .parse::<u64>()
                    .with_context(|| format!("{guild_env} is not a numeric guild id"))?,
            ),
            None => None,
        };
        Ok(Self {
            token,
            tournament_channel,
            guild_id,
            moderator: bot.moderator.unwrap_or_else(|| "bossman".to_string()),
            send_timeout: Duration::from_secs(bot.send_timeout_secs.unwrap_or(5)),
            ready_timeout: Duration::from_secs(bot.ready_timeout_secs.unwrap_or(30)),
        })
    }
}

fn require_env(name: &str) -> Result<String, anyhow::Error> {
    optional_env(name)
        .ok_or_else(|| anyhow::anyhow!("required environment variable {name} is missing or empty"))
}

fn optional_env(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}
