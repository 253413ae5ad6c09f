//! Server configuration parsed from environment variables.
//!
//! Variables:
//! - `DATABASE_URL` (required)
//! - `PORT`: default 3000
//! - `DB_MAX_CONNECTIONS`: default 5
//! - `SEED_ENABLED`: enables the seeding endpoint, default false
//! - `READABLE_COLLECTIONS`: comma separated allow-list, default `resources,events`
//! - `SUBSCRIBER_QUEUE_CAPACITY`: per-socket outbound queue, default 64

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_READABLE_COLLECTIONS: &[&str] = &["resources", "events"];
pub const DEFAULT_SUBSCRIBER_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub seed_enabled: bool,
    pub readable_collections: Vec<String>,
    pub subscriber_queue_capacity: usize,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is missing or a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?;
        let subscriber_queue_capacity = parse_or(
            "SUBSCRIBER_QUEUE_CAPACITY",
            lookup("SUBSCRIBER_QUEUE_CAPACITY"),
            DEFAULT_SUBSCRIBER_QUEUE_CAPACITY,
        )?;
        if subscriber_queue_capacity == 0 {
            return Err(ConfigError::Invalid { key: "SUBSCRIBER_QUEUE_CAPACITY", value: "0".into() });
        }

        let seed_enabled = match lookup("SEED_ENABLED") {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "SEED_ENABLED", value: raw })?,
        };

        let readable_collections = lookup("READABLE_COLLECTIONS")
            .map(|raw| parse_list(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| DEFAULT_READABLE_COLLECTIONS.iter().map(|s| (*s).to_owned()).collect());

        Ok(Self { database_url, port, db_max_connections, seed_enabled, readable_collections, subscriber_queue_capacity })
    }

    /// Whether clients may read (and the seeder may write) `collection`.
    #[must_use]
    pub fn is_readable(&self, collection: &str) -> bool {
        self.readable_collections.iter().any(|c| c == collection)
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
