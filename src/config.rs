use crate::constants;

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};

pub const ENDPOINT_VAR: &str = "DOGZ4EVA_ENDPOINT";
pub const LIMIT_VAR: &str = "DOGZ4EVA_LIMIT";

/// Runtime settings for the catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            limit: constants::DEFAULT_LIMIT,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: load_or_default(ENDPOINT_VAR, env::var(ENDPOINT_VAR).ok(), defaults.endpoint),
            limit: load_or_default(LIMIT_VAR, env::var(LIMIT_VAR).ok(), defaults.limit),
        }
    }

    /// Appends `limit` to the endpoint, extending a query string if the
    /// endpoint already carries one.
    pub fn search_url(&self) -> String {
        let endpoint = self.endpoint.trim_end_matches('/');
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!("{endpoint}{separator}limit={}", self.limit)
    }
}

fn load_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = raw else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|error| {
        warn!("Invalid {key} value {raw:?}: {error}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::{load_or_default, Config};

    #[test]
    fn builds_search_url_with_limit() {
        let config = Config::default();
        assert_eq!(config.search_url(), "https://api.thedogapi.com/v1/images/search?limit=20");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let config = Config { endpoint: "http://localhost:1234/search/".to_string(), limit: 3 };
        assert_eq!(config.search_url(), "http://localhost:1234/search?limit=3");
    }

    #[test]
    fn existing_query_string_is_extended() {
        let config = Config {
            endpoint: "http://localhost:1234/search?mime_types=jpg".to_string(),
            limit: 3,
        };
        assert_eq!(config.search_url(), "http://localhost:1234/search?mime_types=jpg&limit=3");
    }

    #[test]
    fn missing_or_invalid_values_fall_back() {
        assert_eq!(load_or_default("LIMIT", None, 20_usize), 20);
        assert_eq!(load_or_default("LIMIT", Some("many".to_string()), 20_usize), 20);
        assert_eq!(load_or_default("LIMIT", Some(" 5 ".to_string()), 20_usize), 5);
    }
}
