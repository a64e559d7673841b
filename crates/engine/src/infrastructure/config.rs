//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use lotto_domain::{DrawRange, OutcomeMessages};

/// Server and draw configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface to bind
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// CORS allowed origins (comma-separated, or "*" for any). `None` disables CORS.
    pub cors_allowed_origins: Option<String>,
    /// Draw configuration
    pub lotto: LottoConfig,
}

/// Draw configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LottoConfig {
    /// Range used for any bound the request leaves out
    pub default_range: DrawRange,
    /// Text shown for each outcome
    pub messages: OutcomeMessages,
    /// Seed for a reproducible generator; OS-seeded when absent
    pub rng_seed: Option<u64>,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            default_range: DrawRange::default(),
            messages: OutcomeMessages::default(),
            rng_seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let server_port = match ["SERVER_PORT", "PORT"]
            .into_iter()
            .find_map(|key| var(key).map(|value| (key, value)))
        {
            Some((key, port)) => port
                .parse()
                .with_context(|| format!("{key} must be a valid port number, got {port:?}"))?,
            None => 3000,
        };

        let default_min = parse_var(var("LOTTO_DEFAULT_MIN"), "LOTTO_DEFAULT_MIN")?
            .unwrap_or(DrawRange::DEFAULT_MIN);
        let default_max = parse_var(var("LOTTO_DEFAULT_MAX"), "LOTTO_DEFAULT_MAX")?
            .unwrap_or(DrawRange::DEFAULT_MAX);
        let default_range = DrawRange::new(default_min, default_max)
            .context("LOTTO_DEFAULT_MIN and LOTTO_DEFAULT_MAX must form a valid range")?;

        let defaults = OutcomeMessages::default();
        let messages = OutcomeMessages::new(
            lookup("LOTTO_WIN_MESSAGE").unwrap_or(defaults.win),
            lookup("LOTTO_LOSE_MESSAGE").unwrap_or(defaults.lose),
        )
        .context("LOTTO_WIN_MESSAGE and LOTTO_LOSE_MESSAGE must not be blank")?;

        let rng_seed = parse_var::<u64>(var("LOTTO_RNG_SEED"), "LOTTO_RNG_SEED")?;

        Ok(Self {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
            lotto: LottoConfig {
                default_range,
                messages,
                rng_seed,
            },
        })
    }
}

fn parse_var<T>(value: Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .map(|raw| {
            raw.parse()
                .with_context(|| format!("{key} has an invalid value {raw:?}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).expect("defaults load");
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cors_allowed_origins, None);
        assert_eq!(config.lotto, LottoConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("LOTTO_DEFAULT_MIN", "10"),
            ("LOTTO_DEFAULT_MAX", "30"),
            ("LOTTO_WIN_MESSAGE", "Jackpot"),
            ("LOTTO_LOSE_MESSAGE", "Next time"),
            ("LOTTO_RNG_SEED", "7"),
            ("CORS_ALLOWED_ORIGINS", "*"),
        ])
        .expect("overrides load");

        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cors_allowed_origins.as_deref(), Some("*"));
        assert_eq!(config.lotto.default_range.min(), 10);
        assert_eq!(config.lotto.default_range.max(), 30);
        assert_eq!(config.lotto.messages.win, "Jackpot");
        assert_eq!(config.lotto.messages.lose, "Next time");
        assert_eq!(config.lotto.rng_seed, Some(7));
    }

    #[test]
    fn server_port_takes_precedence_over_port() {
        let config = load(&[("SERVER_PORT", "4000"), ("PORT", "5000")]).expect("load");
        assert_eq!(config.server_port, 4000);
    }

    #[test]
    fn invalid_default_range_is_rejected() {
        let err = load(&[("LOTTO_DEFAULT_MIN", "10"), ("LOTTO_DEFAULT_MAX", "10")])
            .expect_err("empty range must fail");
        assert!(err.to_string().contains("valid range"));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(load(&[("SERVER_PORT", "not-a-port")]).is_err());
        assert!(load(&[("LOTTO_DEFAULT_MAX", "ten")]).is_err());
        assert!(load(&[("LOTTO_RNG_SEED", "-1")]).is_err());
    }

    #[test]
    fn bad_port_error_names_the_variable_that_was_set() {
        let err = load(&[("PORT", "80a")]).expect_err("bad PORT must fail");
        let msg = err.to_string();
        assert!(msg.starts_with("PORT must be"), "message {msg}");

        let err = load(&[("SERVER_PORT", "99999")]).expect_err("out of range port must fail");
        assert!(err.to_string().starts_with("SERVER_PORT must be"));
    }

    #[test]
    fn blank_message_is_rejected() {
        assert!(load(&[("LOTTO_WIN_MESSAGE", "   ")]).is_err());
    }
}
