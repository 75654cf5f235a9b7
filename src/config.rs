// src/config.rs
use std::env;
use std::fmt;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.twilio.com";
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 1000;
pub const DEFAULT_LOCALE: &str = "en_US";

/// Credential string that never shows up in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub account_sid: SecretString,
    pub auth_token: SecretString,
    pub api_base_url: String,
    pub page_size: u32,
    pub timeout_secs: Option<u64>,
    pub locale: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_sid = Self::required(&lookup, "TWILIO_ACCOUNT_SID")?;
        let auth_token = Self::required(&lookup, "TWILIO_AUTH_TOKEN")?;

        let api_base_url = lookup("TWILIO_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let page_size = match lookup("TWILIO_PAGE_SIZE") {
            Some(raw) => Self::parse_page_size(&raw)?,
            None => DEFAULT_PAGE_SIZE,
        };

        let timeout_secs = match lookup("TWILIO_TIMEOUT_SECS") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: "TWILIO_TIMEOUT_SECS",
                value: raw.clone(),
            })?),
            None => None,
        };

        Ok(Config {
            account_sid: SecretString::new(account_sid),
            auth_token: SecretString::new(auth_token),
            api_base_url,
            page_size,
            timeout_secs,
            locale: lookup("TWILIO_LOCALE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
        })
    }

    fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(key) {
            Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(ConfigError::Missing(key)),
        }
    }

    fn parse_page_size(raw: &str) -> Result<u32, ConfigError> {
        let invalid = || ConfigError::Invalid {
            key: "TWILIO_PAGE_SIZE",
            value: raw.to_string(),
        };

        let size: u32 = raw.trim().parse().map_err(|_| invalid())?;
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(invalid());
        }
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "token"),
        ]))
        .unwrap();

        assert_eq!(config.account_sid.expose(), "AC123");
        assert_eq!(config.auth_token.expose(), "token");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.locale, "en_US");
    }

    #[test]
    fn test_missing_credentials() {
        let err = Config::from_lookup(lookup_from(&[("TWILIO_AUTH_TOKEN", "token")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TWILIO_ACCOUNT_SID")));

        let err = Config::from_lookup(lookup_from(&[
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TWILIO_AUTH_TOKEN")));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "token"),
            ("TWILIO_API_BASE_URL", "http://127.0.0.1:8080/"),
            ("TWILIO_PAGE_SIZE", "200"),
            ("TWILIO_TIMEOUT_SECS", "15"),
            ("TWILIO_LOCALE", "de_DE"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.page_size, 200);
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.locale, "de_DE");
    }

    #[test]
    fn test_invalid_page_size() {
        for raw in ["0", "1001", "fifty"] {
            let err = Config::from_lookup(lookup_from(&[
                ("TWILIO_ACCOUNT_SID", "AC123"),
                ("TWILIO_AUTH_TOKEN", "token"),
                ("TWILIO_PAGE_SIZE", raw),
            ]))
            .unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { key: "TWILIO_PAGE_SIZE", .. }));
        }
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = SecretString::new("super-secret");
        assert_eq!(format!("{:?}", secret), "SecretString(***)");
    }
}
