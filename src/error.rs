// src/error.rs
use thiserror::Error;

use crate::money::MoneyError;
use crate::twilio::TwilioError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Twilio error: {0}")]
    Twilio(#[from] TwilioError),

    #[error("Price formatting error for call {call_sid}: {source}")]
    Price {
        call_sid: String,
        #[source]
        source: MoneyError,
    },

    #[error("Locale error: {0}")]
    Locale(MoneyError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReporterError {
    /// True for failures that mean the account could not be reached with
    /// the configured credentials or environment.
    pub fn is_credential_failure(&self) -> bool {
        match self {
            ReporterError::Config(_) => true,
            ReporterError::Twilio(e) => e.is_credential_failure(),
            _ => false,
        }
    }
}
