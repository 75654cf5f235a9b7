//! JSON payloads of the Twilio REST API

use serde::Deserialize;

use crate::models::CallRecord;

/// One page of the Calls collection.
#[derive(Debug, Deserialize)]
pub struct CallPage {
    #[serde(default)]
    pub calls: Vec<CallRecord>,

    /// Path of the following page, absent on the last one.
    #[serde(default)]
    pub next_page_uri: Option<String>,

    #[serde(default)]
    pub page: Option<u32>,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,

    #[serde(default)]
    pub message: Option<String>,

    /// Documentation link for the error code.
    #[serde(default)]
    pub more_info: Option<String>,
}

impl ApiErrorBody {
    pub fn describe(&self) -> String {
        let summary = match (&self.code, &self.message) {
            (Some(code), Some(message)) => format!("[{}] {}", code, message),
            (None, Some(message)) => message.clone(),
            (Some(code), None) => format!("error code {}", code),
            (None, None) => "no error details".to_string(),
        };

        match self.more_info.as_deref().map(str::trim) {
            Some(link) if !link.is_empty() => format!("{} (see {})", summary, link),
            _ => summary,
        }
    }
}
