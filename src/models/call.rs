// src/models/call.rs
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// A call resource as returned by the Calls collection endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallRecord {
    pub sid: String,
    #[serde(with = "rfc2822")]
    pub date_created: DateTime<FixedOffset>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub to: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, with = "rfc2822::option")]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "rfc2822::option")]
    pub end_time: Option<DateTime<FixedOffset>>,
    /// Charged amount in major units; the API reports charges as negatives.
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price_unit: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Timestamps in the `Tue, 31 Aug 2010 20:36:28 +0000` form used by the API.
/// The offset sent by the API is kept as is.
pub(crate) mod rfc2822 {
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer};

    pub fn parse(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc2822(value.trim())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
    }

    pub mod option {
        use super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) if !raw.trim().is_empty() => parse(&raw)
                    .map(Some)
                    .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e))),
                _ => Ok(None),
            }
        }
    }
}
