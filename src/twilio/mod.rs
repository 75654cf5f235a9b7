//! Twilio REST API integration
//!
//! Read-only access to the Calls collection of an account:
//! - `TwilioClient`: authenticated HTTP client, lazily connected
//! - `list_calls`: walks every page of the collection in API order
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::twilio::TwilioClient;
//!
//! let client = TwilioClient::from_config(&config)?;
//! let calls = client.list_calls(None).await?;
//! ```

mod calls;
mod client;
mod types;

pub use client::{TwilioClient, TwilioError};
pub use types::*;
