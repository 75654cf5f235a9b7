//! Seam between the report pipeline and the remote call log

use async_trait::async_trait;

use crate::models::CallRecord;
use crate::twilio::{TwilioClient, TwilioError};

/// Source of call records for the report.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CallSource: Send + Sync {
    /// Fetch calls in the order the remote API returns them.
    async fn fetch_calls(&self, limit: Option<usize>) -> Result<Vec<CallRecord>, TwilioError>;
}

#[async_trait]
impl CallSource for TwilioClient {
    async fn fetch_calls(&self, limit: Option<usize>) -> Result<Vec<CallRecord>, TwilioError> {
        self.list_calls(limit).await
    }
}
