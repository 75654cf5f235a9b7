//! Calls API - read the call log of the account

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

use super::client::{TwilioClient, TwilioError};
use super::types::CallPage;
use crate::models::CallRecord;

impl TwilioClient {
    /// URL of the first page of the Calls collection.
    pub fn calls_url(&self, limit: Option<usize>) -> String {
        let page_size = match limit {
            Some(limit) if limit > 0 => self.page_size.min(u32::try_from(limit).unwrap_or(u32::MAX)),
            _ => self.page_size,
        };

        format!(
            "{}/2010-04-01/Accounts/{}/Calls.json?PageSize={}",
            self.base_url(),
            self.account_sid(),
            page_size
        )
    }

    /// Reads calls in API order, following `next_page_uri` until the last
    /// page or until `limit` records are collected. A page link that was
    /// already visited ends the walk.
    #[instrument(skip(self))]
    pub async fn list_calls(&self, limit: Option<usize>) -> Result<Vec<CallRecord>, TwilioError> {
        let mut calls = Vec::new();
        let mut next_url = Some(self.calls_url(limit));
        let mut visited = HashSet::new();

        while let Some(url) = next_url.take() {
            let page: CallPage = self.get(&url).await?;
            visited.insert(url);

            debug!(
                "Twilio calls page: page={:?}, records={}",
                page.page,
                page.calls.len()
            );

            calls.extend(page.calls);

            if let Some(limit) = limit {
                if calls.len() >= limit {
                    calls.truncate(limit);
                    break;
                }
            }

            next_url = page
                .next_page_uri
                .filter(|uri| !uri.trim().is_empty())
                .map(|uri| self.resolve(&uri))
                .filter(|next| {
                    let repeated = visited.contains(next);
                    if repeated {
                        warn!("Twilio calls page repeats an earlier page, stopping: {}", next);
                    }
                    !repeated
                });
        }

        info!("Twilio calls read: records={}, pages={}", calls.len(), visited.len());

        Ok(calls)
    }
}
