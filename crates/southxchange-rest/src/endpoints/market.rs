//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::client::SouthXchangeClient;
use crate::error::RestResult;
use crate::types::MarketSummary;
use reqwest::Method;
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a SouthXchangeClient,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(client: &'a SouthXchangeClient) -> Self {
        Self { client }
    }

    /// Get the last 24-hour summary of all active markets
    #[instrument(skip(self))]
    pub async fn get_market_summaries(&self) -> RestResult<Vec<MarketSummary>> {
        debug!("Fetching market summaries");

        let raw = self.client.execute(Method::GET, "markets", None, false).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}
