//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::client::SouthXchangeClient;
use crate::error::RestResult;
use crate::types::{Balance, Envelope, Order, Transaction};
use reqwest::Method;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Largest page the service will return
const MAX_PAGE_SIZE: u32 = 1000;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a SouthXchangeClient,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(client: &'a SouthXchangeClient) -> Self {
        Self { client }
    }

    /// Get all balances of the account
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> RestResult<Vec<Balance>> {
        debug!("Fetching account balances");

        let raw = self
            .client
            .execute(Method::POST, "listBalances", None, true)
            .await?;
        Envelope::decode(&raw)
    }

    /// Get currently open orders
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self) -> RestResult<Vec<Order>> {
        debug!("Fetching open orders");

        let raw = self
            .client
            .execute(Method::POST, "listOrders", None, true)
            .await?;
        Envelope::decode(&raw)
    }

    /// Get a page of the account's transaction history
    ///
    /// # Arguments
    /// * `page_index` - Zero-based page to fetch; omitted from the request
    ///   when zero
    /// * `page_size` - Entries per page, capped at 1000; omitted when zero
    /// * `sort_field` - Field to sort by, defaults to `Date`
    /// * `descending` - Sort direction
    #[instrument(skip(self))]
    pub async fn get_transactions(
        &self,
        page_index: u64,
        page_size: u32,
        sort_field: Option<&str>,
        descending: bool,
    ) -> RestResult<Vec<Transaction>> {
        let mut payload = HashMap::new();
        if page_index > 0 {
            payload.insert("PageIndex".to_string(), page_index.to_string());
        }
        let page_size = page_size.min(MAX_PAGE_SIZE);
        if page_size > 0 {
            payload.insert("PageSize".to_string(), page_size.to_string());
        }
        payload.insert(
            "SortField".to_string(),
            sort_field.unwrap_or("Date").to_string(),
        );
        payload.insert("Descending".to_string(), descending.to_string());

        debug!("Fetching transaction history");

        let raw = self
            .client
            .execute(Method::POST, "listTransactions", Some(payload), true)
            .await?;
        let page: TransactionsPage = Envelope::decode(&raw)?;
        Ok(page.result)
    }
}

// Response types specific to account endpoints

/// Page envelope `listTransactions` wraps its results in
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionsPage {
    /// Total entries across all pages
    pub total_elements: i64,
    /// Entries of the requested page
    pub result: Vec<Transaction>,
}
