//! Private funding endpoints
//!
//! Deposit address generation and withdrawals. These endpoints require
//! authentication.

use crate::client::SouthXchangeClient;
use crate::error::RestResult;
use crate::types::{Envelope, WithdrawalInfo};
use reqwest::Method;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Private funding endpoints
pub struct FundingEndpoints<'a> {
    client: &'a SouthXchangeClient,
}

impl<'a> FundingEndpoints<'a> {
    pub(crate) fn new(client: &'a SouthXchangeClient) -> Self {
        Self { client }
    }

    /// Generate or retrieve a deposit address for a currency.
    ///
    /// The service answers with a bare JSON string; the surrounding quotes
    /// are stripped.
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g. "BTC")
    #[instrument(skip(self))]
    pub async fn get_deposit_address(&self, currency: &str) -> RestResult<String> {
        let mut payload = HashMap::new();
        payload.insert("currency".to_string(), currency.to_string());

        debug!("Requesting deposit address for {}", currency);

        let raw = self
            .client
            .execute(Method::POST, "generatenewaddress", Some(payload), true)
            .await?;
        let address = String::from_utf8_lossy(&raw);
        Ok(address.trim_matches('"').to_string())
    }

    /// Withdraw funds to an address.
    ///
    /// # Arguments
    /// * `address` - Destination address
    /// * `currency` - Currency code (e.g. "BTC")
    /// * `amount` - Quantity to withdraw; trailing zeros are not sent
    #[instrument(skip(self))]
    pub async fn withdraw(
        &self,
        address: &str,
        currency: &str,
        amount: Decimal,
    ) -> RestResult<WithdrawalInfo> {
        let mut payload = HashMap::new();
        payload.insert("currency".to_string(), currency.to_string());
        payload.insert("address".to_string(), address.to_string());
        payload.insert("amount".to_string(), amount.normalize().to_string());

        debug!("Requesting withdrawal of {} {}", amount, currency);

        let raw = self
            .client
            .execute(Method::POST, "withdraw", Some(payload), true)
            .await?;
        Envelope::decode(&raw)
    }
}
