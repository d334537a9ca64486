//! Types for SouthXchange API responses

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

use crate::error::{RestError, RestResult};
use crate::timestamp::Timestamp;

// ============================================================================
// Response Envelope
// ============================================================================

/// Either the payload an endpoint expects or the service's own error object.
///
/// The API has no unified response wrapper: list endpoints answer with bare
/// arrays, single-resource endpoints with objects, and failures with
/// `{"error": ...}` or `{"error_code": ...}` under a 200 or 401 status.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// Error object; must stay the first variant, untagged decoding takes
    /// the first that fits
    Error(ExchangeError),
    /// The expected payload
    Data(T),
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a raw response body, surfacing service errors as
    /// [`RestError::Exchange`].
    pub fn decode(raw: &[u8]) -> RestResult<T> {
        match serde_json::from_slice::<Self>(raw)? {
            Envelope::Error(error) => Err(RestError::Exchange(error)),
            Envelope::Data(data) => Ok(data),
        }
    }
}

/// Error payload shapes the exchange emits
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExchangeError {
    /// `{"error": "..."}`
    Message {
        /// Human-readable message from the service
        error: String,
    },
    /// `{"error_code": ...}`
    Code {
        /// Numeric error code from the service
        error_code: i64,
    },
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeError::Message { error } => write!(f, "{}", error),
            ExchangeError::Code { error_code } => write!(f, "error code {}", error_code),
        }
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// 24-hour summary entry for an active market
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    /// Listing currency (e.g. "BTC")
    pub coin: String,
    /// Reference currency (e.g. "USD")
    pub base: String,
}

// ============================================================================
// Account Types
// ============================================================================

/// Balance of a single currency
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    /// Currency code
    pub currency: String,
    /// Total deposited amount
    pub deposited: Decimal,
    /// Amount available for trading or withdrawal
    pub available: Decimal,
    /// Amount pending confirmation
    pub unconfirmed: Decimal,
}

/// An open order
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    /// Order code assigned by the exchange
    pub code: String,
    /// "buy" or "sell"
    #[serde(rename = "Type")]
    pub order_type: String,
    /// Remaining amount
    pub amount: Decimal,
    /// Amount at placement time
    pub original_amount: Decimal,
    /// Limit price
    pub limit_price: Decimal,
    /// Listing currency of the market
    pub listing_currency: String,
    /// Reference currency of the market
    pub reference_currency: String,
}

/// A ledger entry: trade leg, deposit, withdrawal or fee
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    /// When the movement happened
    pub date: Timestamp,
    /// Movement kind reported by the exchange
    #[serde(rename = "Type")]
    pub transaction_type: String,
    /// Movement amount
    pub amount: Decimal,
    /// Balance after the movement
    pub total_balance: Decimal,
    /// Trade price, absent for plain movements
    pub price: Option<Decimal>,
    /// Counter amount of a trade
    pub other_amount: Option<Decimal>,
    /// Counter currency of a trade
    pub other_currency: Option<String>,
    /// Related order code
    pub order_code: Option<String>,
    /// Movement status
    pub status: Option<String>,
    /// On-chain address for deposits/withdrawals
    pub address: Option<String>,
    /// On-chain transaction hash
    pub hash: Option<String>,
}

// ============================================================================
// Funding Types
// ============================================================================

/// Result of a withdrawal request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WithdrawalInfo {
    /// "ok" or a rejection reason
    pub status: String,
    /// Maximum amount withdrawable right now
    pub max: Decimal,
    /// Remaining daily withdrawal allowance
    pub max_daily: Decimal,
    /// Ledger movement id, absent when the request was rejected
    pub movement_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_summary_decodes_from_documented_body() {
        let body = br#"[{"Coin":"BTC","Base":"USD"}]"#;
        let summaries: Vec<MarketSummary> = serde_json::from_slice(body).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].coin, "BTC");
        assert_eq!(summaries[0].base, "USD");
    }

    #[test]
    fn test_balance_decodes_numeric_amounts() {
        let body = br#"[{"Currency":"BTC","Deposited":1.5,"Available":1.25,"Unconfirmed":0}]"#;
        let balances: Vec<Balance> = Envelope::decode(body).unwrap();
        assert_eq!(balances[0].currency, "BTC");
        assert_eq!(balances[0].available, Decimal::new(125, 2));
    }

    #[test]
    fn test_envelope_surfaces_error_message() {
        let body = br#"{"error":"invalid or expired api key"}"#;
        let result = Envelope::<Vec<Balance>>::decode(body);
        match result {
            Err(RestError::Exchange(error)) => {
                assert_eq!(error.to_string(), "invalid or expired api key");
            }
            other => panic!("expected exchange error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_envelope_surfaces_error_code() {
        let body = br#"{"error_code":104}"#;
        let result = Envelope::<Vec<Order>>::decode(body);
        match result {
            Err(RestError::Exchange(error)) => {
                assert!(error.to_string().contains("104"));
            }
            other => panic!("expected exchange error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_transaction_decodes_with_nullable_fields() {
        let body = br#"{
            "Date": "2021-03-04T10:15:30.123",
            "Type": "deposit",
            "Amount": 0.5,
            "TotalBalance": 2.5,
            "Price": null,
            "OtherAmount": null,
            "OtherCurrency": null,
            "OrderCode": null,
            "Status": "confirmed",
            "Address": "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
            "Hash": null
        }"#;
        let transaction: Transaction = serde_json::from_slice(body).unwrap();
        assert_eq!(transaction.transaction_type, "deposit");
        assert!(transaction.price.is_none());
        assert_eq!(transaction.status.as_deref(), Some("confirmed"));
        assert_eq!(transaction.date.to_string(), "2021-03-04T10:15:30.123");
    }

    #[test]
    fn test_withdrawal_info_decodes() {
        let body = br#"{"Status":"ok","Max":10.0,"MaxDaily":100.0,"MovementId":12345}"#;
        let info: WithdrawalInfo = Envelope::decode(body).unwrap();
        assert_eq!(info.status, "ok");
        assert_eq!(info.movement_id, Some(12345));
    }
}
