//! REST API client for the SouthXchange cryptocurrency exchange
//!
//! This crate provides a typed client for the SouthXchange HTTP API,
//! covering market summaries, account management, and fund movements.
//!
//! # Features
//!
//! - **Market Data**: 24-hour summaries of all active markets
//! - **Account**: Balances, open orders, transaction history
//! - **Funding**: Deposit address generation and withdrawals
//!
//! # Authentication
//!
//! Private endpoints sign the raw JSON request body with HMAC-SHA512 keyed
//! by the account secret; the hex-encoded tag travels in a `Hash` header
//! alongside `key` and `nonce` fields embedded in the body.
//!
//! # Example
//!
//! ```no_run
//! use southxchange_rest::{Credentials, SouthXchangeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = SouthXchangeClient::new();
//!     let markets = client.get_market_summaries().await?;
//!     println!("{} active markets", markets.len());
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = SouthXchangeClient::with_credentials(creds);
//!     let balances = auth_client.get_balances().await?;
//!     println!("Balances: {:?}", balances);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Timeouts
//!
//! Every call races against the configured timeout (30 seconds unless
//! overridden). A call that loses the race returns [`RestError::Timeout`];
//! the in-flight request is left to the transport's own lifecycle. There is
//! no retry logic: one call, one attempt.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod timestamp;
pub mod types;

// Re-export main types
pub use auth::Credentials;
pub use client::{ClientConfig, SouthXchangeClient};
pub use error::{RestError, RestResult};
pub use timestamp::Timestamp;

// Re-export endpoint-specific types
pub use types::{
    Balance, Envelope, ExchangeError, MarketSummary, Order, Transaction, WithdrawalInfo,
};
