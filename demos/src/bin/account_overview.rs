//! Demo 2: Account Overview
//!
//! Showcases: authenticated endpoints, balances and transaction history
//!
//! Needs SOUTHXCHANGE_API_KEY and SOUTHXCHANGE_API_SECRET in the
//! environment. Set SOUTHXCHANGE_DEBUG=1 to dump requests and responses.
//!
//! Run: cargo run --bin account_overview

use southxchange_rest::{Credentials, SouthXchangeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let creds = Credentials::from_env()?;
    let client = SouthXchangeClient::with_credentials(creds);
    if std::env::var("SOUTHXCHANGE_DEBUG").is_ok() {
        client.set_debug(true);
    }

    println!("Balances");
    println!("  {:<8} {:>18} {:>18}", "CURRENCY", "AVAILABLE", "UNCONFIRMED");
    for balance in client.get_balances().await? {
        println!(
            "  {:<8} {:>18} {:>18}",
            balance.currency, balance.available, balance.unconfirmed
        );
    }

    println!();
    println!("Latest transactions");
    for tx in client.get_transactions(0, 10, None, true).await? {
        println!(
            "  {} {:<10} {:>18} {}",
            tx.date,
            tx.transaction_type,
            tx.amount,
            tx.other_currency.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
