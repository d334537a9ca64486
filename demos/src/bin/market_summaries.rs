//! Demo 1: Market Summary Listing
//!
//! Showcases: public endpoint access, no credentials needed
//!
//! Run: cargo run --bin market_summaries

use southxchange_rest::SouthXchangeClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = SouthXchangeClient::new();
    let summaries = client.get_market_summaries().await?;

    println!("{} active markets", summaries.len());
    for market in &summaries {
        println!("  {}/{}", market.coin, market.base);
    }

    Ok(())
}
