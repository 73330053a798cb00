//! Run one hardcoded product query and print the resulting record.
//!
//! Requires `OPENAI_API_KEY` in the environment. Any transport or parse
//! failure terminates the run with a nonzero exit.

use structured_query::{ProductQuery, StructuredQueryClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let client = StructuredQueryClient::from_env()?;
    let query = ProductQuery::new("Tell me about the motorola edge 60 ultra.")?;

    let info = client.fetch_product_info(&query).await?;

    println!("Product Name: {}", info.product_name);
    println!("Product Details: {}", info.product_details);
    println!("Tentative Price in INR: {}", info.tentative_price_inr);

    Ok(())
}
