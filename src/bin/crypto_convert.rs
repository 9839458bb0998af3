//! Cryptocurrency price lookups from the command line
//!
//! Reads the API key from COIN_MARKET_API_KEY and an optional host override
//! from COIN_MARKET_BASE_URL.
//!
//! Usage:
//!   crypto_convert convert --amount 0.5 --from BTC --to USD
//!   crypto_convert listings --limit 5

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use fincalc::crypto::{CryptoClient, CryptoConfig};

#[derive(Parser)]
#[command(name = "crypto_convert", about = "Cryptocurrency price lookups")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an amount between two currency symbols
    Convert {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Show the latest listings
    Listings {
        /// Number of listings to print
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CryptoConfig::from_env().context("loading price API configuration")?;
    let client = CryptoClient::new(config);

    match cli.command {
        Command::Convert { amount, from, to } => {
            let converted = client
                .convert(amount, &from, &to)
                .await
                .with_context(|| format!("converting {} {} to {}", amount, from, to))?;
            println!("{} {} = {} {}", amount, from, converted, to);
        }
        Command::Listings { limit } => {
            let listings = client.latest_listings().await.context("fetching latest listings")?;
            let entries = listings
                .get("data")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();

            println!("{:>5} {:<8} {:<24} {:>16}", "Rank", "Symbol", "Name", "Price (USD)");
            println!("{}", "-".repeat(56));
            for entry in entries.iter().take(limit) {
                let price = entry
                    .pointer("/quote/USD/price")
                    .and_then(Value::as_f64)
                    .unwrap_or(f64::NAN);
                println!(
                    "{:>5} {:<8} {:<24} {:>16.2}",
                    entry.get("cmc_rank").and_then(Value::as_u64).unwrap_or_default(),
                    entry.get("symbol").and_then(Value::as_str).unwrap_or("?"),
                    entry.get("name").and_then(Value::as_str).unwrap_or("?"),
                    price,
                );
            }
        }
    }

    Ok(())
}
