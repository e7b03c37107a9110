//! Look up a word on the live auto-complete endpoint:
//!
//! ```sh
//! cargo run --example lookup -- 偀
//! cargo run --example lookup -- hello --dict enko --detailed
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sajeon_client::client::DictClient;
use sajeon_config::ClientConfig;
use sajeon_types::types::{DictType, SearchMode};

#[derive(Parser)]
struct Args {
    /// Word to look up
    query: String,

    /// Dictionary wire code (ccko, koko, enko, ...)
    #[arg(long)]
    dict: Option<String>,

    /// Use the detailed search mode
    #[arg(long)]
    detailed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = ClientConfig::from_env();

    if let Some(code) = &args.dict {
        config.dict_type = DictType::from_code(code)
            .ok_or_else(|| anyhow::anyhow!("unknown dictionary code: {code}"))?;
    }
    if args.detailed {
        config.search_mode = SearchMode::Detailed;
    }

    let client = DictClient::new(config);
    match client.search(&args.query).await? {
        Some(entry) => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(entry.to_map()))?
        ),
        None => println!("no match"),
    }

    Ok(())
}
