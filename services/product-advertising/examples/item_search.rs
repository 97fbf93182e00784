use std::env;

use amzsign_core::{Context, OsEnv};
use amzsign_http_send_reqwest::ReqwestHttpSend;
use amzsign_product_advertising::{Client, Config, ResultRecord, SearchParameters};
use anyhow::Result;

/// Usage: item_search <keywords> [brand] [search index]
#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();
    env_logger::init();

    let mut args = env::args().skip(1);
    let keywords = SearchParameters::parse_keywords(&args.next().unwrap_or_default());
    let params = SearchParameters::search(keywords)
        .with_brand(args.next().unwrap_or_default())
        .with_search_index(args.next().unwrap_or_default());

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    let client = Client::new(ctx, &config)?;

    for record in client.item_search(&params).await? {
        match record {
            ResultRecord::Item(item) => println!("{}", serde_json::to_string_pretty(&item)?),
            ResultRecord::Error { message } => eprintln!("ERROR: {message}"),
        }
    }
    Ok(())
}
