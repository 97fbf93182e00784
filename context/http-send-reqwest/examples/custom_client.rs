use amzsign_core::{Context, OsEnv};
use amzsign_http_send_reqwest::ReqwestHttpSend;
use amzsign_product_advertising::{Client as PaClient, Config};
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();

    // Create a custom reqwest client with specific configuration
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("amzsign-example/1.0")
        .build()?;

    println!("Created custom HTTP client with:");
    println!("  - 30 second timeout");
    println!("  - Max 10 idle connections per host");
    println!("  - Custom user agent");

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    let pa = PaClient::new(ctx, &config)?;

    match pa.item_lookup("0679722769").await {
        Ok(record) => println!("{record:?}"),
        Err(e) => eprintln!("Lookup failed: {e}"),
    }

    Ok(())
}
