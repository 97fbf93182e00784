use amzsign_aws_v4::{Config, RequestSigner, ServiceRequest, SignatureLocation};
use amzsign_core::{Context, OsEnv};
use amzsign_http_send_reqwest::ReqwestHttpSend;
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();
    env_logger::init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    let region = config.region().unwrap_or("us-east-1");

    let req = ServiceRequest::get("ec2.amazonaws.com")
        .with_query("Action", "DescribeRegions")
        .with_query("Version", "2013-10-15");
    let signed = RequestSigner::new("ec2", region)
        .with_location(SignatureLocation::Header)
        .sign(&req, &config.credential()?)?;

    println!("Request URL = {}", signed.url);
    for (name, value) in signed.headers.iter().flatten() {
        if name == http::header::AUTHORIZATION {
            println!("{name}: <redacted>");
        } else {
            println!("{name}: {}", value.to_str()?);
        }
    }

    let resp = ctx.http_send_as_string(signed.to_http_request()?).await?;
    println!("Response code: {}", resp.status());
    println!("{}", resp.body());
    Ok(())
}
