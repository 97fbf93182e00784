use amzsign_core::{Context, Credential, Error, Result, SignedRequest};
use http::StatusCode;
use log::{debug, warn};

use crate::config::Config;
use crate::params::SearchParameters;
use crate::response::{parse_lookup_response, parse_search_response, ResultRecord};
use crate::sign_request::RequestSigner;

/// Client runs the full sign, send and parse cycle.
///
/// Each call captures its own timestamp, no state is shared between calls.
#[derive(Debug)]
pub struct Client {
    ctx: Context,
    signer: RequestSigner,
    credential: Credential,
}

impl Client {
    /// Create a new client, failing if the config lacks a credential field.
    pub fn new(ctx: Context, config: &Config) -> Result<Self> {
        Ok(Self {
            signer: RequestSigner::new().with_endpoint(config.endpoint()?),
            credential: config.credential()?,
            ctx,
        })
    }

    /// Replace the signer, mostly used to pin the signing time.
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    /// Search items.
    ///
    /// Upstream errors come back as a single [`ResultRecord::Error`].
    pub async fn item_search(&self, params: &SearchParameters) -> Result<Vec<ResultRecord>> {
        let signed = self.signer.sign(params, &self.credential)?;
        let body = self.send(signed).await?;
        parse_search_response(&body)
    }

    /// Look up a single item by ASIN.
    pub async fn item_lookup(&self, asin: &str) -> Result<ResultRecord> {
        let signed = self
            .signer
            .sign(&SearchParameters::lookup(asin), &self.credential)?;
        let body = self.send(signed).await?;
        parse_lookup_response(&body)
    }

    async fn send(&self, signed: SignedRequest) -> Result<String> {
        debug!("sending request to {}", self.signer.endpoint().host());
        let resp = self.ctx.http_send_as_string(signed.to_http_request()?).await?;

        if resp.status() != StatusCode::OK {
            warn!("product advertising responded {}", resp.status());
            return Err(
                Error::transport(format!("unexpected status code: {}", resp.status().as_u16()))
                    .with_context(format!("body: {}", resp.body())),
            );
        }

        Ok(resp.into_body())
    }
}
