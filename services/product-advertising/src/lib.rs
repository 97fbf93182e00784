//! Amazon Product Advertising API signer and response parser.
//!
//! ```
//! use amzsign_core::Credential;
//! use amzsign_product_advertising::{RequestSigner, SearchParameters};
//!
//! # fn main() -> amzsign_core::Result<()> {
//! let cred = Credential::new("access_key_id", "secret_access_key").with_associate_tag("mytag-20");
//! let params = SearchParameters::search(["shirts"]).with_search_index("Fashion");
//!
//! let signed = RequestSigner::new().sign(&params, &cred)?;
//! assert!(signed.url.contains("&Signature="));
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;

mod params;
pub use params::{Operation, SearchParameters};

mod sign_request;
pub use sign_request::{Endpoint, RequestSigner};

pub mod response;
pub use response::{
    extract_error, normalize, parse_envelope, parse_lookup_response, parse_search_response,
    ItemRecord, ResultRecord, UpstreamError,
};

mod client;
pub use client::Client;
