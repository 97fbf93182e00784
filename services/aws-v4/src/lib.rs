//! AWS Signature Version 4 signer.
//!
//! Signs GET requests against AWS REST APIs such as IAM and EC2, carrying the
//! signature either in the `X-Amz-Signature` query parameter or in the
//! `Authorization` header.
//!
//! ```
//! use amzsign_aws_v4::{RequestSigner, ServiceRequest, SignatureLocation};
//! use amzsign_core::Credential;
//!
//! # fn main() -> amzsign_core::Result<()> {
//! let cred = Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
//! let req = ServiceRequest::get("ec2.amazonaws.com")
//!     .with_query("Action", "DescribeRegions")
//!     .with_query("Version", "2013-10-15");
//!
//! let signer = RequestSigner::new("ec2", "us-east-1").with_location(SignatureLocation::Header);
//! let signed = signer.sign(&req, &cred)?;
//! assert!(signed.headers.is_some());
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::Config;

mod sign_request;
pub use sign_request::{
    credential_scope, generate_signing_key, string_to_sign, RequestSigner, ServiceRequest,
    SignatureLocation,
};

/// Hex SHA-256 of the empty payload, the payload hash of every GET request.
pub const EMPTY_STRING_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
