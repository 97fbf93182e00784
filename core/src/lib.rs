//! Core components for signing Amazon API requests.
//!
//! This crate provides the foundational types shared by the amzsign services.
//! It defines the canonical request model that both signing schemes operate on,
//! the signing strategy trait, and the collaborators a caller plugs in.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Credential**: the caller supplied access key, secret key and optional associate tag
//! - **CanonicalRequest**: the deterministic representation of a request that gets signed
//! - **SignRequest**: the strategy trait implemented by every signature engine
//! - **SignedRequest**: the final artifact, a signed URL plus optional headers
//! - **Context**: a container that holds implementations for HTTP sending and environment access
//!
//! ## Example
//!
//! ```
//! use amzsign_core::{CanonicalRequest, Credential, Scheme, Signature, SignRequest};
//! use amzsign_core::hash::base64_hmac_sha256;
//! use amzsign_core::time::DateTime;
//!
//! // Define your signing strategy.
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     fn sign_request(
//!         &self,
//!         req: &CanonicalRequest,
//!         cred: &Credential,
//!         _now: DateTime,
//!     ) -> amzsign_core::Result<Signature> {
//!         let content = req.canonical_string()?;
//!         Ok(Signature::base64(base64_hmac_sha256(
//!             cred.secret_access_key.as_bytes(),
//!             content.as_bytes(),
//!         )))
//!     }
//! }
//! ```
//!
//! ## Utilities
//!
//! The crate also provides utility modules:
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction and percent encoding

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod credential;
pub use credential::Credential;

mod api;
pub use api::SignRequest;
mod request;
pub use request::{CanonicalRequest, Scheme, SignedRequest};
mod signature;
pub use signature::{Signature, SignatureEncoding};
