use std::fmt::{Display, Formatter};

use crate::utils::percent_encode_query;

/// Encoding applied to the raw HMAC output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureEncoding {
    /// Standard base64 with padding, used by product advertising requests.
    Base64,
    /// Lowercase hex, used by signature v4.
    Hex,
}

/// Signature derived from a canonical request.
///
/// A signature is never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    value: String,
    encoding: SignatureEncoding,
}

impl Signature {
    /// Wrap a base64 encoded signature.
    pub fn base64(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            encoding: SignatureEncoding::Base64,
        }
    }

    /// Wrap a hex encoded signature.
    pub fn hex(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            encoding: SignatureEncoding::Hex,
        }
    }

    /// The encoded signature value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The encoding of this signature.
    pub fn encoding(&self) -> SignatureEncoding {
        self.encoding
    }

    /// The signature value ready to be placed in a query string.
    ///
    /// Base64 output may contain `+`, `/` and `=` which must be escaped, hex
    /// output is returned as is.
    pub fn to_query_value(&self) -> String {
        match self.encoding {
            SignatureEncoding::Base64 => percent_encode_query(&self.value),
            SignatureEncoding::Hex => self.value.clone(),
        }
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
