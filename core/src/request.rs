use std::fmt::{Display, Formatter, Write};

use bytes::Bytes;
use http::HeaderMap;
use http::Method;

use crate::{Error, Result};

/// Scheme selects the canonical layout, the signature engine and where the
/// signature ends up in the final request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Product advertising query signing: fixed parameter order, base64 HMAC-SHA256.
    ProductAdvertising,
    /// Signature V4 with the signature carried in `X-Amz-Signature`.
    SignatureV4Query,
    /// Signature V4 with the signature carried in the `Authorization` header.
    SignatureV4Header,
}

impl Scheme {
    /// Returns true if this scheme uses the signature v4 layout.
    pub fn is_signature_v4(self) -> bool {
        matches!(self, Scheme::SignatureV4Query | Scheme::SignatureV4Header)
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Scheme::ProductAdvertising => f.write_str("product-advertising"),
            Scheme::SignatureV4Query => f.write_str("signature-v4-query"),
            Scheme::SignatureV4Header => f.write_str("signature-v4-header"),
        }
    }
}

/// Deterministic representation of a request that signing operates over.
///
/// The serialized form is a pure function of these fields. Builders capture
/// the timestamp before constructing this value, nothing is mutated later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    /// Layout used to serialize this request.
    pub scheme: Scheme,
    /// HTTP method.
    pub method: Method,
    /// HTTP host, without scheme.
    pub host: String,
    /// Percent encoded path.
    pub path: String,
    /// Percent encoded query pairs in their final order.
    pub query: Vec<(String, String)>,
    /// Lowercase header pairs sorted by name, signature v4 only.
    pub canonical_headers: Option<Vec<(String, String)>>,
    /// Lowercase sorted header names, signature v4 only.
    pub signed_headers: Option<Vec<String>>,
    /// Hex SHA-256 of the payload, signature v4 only.
    pub payload_hash: Option<String>,
}

impl CanonicalRequest {
    /// Convert query pairs into `k1=v1&k2=v2`.
    ///
    /// Pairs are expected to be percent encoded already, separators are
    /// written verbatim.
    pub fn query_string(&self) -> String {
        let mut s = String::with_capacity(self.query_size());

        for (idx, (k, v)) in self.query.iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }

            s.push_str(k);
            s.push('=');
            s.push_str(v);
        }

        s
    }

    /// Signed header names joined by `;`.
    pub fn signed_headers_string(&self) -> String {
        self.signed_headers
            .as_ref()
            .map(|v| v.join(";"))
            .unwrap_or_default()
    }

    /// Serialize into the string the signature is computed over.
    ///
    /// Product advertising:
    ///
    /// ```shell
    /// GET
    /// webservices.amazon.com
    /// /onca/xml
    /// AWSAccessKeyId=...&...&Version=2013-08-01
    /// ```
    ///
    /// Signature v4:
    ///
    /// ```shell
    /// GET
    /// /
    /// Action=DescribeRegions&Version=2013-10-15
    /// host:ec2.amazonaws.com
    /// x-amz-date:20150830T123600Z
    ///
    /// host;x-amz-date
    /// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
    /// ```
    pub fn canonical_string(&self) -> Result<String> {
        // 256 is specially chosen to avoid reallocation for most requests.
        let mut f = String::with_capacity(256);

        match self.scheme {
            Scheme::ProductAdvertising => {
                writeln!(f, "{}", self.method)?;
                writeln!(f, "{}", self.host)?;
                writeln!(f, "{}", self.path)?;
                write!(f, "{}", self.query_string())?;
            }
            Scheme::SignatureV4Query | Scheme::SignatureV4Header => {
                let payload_hash = self.payload_hash.as_deref().ok_or_else(|| {
                    Error::unexpected("signature v4 canonical request requires payload hash")
                })?;

                writeln!(f, "{}", self.method)?;
                writeln!(f, "{}", self.path)?;
                writeln!(f, "{}", self.query_string())?;
                for (name, value) in self.canonical_headers.iter().flatten() {
                    writeln!(f, "{name}:{value}")?;
                }
                writeln!(f)?;
                writeln!(f, "{}", self.signed_headers_string())?;
                write!(f, "{payload_hash}")?;
            }
        }

        Ok(f)
    }

    #[inline]
    fn query_size(&self) -> usize {
        self.query
            .iter()
            .map(|(k, v)| k.len() + v.len() + 2)
            .sum::<usize>()
    }
}

/// The signed artifact handed to the transport.
///
/// Assemblers never perform network I/O, they only produce this value.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// HTTP method.
    pub method: Method,
    /// Fully signed URL, including scheme, host, path and query.
    pub url: String,
    /// Extra headers to send, present for header based signing only.
    pub headers: Option<HeaderMap>,
}

impl SignedRequest {
    /// Build an `http::Request` with an empty body out of this signed request.
    pub fn to_http_request(&self) -> Result<http::Request<Bytes>> {
        let mut req = http::Request::builder()
            .method(self.method.clone())
            .uri(self.url.as_str())
            .body(Bytes::new())?;

        if let Some(headers) = &self.headers {
            req.headers_mut()
                .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header;
    use http::HeaderValue;
    use pretty_assertions::assert_eq;

    fn v4_request() -> CanonicalRequest {
        CanonicalRequest {
            scheme: Scheme::SignatureV4Header,
            method: Method::GET,
            host: "ec2.amazonaws.com".to_string(),
            path: "/".to_string(),
            query: vec![
                ("Action".to_string(), "DescribeRegions".to_string()),
                ("Version".to_string(), "2013-10-15".to_string()),
            ],
            canonical_headers: Some(vec![
                ("host".to_string(), "ec2.amazonaws.com".to_string()),
                ("x-amz-date".to_string(), "20150830T123600Z".to_string()),
            ]),
            signed_headers: Some(vec!["host".to_string(), "x-amz-date".to_string()]),
            payload_hash: Some(
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855".to_string(),
            ),
        }
    }

    #[test]
    fn test_signature_v4_canonical_string() {
        let expected = "GET\n/\nAction=DescribeRegions&Version=2013-10-15\nhost:ec2.amazonaws.com\nx-amz-date:20150830T123600Z\n\nhost;x-amz-date\ne3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

        assert_eq!(
            v4_request().canonical_string().expect("must serialize"),
            expected
        );
    }

    #[test]
    fn test_signature_v4_requires_payload_hash() {
        let mut req = v4_request();
        req.payload_hash = None;

        assert!(req.canonical_string().is_err());
    }

    #[test]
    fn test_product_advertising_canonical_string() {
        let req = CanonicalRequest {
            scheme: Scheme::ProductAdvertising,
            method: Method::GET,
            host: "webservices.amazon.com".to_string(),
            path: "/onca/xml".to_string(),
            query: vec![
                ("Operation".to_string(), "ItemLookup".to_string()),
                ("ItemId".to_string(), "0679722769".to_string()),
            ],
            canonical_headers: None,
            signed_headers: None,
            payload_hash: None,
        };

        assert_eq!(
            req.canonical_string().expect("must serialize"),
            "GET\nwebservices.amazon.com\n/onca/xml\nOperation=ItemLookup&ItemId=0679722769"
        );
        assert_eq!(req.signed_headers_string(), "");
    }

    #[test]
    fn test_signed_request_to_http_request() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amz-date", HeaderValue::from_static("20150830T123600Z"));
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("AWS4-HMAC-SHA256 Credential=..."),
        );

        let signed = SignedRequest {
            method: Method::GET,
            url: "https://ec2.amazonaws.com/?Action=DescribeRegions&Version=2013-10-15"
                .to_string(),
            headers: Some(headers),
        };

        let req = signed.to_http_request().expect("must build");
        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.uri().host(), Some("ec2.amazonaws.com"));
        assert_eq!(
            req.uri().query(),
            Some("Action=DescribeRegions&Version=2013-10-15")
        );
        assert_eq!(req.headers()["x-amz-date"], "20150830T123600Z");
        assert!(req.body().is_empty());
    }
}
