use crate::constants::{
    ALGORITHM, AWS4_REQUEST, X_AMZ_ALGORITHM, X_AMZ_CREDENTIAL, X_AMZ_DATE, X_AMZ_DATE_QUERY,
    X_AMZ_EXPIRES, X_AMZ_SIGNATURE, X_AMZ_SIGNED_HEADERS,
};
use crate::EMPTY_STRING_SHA256;
use amzsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use amzsign_core::time::{format_date, format_iso8601, now, DateTime};
use amzsign_core::utils::{percent_encode_path, percent_encode_query};
use amzsign_core::{
    CanonicalRequest, Credential, Error, Result, Scheme, SignRequest, Signature, SignedRequest,
};
use http::header::{self, HeaderName};
use http::uri::Scheme as UriScheme;
use http::{HeaderMap, HeaderValue, Method, Uri};
use log::debug;
use percent_encoding::percent_decode_str;
use std::fmt::Write;
use std::time::Duration;

/// Where the signature v4 signature is carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureLocation {
    /// `Authorization` header plus `x-amz-date` header.
    #[default]
    Header,
    /// `X-Amz-*` query parameters ending with `X-Amz-Signature`.
    Query,
}

impl SignatureLocation {
    /// The scheme this location corresponds to.
    pub fn scheme(self) -> Scheme {
        match self {
            SignatureLocation::Header => Scheme::SignatureV4Header,
            SignatureLocation::Query => Scheme::SignatureV4Query,
        }
    }
}

/// A GET request against an AWS REST API, before signing.
///
/// Query values are raw, they are percent encoded while canonicalizing.
#[derive(Debug, Clone)]
pub struct ServiceRequest {
    /// HTTP method.
    pub method: Method,
    /// URI scheme used to build the final URL.
    pub uri_scheme: UriScheme,
    /// HTTP host, like `iam.amazonaws.com`.
    pub host: String,
    /// Request path, `/` when empty.
    pub path: String,
    /// Raw query pairs.
    pub query: Vec<(String, String)>,
    /// Expiration of a query signed request, written as `X-Amz-Expires`.
    pub expires_in: Option<Duration>,
}

impl ServiceRequest {
    /// Create a GET request against `https://{host}/`.
    pub fn get(host: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            uri_scheme: UriScheme::HTTPS,
            host: host.into(),
            path: "/".to_string(),
            query: Vec::new(),
            expires_in: None,
        }
    }

    /// Parse a GET request out of an URL like `https://ec2.amazonaws.com/?Action=DescribeRegions`.
    pub fn from_url(url: &str) -> Result<Self> {
        let uri: Uri = url.parse()?;
        let host = uri
            .authority()
            .ok_or_else(|| {
                Error::invalid_parameters("request without authority is invalid for signing")
            })?
            .to_string();

        Ok(Self {
            method: Method::GET,
            uri_scheme: uri.scheme().cloned().unwrap_or(UriScheme::HTTPS),
            host,
            path: uri.path().to_string(),
            query: uri
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),
            expires_in: None,
        })
    }

    /// Set the request path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Push a raw query pair.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the expiration used by query signing.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = Some(expires_in);
        self
    }
}

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug)]
pub struct RequestSigner {
    service: String,
    region: String,
    location: SignatureLocation,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for AWS V4 with header placement.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),
            location: SignatureLocation::default(),

            time: None,
        }
    }

    /// Choose where the signature is carried.
    pub fn with_location(mut self, location: SignatureLocation) -> Self {
        self.location = location;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing or replaying a request.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The scheme implemented by this signer.
    pub fn scheme(&self) -> Scheme {
        self.location.scheme()
    }

    /// Sign the request, capturing the signing time once.
    pub fn sign(&self, req: &ServiceRequest, cred: &Credential) -> Result<SignedRequest> {
        let now = self.time.unwrap_or_else(now);
        self.sign_at(req, cred, now)
    }

    /// Sign the request at the given time.
    pub fn sign_at(
        &self,
        req: &ServiceRequest,
        cred: &Credential,
        now: DateTime,
    ) -> Result<SignedRequest> {
        cred.check(self.scheme())?;

        let creq = self.build_canonical_request(req, cred, now)?;
        let signature = self.sign_request(&creq, cred, now)?;

        let mut url = format!("{}://{}{}", req.uri_scheme, creq.host, creq.path);
        let query = creq.query_string();

        match self.location {
            SignatureLocation::Query => {
                write!(url, "?{query}&{X_AMZ_SIGNATURE}={signature}")?;

                Ok(SignedRequest {
                    method: creq.method,
                    url,
                    headers: None,
                })
            }
            SignatureLocation::Header => {
                if !query.is_empty() {
                    write!(url, "?{query}")?;
                }

                let mut headers = HeaderMap::new();
                headers.insert(
                    HeaderName::from_static(X_AMZ_DATE),
                    HeaderValue::try_from(format_iso8601(now))?,
                );

                let mut authorization = HeaderValue::from_str(&format!(
                    "{ALGORITHM} Credential={}/{}, SignedHeaders={}, Signature={}",
                    cred.access_key_id,
                    credential_scope(now, &self.region, &self.service),
                    creq.signed_headers_string(),
                    signature
                ))?;
                authorization.set_sensitive(true);
                headers.insert(header::AUTHORIZATION, authorization);

                Ok(SignedRequest {
                    method: creq.method,
                    url,
                    headers: Some(headers),
                })
            }
        }
    }

    /// Build the canonical request for `req`.
    ///
    /// `now` must be the same instant later passed to [`SignRequest::sign_request`].
    pub fn build_canonical_request(
        &self,
        req: &ServiceRequest,
        cred: &Credential,
        now: DateTime,
    ) -> Result<CanonicalRequest> {
        let host = req.host.trim().to_lowercase();
        if host.is_empty() {
            return Err(Error::invalid_parameters("host is required for signing"));
        }

        let mut canonical_headers = vec![(header::HOST.as_str().to_string(), host.clone())];
        if self.location == SignatureLocation::Header {
            canonical_headers.push((X_AMZ_DATE.to_string(), format_iso8601(now)));
        }
        canonical_headers.sort();
        let signed_headers: Vec<String> =
            canonical_headers.iter().map(|(k, _)| k.clone()).collect();

        let mut query = req.query.clone();
        if self.location == SignatureLocation::Query {
            query.push((X_AMZ_ALGORITHM.into(), ALGORITHM.into()));
            query.push((
                X_AMZ_CREDENTIAL.into(),
                format!(
                    "{}/{}",
                    cred.access_key_id,
                    credential_scope(now, &self.region, &self.service)
                ),
            ));
            query.push((X_AMZ_DATE_QUERY.into(), format_iso8601(now)));
            if let Some(expire) = req.expires_in {
                query.push((X_AMZ_EXPIRES.into(), expire.as_secs().to_string()));
            }
            query.push((X_AMZ_SIGNED_HEADERS.into(), signed_headers.join(";")));
        }

        Ok(CanonicalRequest {
            scheme: self.scheme(),
            method: req.method.clone(),
            host,
            path: canonicalize_path(&req.path)?,
            query: canonicalize_query(query),
            canonical_headers: Some(canonical_headers),
            signed_headers: Some(signed_headers),
            payload_hash: Some(EMPTY_STRING_SHA256.to_string()),
        })
    }
}

impl SignRequest for RequestSigner {
    fn sign_request(
        &self,
        req: &CanonicalRequest,
        cred: &Credential,
        now: DateTime,
    ) -> Result<Signature> {
        if !req.scheme.is_signature_v4() {
            return Err(Error::invalid_parameters(format!(
                "signature v4 signer can't sign {} requests",
                req.scheme
            )));
        }

        let creq = req.canonical_string()?;
        debug!("calculated canonical request: {creq}");

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = credential_scope(now, &self.region, &self.service);
        debug!("calculated scope: {scope}");

        let string_to_sign = string_to_sign(&creq, now, &scope);
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&cred.secret_access_key, now, &self.region, &self.service);
        Ok(Signature::hex(hex_hmac_sha256(
            &signing_key,
            string_to_sign.as_bytes(),
        )))
    }
}

/// Credential scope: `20150830/us-east-1/iam/aws4_request`
pub fn credential_scope(time: DateTime, region: &str, service: &str) -> String {
    format!("{}/{region}/{service}/{AWS4_REQUEST}", format_date(time))
}

/// StringToSign:
///
/// ```shell
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(canonical_request: &str, time: DateTime, scope: &str) -> String {
    format!(
        "{ALGORITHM}\n{}\n{scope}\n{}",
        format_iso8601(time),
        hex_sha256(canonical_request.as_bytes())
    )
}

/// Derive the signing key. Every stage works on raw HMAC bytes.
pub fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}

fn canonicalize_path(path: &str) -> Result<String> {
    if path.is_empty() {
        return Ok("/".to_string());
    }

    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map_err(|e| Error::invalid_parameters("path is not valid utf-8").with_source(e))?;
    Ok(percent_encode_path(&decoded))
}

fn canonicalize_query(query: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut query: Vec<(String, String)> = query
        .into_iter()
        .map(|(k, v)| (percent_encode_query(&k), percent_encode_query(&v)))
        .collect();
    // Sort by encoded param name, then value.
    query.sort();
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn test_time() -> DateTime {
        Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap()
    }

    fn test_credential() -> Credential {
        Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY")
    }

    #[test]
    fn test_generate_signing_key() {
        let key = generate_signing_key(
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            test_time(),
            "us-east-1",
            "iam",
        );

        assert_eq!(
            hex::encode(key),
            "c4afb1cc5771d871763a393e44b703571b55cc28424d1a5e86da6ed3c154a4b9"
        );
    }

    #[test]
    fn test_credential_scope() {
        assert_eq!(
            credential_scope(test_time(), "us-east-1", "iam"),
            "20150830/us-east-1/iam/aws4_request"
        );
    }

    #[test]
    fn test_canonical_request_header_location() -> Result<()> {
        let req = ServiceRequest::get("ec2.amazonaws.com")
            .with_query("Version", "2013-10-15")
            .with_query("Action", "DescribeRegions");
        let signer = RequestSigner::new("ec2", "us-east-1");

        let creq = signer.build_canonical_request(&req, &test_credential(), test_time())?;
        assert_eq!(
            creq.canonical_string()?,
            "GET\n/\nAction=DescribeRegions&Version=2013-10-15\nhost:ec2.amazonaws.com\nx-amz-date:20150830T123600Z\n\nhost;x-amz-date\ne3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        Ok(())
    }

    #[test]
    fn test_canonical_request_query_location() -> Result<()> {
        let req = ServiceRequest::get("iam.amazonaws.com")
            .with_query("Action", "CreateUser")
            .with_query("UserName", "NewUser")
            .with_query("Version", "2010-05-08")
            .with_expires_in(Duration::from_secs(30));
        let signer =
            RequestSigner::new("iam", "us-east-1").with_location(SignatureLocation::Query);

        let creq = signer.build_canonical_request(&req, &test_credential(), test_time())?;
        assert_eq!(
            creq.query_string(),
            "Action=CreateUser&UserName=NewUser&Version=2010-05-08&X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Credential=AKIDEXAMPLE%2F20150830%2Fus-east-1%2Fiam%2Faws4_request&X-Amz-Date=20150830T123600Z&X-Amz-Expires=30&X-Amz-SignedHeaders=host"
        );
        assert_eq!(
            creq.canonical_headers,
            Some(vec![("host".to_string(), "iam.amazonaws.com".to_string())])
        );
        assert_eq!(creq.signed_headers_string(), "host");
        Ok(())
    }

    #[test]
    fn test_query_values_use_rfc3986() -> Result<()> {
        let req = ServiceRequest::get("iam.amazonaws.com").with_query("UserName", "New User+1");
        let signer = RequestSigner::new("iam", "us-east-1");

        let creq = signer.build_canonical_request(&req, &test_credential(), test_time())?;
        assert_eq!(creq.query_string(), "UserName=New%20User%2B1");
        Ok(())
    }

    #[test]
    fn test_canonicalize_path() -> Result<()> {
        assert_eq!(canonicalize_path("")?, "/");
        assert_eq!(canonicalize_path("/")?, "/");
        assert_eq!(canonicalize_path("/hello world")?, "/hello%20world");
        assert_eq!(canonicalize_path("/hello%20world")?, "/hello%20world");
        Ok(())
    }

    #[test]
    fn test_from_url() -> Result<()> {
        let req = ServiceRequest::from_url(
            "https://ec2.amazonaws.com/?Action=DescribeRegions&Version=2013-10-15",
        )?;

        assert_eq!(req.host, "ec2.amazonaws.com");
        assert_eq!(req.path, "/");
        assert_eq!(req.uri_scheme, UriScheme::HTTPS);
        assert_eq!(
            req.query,
            vec![
                ("Action".to_string(), "DescribeRegions".to_string()),
                ("Version".to_string(), "2013-10-15".to_string()),
            ]
        );

        assert!(ServiceRequest::from_url("/no/authority").is_err());
        Ok(())
    }

    #[test]
    fn test_reject_product_advertising_request() -> Result<()> {
        let signer = RequestSigner::new("ec2", "us-east-1");
        let mut creq = signer.build_canonical_request(
            &ServiceRequest::get("ec2.amazonaws.com"),
            &test_credential(),
            test_time(),
        )?;
        creq.scheme = Scheme::ProductAdvertising;

        assert!(signer
            .sign_request(&creq, &test_credential(), test_time())
            .is_err());
        Ok(())
    }
}
