use amzsign_aws_v4::{RequestSigner as ServiceSigner, ServiceRequest, SignatureLocation};
use amzsign_core::time::{now, DateTime};
use amzsign_core::{Credential, Error, Result, Scheme, SignedRequest};
use amzsign_product_advertising::{Endpoint, RequestSigner as ItemSigner, SearchParameters};

/// Parameters describing the request to assemble.
#[derive(Debug, Clone)]
pub enum RequestParams {
    /// Product advertising item search or lookup.
    Item {
        endpoint: Endpoint,
        params: SearchParameters,
    },
    /// Signature v4 request against an AWS service.
    Service {
        service: String,
        region: String,
        request: ServiceRequest,
    },
}

impl RequestParams {
    fn kind(&self) -> &'static str {
        match self {
            RequestParams::Item { .. } => "item",
            RequestParams::Service { .. } => "service",
        }
    }
}

/// Sign `params` with `scheme` at the current time.
///
/// No network I/O happens here, the signed artifact is returned to the caller.
pub fn assemble(scheme: Scheme, cred: &Credential, params: &RequestParams) -> Result<SignedRequest> {
    assemble_at(scheme, cred, params, now())
}

/// Sign `params` with `scheme` at the given time.
pub fn assemble_at(
    scheme: Scheme,
    cred: &Credential,
    params: &RequestParams,
    now: DateTime,
) -> Result<SignedRequest> {
    let location = match scheme {
        Scheme::SignatureV4Query => SignatureLocation::Query,
        Scheme::SignatureV4Header => SignatureLocation::Header,
        Scheme::ProductAdvertising => {
            let RequestParams::Item { endpoint, params } = params else {
                return Err(mismatch(scheme, params));
            };

            return ItemSigner::new()
                .with_endpoint(endpoint.clone())
                .sign_at(params, cred, now);
        }
    };

    let RequestParams::Service {
        service,
        region,
        request,
    } = params
    else {
        return Err(mismatch(scheme, params));
    };

    ServiceSigner::new(service, region)
        .with_location(location)
        .sign_at(request, cred, now)
}

fn mismatch(scheme: Scheme, params: &RequestParams) -> Error {
    Error::invalid_parameters(format!(
        "{scheme} can't sign {} parameters",
        params.kind()
    ))
}
