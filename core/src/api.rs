use crate::time::DateTime;
use crate::{CanonicalRequest, Credential, Result, Signature};
use std::fmt::Debug;

/// SignRequest is the strategy trait implemented by every signature engine.
///
/// Engines are stateless with respect to the request: everything they need is
/// passed in, including the instant the request was canonicalized at. The
/// same `now` must be used for the canonical request and the signature.
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Compute the signature of a canonical request.
    ///
    /// Implementations must treat the secret key as opaque bytes and never
    /// log or echo it.
    fn sign_request(
        &self,
        req: &CanonicalRequest,
        cred: &Credential,
        now: DateTime,
    ) -> Result<Signature>;
}
