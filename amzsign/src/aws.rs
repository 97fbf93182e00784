// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! AWS Signature V4 support with convenience APIs
//!
//! This module re-exports the signature v4 signer along with a helper that
//! reads region and keys from the environment.

// Re-export all AWS signing types
pub use amzsign_aws_v4::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Credential, Result};

/// Create a signer and credential for `service` out of the OS environment.
///
/// Region comes from `AWS_REGION` or `AWS_DEFAULT_REGION`, keys from
/// `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`.
///
/// # Example
///
/// ```no_run
/// # fn main() -> amzsign::Result<()> {
/// use amzsign::aws::{default_signer, ServiceRequest};
///
/// let (signer, cred) = default_signer("ec2")?;
/// let req = ServiceRequest::get("ec2.amazonaws.com")
///     .with_query("Action", "DescribeRegions")
///     .with_query("Version", "2013-10-15");
/// let signed = signer.sign(&req, &cred)?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer(service: &str) -> Result<(RequestSigner, Credential)> {
    let config = Config::default().from_env(&default_context());
    let signer = RequestSigner::new(service, config.region()?);
    Ok((signer, config.credential()?))
}
