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

use crate::utils::Redact;
use crate::{Error, Result, Scheme};
use std::fmt::{Debug, Formatter};

/// Credential that holds the access_key, secret_key and associate tag.
///
/// Credentials are supplied by the caller for every call and never persisted.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id for amazon services.
    pub access_key_id: String,
    /// Secret access key for amazon services.
    pub secret_access_key: String,
    /// Associate (partner) tag, required by the product advertising API.
    pub associate_tag: Option<String>,
}

impl Credential {
    /// Create a new credential with access key and secret key.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            associate_tag: None,
        }
    }

    /// Set the associate tag.
    pub fn with_associate_tag(mut self, tag: impl Into<String>) -> Self {
        self.associate_tag = Some(tag.into());
        self
    }

    /// Check that every field required by `scheme` is present and not empty.
    pub fn check(&self, scheme: Scheme) -> Result<()> {
        if self.access_key_id.is_empty() {
            return Err(Error::missing_credentials("access_key_id is required"));
        }
        if self.secret_access_key.is_empty() {
            return Err(Error::missing_credentials("secret_access_key is required"));
        }
        if scheme == Scheme::ProductAdvertising
            && self.associate_tag.as_deref().map_or(true, str::is_empty)
        {
            return Err(Error::missing_credentials(
                "associate_tag is required for product advertising requests",
            ));
        }

        Ok(())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("associate_tag", &self.associate_tag)
            .finish()
    }
}
