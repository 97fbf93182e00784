use amzsign_core::{Context, Credential, Error, Result};

use crate::constants::*;
use crate::sign_request::Endpoint;

/// Config carries all the configuration for product advertising requests.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(Debug))]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `associate_tag` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ASSOCIATE_TAG`]
    pub associate_tag: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_PA_ENDPOINT`]
    /// - default to `https://webservices.amazon.com/onca/xml`
    pub endpoint: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        if let Some(v) = envs.get(AWS_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v.clone());
        }
        if let Some(v) = envs.get(AWS_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v.clone());
        }
        if let Some(v) = envs.get(AWS_ASSOCIATE_TAG) {
            self.associate_tag.get_or_insert(v.clone());
        }
        if let Some(v) = envs.get(AWS_PA_ENDPOINT) {
            self.endpoint.get_or_insert(v.clone());
        }

        self
    }

    /// Build the credential, naming the first missing field.
    pub fn credential(&self) -> Result<Credential> {
        let field = |v: &Option<String>, name: &str| {
            v.clone()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::missing_credentials(format!("{name} is required")))
        };

        Ok(Credential::new(
            field(&self.access_key_id, "access_key_id")?,
            field(&self.secret_access_key, "secret_access_key")?,
        )
        .with_associate_tag(field(&self.associate_tag, "associate_tag")?))
    }

    /// Parse the configured endpoint, falling back to the default one.
    pub fn endpoint(&self) -> Result<Endpoint> {
        match &self.endpoint {
            Some(v) => Endpoint::parse(v),
            None => Ok(Endpoint::default()),
        }
    }
}
