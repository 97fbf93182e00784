use crate::constants::*;
use amzsign_core::{Context, Credential, Error, Result};
use log::debug;

/// Config carries the configuration for signing AWS service requests.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(Debug))]
pub struct Config {
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
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
}

impl Config {
    /// Load config from env, keeping fields that are already set.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        if let Some(v) = envs.get(AWS_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v.clone());
        }
        if let Some(v) = envs.get(AWS_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v.clone());
        }
        if let Some(v) = envs.get(AWS_REGION).or_else(|| envs.get(AWS_DEFAULT_REGION)) {
            self.region.get_or_insert(v.clone());
        }

        debug!("aws v4 config loaded, region: {:?}", self.region);
        self
    }

    /// Build the credential out of this config.
    pub fn credential(&self) -> Result<Credential> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(ak), Some(sk)) => Ok(Credential::new(ak, sk)),
            _ => Err(Error::missing_credentials(
                "access_key_id and secret_access_key must be configured",
            )),
        }
    }

    /// Region to sign with.
    pub fn region(&self) -> Result<&str> {
        self.region
            .as_deref()
            .ok_or_else(|| Error::invalid_parameters("region must be configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amzsign_core::{ErrorKind, StaticEnv};
    use std::collections::HashMap;

    fn ctx(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[test]
    fn test_config_from_env() -> Result<()> {
        let ctx = ctx(&[
            (AWS_ACCESS_KEY_ID, "AKIDEXAMPLE"),
            (AWS_SECRET_ACCESS_KEY, "secret"),
            (AWS_DEFAULT_REGION, "us-west-2"),
        ]);

        let cfg = Config::default().from_env(&ctx);
        assert_eq!(cfg.region()?, "us-west-2");
        assert_eq!(cfg.credential()?.access_key_id, "AKIDEXAMPLE");
        Ok(())
    }

    #[test]
    fn test_config_prefers_explicit_values() -> Result<()> {
        let ctx = ctx(&[(AWS_REGION, "eu-west-1"), (AWS_DEFAULT_REGION, "us-west-2")]);

        let cfg = Config::default().from_env(&ctx);
        assert_eq!(cfg.region()?, "eu-west-1");

        let cfg = Config {
            region: Some("us-east-1".to_string()),
            ..Default::default()
        }
        .from_env(&ctx);
        assert_eq!(cfg.region()?, "us-east-1");
        Ok(())
    }

    #[test]
    fn test_config_missing_credential() {
        let cfg = Config::default().from_env(&ctx(&[]));

        let err = cfg.credential().expect_err("credential must be missing");
        assert_eq!(err.kind(), ErrorKind::MissingCredentials);
        assert!(cfg.region().is_err());
    }
}
