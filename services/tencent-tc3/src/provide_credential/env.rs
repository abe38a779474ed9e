use crate::{Config, Credential};
use async_trait::async_trait;
use tc3sign_core::{Context, ProvideCredential, Result};

/// Load credential from `TENCENTCLOUD_*` (or `TKE_*`) environment variables.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = Config::from_env(ctx);

        match (config.secret_id, config.secret_key) {
            (Some(secret_id), Some(secret_key))
                if !secret_id.trim().is_empty() && !secret_key.trim().is_empty() =>
            {
                Ok(Some(Credential {
                    secret_id,
                    secret_key,
                    security_token: config.security_token,
                }))
            }
            _ => Ok(None),
        }
    }
}
