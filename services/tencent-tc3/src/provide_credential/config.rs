use crate::{Config, Credential};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tc3sign_core::{Context, ProvideCredential, Result};

/// Static configuration based provider.
///
/// Blank values count as missing, so a half-filled config never produces a
/// credential that is doomed to be rejected by the service.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

fn non_blank(v: &Option<String>) -> Option<&String> {
    v.as_ref().filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        match (
            non_blank(&self.config.secret_id),
            non_blank(&self.config.secret_key),
        ) {
            (Some(secret_id), Some(secret_key)) => {
                debug!("loading credential from config");
                Ok(Some(Credential {
                    secret_id: secret_id.clone(),
                    secret_key: secret_key.clone(),
                    security_token: self.config.security_token.clone(),
                }))
            }
            _ => {
                debug!("incomplete config, skipping");
                Ok(None)
            }
        }
    }
}
