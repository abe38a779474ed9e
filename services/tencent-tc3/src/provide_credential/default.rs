use crate::{Config, Credential};
use async_trait::async_trait;
use std::sync::Arc;
use tc3sign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// Default credential provider for Tencent Cloud API v3.
///
/// This provider will try to load credentials in the following order:
/// 1. From static configuration
/// 2. From environment variables
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new(config: Config) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(super::ConfigCredentialProvider::new(Arc::new(config)))
            .push(super::EnvCredentialProvider::new());

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
