use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use log::debug;
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Credentials are loaded from the provider on every call and never cached,
/// so the signer itself holds no mutable state and can be shared freely
/// across tasks.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    request_signer: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        request_signer: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            request_signer: Arc::new(request_signer),
        }
    }

    /// The context this signer was built with.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Load a usable credential or fail before anything reaches the network.
    pub async fn credential(&self) -> Result<K> {
        let cred = self.provider.provide_credential(&self.ctx).await?;
        if !cred.is_valid() {
            debug!("no valid credential loaded from {:?}", self.provider);
            return Err(Error::config_invalid(
                "no valid credential is configured",
            ));
        }

        cred.ok_or_else(|| Error::unexpected("valid credential must be present"))
    }

    /// Signing request.
    ///
    /// `body` must be the exact bytes that will be sent.
    pub async fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        let cred = self.credential().await?;

        self.request_signer
            .sign_request(&self.ctx, req, body, &cred)
    }
}
