use crate::{Context, ProvideCredential, Result};
use async_trait::async_trait;
use log::debug;
use std::fmt::{Debug, Formatter};

/// ProvideCredentialChain tries a list of providers in order.
///
/// The first provider that returns a credential wins. Providers that return
/// `Ok(None)` or fail are skipped; failures are logged at debug level only,
/// since a later provider may still succeed.
pub struct ProvideCredentialChain<C> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
        }
    }
}

impl<C> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers)
            .finish()
    }
}

impl<C: Send + Sync + Unpin + 'static> ProvideCredentialChain<C> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Number of providers in this chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if the chain has no provider.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl<C: Send + Sync + Unpin + 'static> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    debug!("credential loaded by {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => debug!("{provider:?} has no credential, trying next"),
                Err(err) => debug!("{provider:?} failed: {err:?}, trying next"),
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    enum Outcome {
        Some(&'static str),
        None,
        Fail,
    }

    #[derive(Debug)]
    struct CountingProvider {
        outcome: Outcome,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ProvideCredential for CountingProvider {
        type Credential = String;

        async fn provide_credential(&self, _: &Context) -> Result<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                Outcome::Some(v) => Ok(Some(v.to_string())),
                Outcome::None => Ok(None),
                Outcome::Fail => Err(Error::credential_invalid("broken provider")),
            }
        }
    }

    fn provider(outcome: Outcome) -> (CountingProvider, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            CountingProvider {
                outcome,
                calls: calls.clone(),
            },
            calls,
        )
    }

    #[tokio::test]
    async fn test_chain_stops_at_first_success() {
        let _ = env_logger::builder().is_test(true).try_init();

        let (p1, c1) = provider(Outcome::Fail);
        let (p2, c2) = provider(Outcome::None);
        let (p3, c3) = provider(Outcome::Some("third"));
        let (p4, c4) = provider(Outcome::Some("fourth"));

        let chain = ProvideCredentialChain::new()
            .push(p1)
            .push(p2)
            .push(p3)
            .push(p4);
        assert_eq!(chain.len(), 4);

        let cred = chain.provide_credential(&Context::new()).await.unwrap();
        assert_eq!(cred.as_deref(), Some("third"));

        assert_eq!(c1.load(Ordering::SeqCst), 1);
        assert_eq!(c2.load(Ordering::SeqCst), 1);
        assert_eq!(c3.load(Ordering::SeqCst), 1);
        assert_eq!(c4.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() {
        let chain: ProvideCredentialChain<String> = ProvideCredentialChain::new();
        assert!(chain.is_empty());

        let cred = chain.provide_credential(&Context::new()).await.unwrap();
        assert!(cred.is_none());
    }
}
