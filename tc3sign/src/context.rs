use async_trait::async_trait;
use bytes::Bytes;
use tc3sign_core::{Context, Env, HttpSend, OsEnv, Result};
use tc3sign_http_send_reqwest::ReqwestHttpSend;

/// Process environment plus a shared reqwest client.
#[derive(Debug, Default, Clone)]
pub struct DefaultContext {
    http: ReqwestHttpSend,
}

impl DefaultContext {
    /// Create a DefaultContext with a default reqwest client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a DefaultContext with a configured reqwest client, for example
    /// one with timeouts or a proxy.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: ReqwestHttpSend::new(client),
        }
    }
}

#[async_trait]
impl HttpSend for DefaultContext {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }
}

impl Env for DefaultContext {
    fn var(&self, key: &str) -> Option<String> {
        OsEnv.var(key)
    }
}

/// A [`Context`] reading the process environment and sending through reqwest.
pub fn default_context() -> Context {
    let ctx = DefaultContext::new();
    Context::new()
        .with_http_send(ctx.clone())
        .with_env(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_reads_process_env() {
        let ctx = default_context();
        assert_eq!(ctx.env_var("PATH"), std::env::var("PATH").ok());
    }
}
