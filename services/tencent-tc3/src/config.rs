use crate::constants::*;
use std::fmt::{Debug, Formatter};
use tc3sign_core::utils::Redact;
use tc3sign_core::Context;

/// Config for Tencent Cloud API v3 services.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Clone, Default)]
pub struct Config {
    /// Region for Tencent Cloud services, sent as `X-TC-Region`.
    pub region: Option<String>,
    /// Secret ID (Access Key ID)
    pub secret_id: Option<String>,
    /// Secret Key (Secret Access Key)
    pub secret_key: Option<String>,
    /// Security token for temporary credentials
    pub security_token: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("secret_id", &Redact::from(&self.secret_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("security_token", &Redact::from(&self.security_token))
            .finish()
    }
}

impl Config {
    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            region: ctx
                .env_var(TENCENTCLOUD_REGION)
                .or_else(|| ctx.env_var(TKE_REGION)),
            secret_id: ctx
                .env_var(TENCENTCLOUD_SECRET_ID)
                .or_else(|| ctx.env_var(TKE_SECRET_ID)),
            secret_key: ctx
                .env_var(TENCENTCLOUD_SECRET_KEY)
                .or_else(|| ctx.env_var(TKE_SECRET_KEY)),
            security_token: ctx
                .env_var(TENCENTCLOUD_TOKEN)
                .or_else(|| ctx.env_var(TENCENTCLOUD_SECURITY_TOKEN)),
        }
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the SecretId/SecretKey pair.
    pub fn with_secret(mut self, secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.secret_id = Some(secret_id.into());
        self.secret_key = Some(secret_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tc3sign_core::StaticEnv;

    fn ctx(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[test]
    fn test_from_env() {
        let config = Config::from_env(&ctx(&[
            (TENCENTCLOUD_SECRET_ID, "id"),
            (TENCENTCLOUD_SECRET_KEY, "key"),
            (TENCENTCLOUD_REGION, "ap-shanghai"),
        ]));

        assert_eq!(config.secret_id.as_deref(), Some("id"));
        assert_eq!(config.secret_key.as_deref(), Some("key"));
        assert_eq!(config.region.as_deref(), Some("ap-shanghai"));
        assert_eq!(config.security_token, None);
    }

    #[test]
    fn test_from_env_falls_back_to_tke() {
        let config = Config::from_env(&ctx(&[
            (TKE_SECRET_ID, "tke-id"),
            (TKE_SECRET_KEY, "tke-key"),
            (TKE_REGION, "ap-beijing"),
            (TENCENTCLOUD_SECURITY_TOKEN, "token"),
        ]));

        assert_eq!(config.secret_id.as_deref(), Some("tke-id"));
        assert_eq!(config.secret_key.as_deref(), Some("tke-key"));
        assert_eq!(config.region.as_deref(), Some("ap-beijing"));
        assert_eq!(config.security_token.as_deref(), Some("token"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::default().with_secret("AKIDEXAMPLE", "very-secret-key-value");
        let output = format!("{config:?}");

        assert!(!output.contains("very-secret-key-value"));
        assert!(!output.contains("AKIDEXAMPLE"));
    }
}
