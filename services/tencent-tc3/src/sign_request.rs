use crate::constants::*;
use crate::{CanonicalRequest, Credential};
use http::header::{AUTHORIZATION, CONTENT_TYPE, HOST};
use http::request::Parts;
use http::{HeaderValue, Method};
use log::debug;
use std::fmt::{self, Display, Formatter};
use tc3sign_core::hash::{hex_hmac_sha256, hmac_sha256};
use tc3sign_core::time::{format_date, from_timestamp, now};
use tc3sign_core::{Context, Error, Result, SignRequest};

/// Per-request signing parameters.
///
/// `date` is derived from `timestamp` in UTC and never from the local clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
    service: String,
    host: String,
    timestamp: i64,
    date: String,
}

impl SigningContext {
    /// Create a signing context for `service` at `host`, signed at unix `timestamp` seconds.
    pub fn new(service: &str, host: &str, timestamp: i64) -> Result<Self> {
        let date = format_date(from_timestamp(timestamp)?);

        Ok(Self {
            service: service.to_string(),
            host: host.to_string(),
            timestamp,
            date,
        })
    }

    /// Service name, for example `ocr`.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Host the request is sent to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Unix timestamp in seconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// UTC date as `YYYY-MM-DD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Scope: `<date>/<service>/tc3_request`
    pub fn credential_scope(&self) -> String {
        format!("{}/{}/{TERMINATOR}", self.date, self.service)
    }
}

/// String to sign of the TC3 signing scheme.
///
/// ```text
/// TC3-HMAC-SHA256
/// 1700000000
/// 2023-11-14/ocr/tc3_request
/// <hashed_canonical_request>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringToSign {
    timestamp: i64,
    credential_scope: String,
    hashed_canonical_request: String,
}

impl StringToSign {
    /// Build the string to sign for a canonical request under `ctx`.
    pub fn new(ctx: &SigningContext, creq: &CanonicalRequest) -> Self {
        Self {
            timestamp: ctx.timestamp(),
            credential_scope: ctx.credential_scope(),
            hashed_canonical_request: creq.hashed(),
        }
    }
}

impl Display for StringToSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{ALGORITHM}")?;
        writeln!(f, "{}", self.timestamp)?;
        writeln!(f, "{}", self.credential_scope)?;
        write!(f, "{}", self.hashed_canonical_request)
    }
}

/// Derive the request signing key: `TC3<key>` → date → service → `tc3_request`.
///
/// Every step keeps the raw HMAC bytes. The key is rebuilt for every request.
pub fn generate_signing_key(secret_key: &str, date: &str, service: &str) -> Result<Vec<u8>> {
    let secret = format!("{KEY_PREFIX}{secret_key}");
    let secret_date = hmac_sha256(secret.as_bytes(), date.as_bytes())?;
    let secret_service = hmac_sha256(&secret_date, service.as_bytes())?;
    hmac_sha256(&secret_service, TERMINATOR.as_bytes())
}

/// Hex encoded signature of `string_to_sign`.
pub fn calculate_signature(signing_key: &[u8], string_to_sign: &str) -> Result<String> {
    hex_hmac_sha256(signing_key, string_to_sign.as_bytes())
}

/// Compose the `Authorization` header value.
pub fn build_authorization(secret_id: &str, credential_scope: &str, signature: &str) -> String {
    format!(
        "{ALGORITHM} Credential={secret_id}/{credential_scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}"
    )
}

/// Sign `payload` under `ctx` and return the `Authorization` header value.
///
/// Pure and deterministic: the same inputs always produce the same output.
pub fn authorization(cred: &Credential, ctx: &SigningContext, payload: &[u8]) -> Result<String> {
    let creq = CanonicalRequest::new(ctx.host(), payload);
    debug!("calculated canonical request: {creq}");

    let string_to_sign = StringToSign::new(ctx, &creq).to_string();
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = generate_signing_key(&cred.secret_key, ctx.date(), ctx.service())?;
    let signature = calculate_signature(&signing_key, &string_to_sign)?;

    Ok(build_authorization(
        &cred.secret_id,
        &ctx.credential_scope(),
        &signature,
    ))
}

/// RequestSigner that implements Tencent Cloud API v3 signing.
///
/// It fills `Content-Type`, `Host`, `X-TC-Timestamp`, `Authorization` and,
/// for temporary credentials, `X-TC-Token`. `X-TC-Action`, `X-TC-Version` and
/// `X-TC-Region` are set by the caller since they are not signed.
///
/// - [Signature v3](https://cloud.tencent.com/document/api/213/30654)
#[derive(Debug)]
pub struct RequestSigner {
    service: String,
    time: Option<i64>,
}

impl RequestSigner {
    /// Create a new request signer for the given service, for example `ocr`.
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
            time: None,
        }
    }

    /// Specify the signing timestamp in unix seconds.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, timestamp: i64) -> Self {
        self.time = Some(timestamp);
        self
    }

    fn host(req: &Parts) -> Result<String> {
        if let Some(host) = req.headers.get(HOST) {
            let host = host.to_str().map_err(|e| {
                Error::request_invalid("host header is not valid ascii").with_source(e)
            })?;
            return Ok(host.to_string());
        }

        req.uri
            .authority()
            .map(|v| v.as_str().to_string())
            .ok_or_else(|| Error::request_invalid("request without host is invalid for signing"))
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &[u8],
        cred: &Self::Credential,
    ) -> Result<()> {
        if req.method != Method::POST {
            return Err(Error::request_invalid(format!(
                "{ALGORITHM} only signs POST requests, got {}",
                req.method
            )));
        }
        if req.uri.path() != CANONICAL_URI || req.uri.query().is_some() {
            return Err(Error::request_invalid(format!(
                "{ALGORITHM} only signs requests to {CANONICAL_URI} without query, got {}",
                req.uri
            )));
        }

        let host = Self::host(req)?;
        let timestamp = self.time.unwrap_or_else(|| now().timestamp());
        let ctx = SigningContext::new(&self.service, &host, timestamp)?;

        let mut authorization = HeaderValue::from_str(&authorization(cred, &ctx, body)?)?;
        authorization.set_sensitive(true);

        req.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        req.headers.insert(HOST, HeaderValue::from_str(&host)?);
        req.headers
            .insert(X_TC_TIMESTAMP, HeaderValue::from(timestamp));
        if let Some(token) = &cred.security_token {
            let mut value = HeaderValue::from_str(token)?;
            value.set_sensitive(true);
            req.headers.insert(X_TC_TOKEN, value);
        }
        req.headers.insert(AUTHORIZATION, authorization);

        Ok(())
    }
}
