use crate::constants::*;
use crate::request::IdCardOcrRequest;
use crate::response::pretty_result_from_response;
use bytes::Bytes;
use http::header::HOST as HOST_HEADER;
use http::{Method, Request};
use log::debug;
use tc3sign_core::{Context, Error, Result, Signer};
use tc3sign_tencent_tc3::{
    Config, Credential, DefaultCredentialProvider, RequestSigner, TENCENTCLOUD_SECRET_ID,
    TENCENTCLOUD_SECRET_KEY, X_TC_ACTION, X_TC_REGION, X_TC_VERSION,
};

/// Client for the `IDCardOCR` action.
///
/// Cheap to clone; clones share the same context and credential provider.
#[derive(Clone, Debug)]
pub struct IdCardOcrClient {
    signer: Signer<Credential>,
    endpoint: String,
    region: String,
}

impl IdCardOcrClient {
    /// Create a client that reads credentials from `config` first, then the environment.
    ///
    /// The region falls back to [`DEFAULT_REGION`] when `config` has none.
    pub fn new(ctx: Context, config: Config) -> Self {
        let region = config
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let signer = Signer::new(
            ctx,
            DefaultCredentialProvider::new(config),
            RequestSigner::new(SERVICE),
        );

        Self::from_signer(signer, region)
    }

    /// Create a client from an already assembled signer.
    pub fn from_signer(signer: Signer<Credential>, region: impl Into<String>) -> Self {
        Self {
            signer,
            endpoint: ENDPOINT.to_string(),
            region: region.into(),
        }
    }

    /// Override the endpoint, mostly useful to point at a proxy.
    ///
    /// Requests still carry and sign `Host: ocr.tencentcloudapi.com`.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The region sent as `X-TC-Region`.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Send `input` and return the raw response body.
    ///
    /// Fails with `ConfigInvalid` before any network traffic when no usable
    /// credential can be loaded, and with `HttpStatus` on a non-2xx answer.
    /// Service level errors arrive inside a 2xx body and are left to the caller.
    pub async fn id_card_ocr(&self, input: &IdCardOcrRequest) -> Result<String> {
        let body = Bytes::from(input.to_body()?);

        let mut parts = Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.as_str())
            .header(HOST_HEADER, HOST)
            .header(X_TC_ACTION, ACTION_ID_CARD_OCR)
            .header(X_TC_VERSION, VERSION)
            .header(X_TC_REGION, self.region.as_str())
            .body(())?
            .into_parts()
            .0;
        self.signer
            .sign(&mut parts, &body)
            .await
            .map_err(|err| {
                if !err.is_config_error() {
                    return err;
                }
                Error::config_invalid(format!(
                    "SecretId/SecretKey are not configured, set {TENCENTCLOUD_SECRET_ID} and {TENCENTCLOUD_SECRET_KEY}"
                ))
                .with_source(err)
            })?;

        debug!(
            "sending {ACTION_ID_CARD_OCR} to {} with {input:?}",
            self.endpoint
        );
        let resp = self
            .signer
            .context()
            .http_send_as_string(Request::from_parts(parts, body))
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::http_status(status, resp.body()));
        }

        Ok(resp.into_body())
    }

    /// Send `input` and render the answer with [`pretty_result_from_response`].
    pub async fn recognize(&self, input: &IdCardOcrRequest) -> Result<String> {
        let body = self.id_card_ocr(input).await?;
        pretty_result_from_response(&body)
    }
}
