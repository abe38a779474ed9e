//! Tencent Cloud ID card OCR with convenience constructors.

pub use tc3sign_tencent_ocr::*;

#[cfg(feature = "default-context")]
use crate::default_context;
#[cfg(feature = "default-context")]
use tc3sign_tencent_tc3::Config;

/// Create an ID card OCR client from the process environment.
///
/// - Credentials from `TENCENTCLOUD_SECRET_ID`/`TENCENTCLOUD_SECRET_KEY`
///   (or their `TKE_*` variants) and `TENCENTCLOUD_TOKEN`.
/// - Region from `TENCENTCLOUD_REGION`, [`DEFAULT_REGION`] otherwise.
///
/// Missing credentials are reported by the first call, not here.
#[cfg(feature = "default-context")]
pub fn default_client() -> IdCardOcrClient {
    let ctx = default_context();
    let config = Config::from_env(&ctx);
    IdCardOcrClient::new(ctx, config)
}
