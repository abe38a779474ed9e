//! Tencent Cloud API v3 signer (`TC3-HMAC-SHA256`).
//!
//! Signing happens in three steps, each exposed on its own so callers and
//! tests can inspect intermediate values:
//!
//! 1. [`CanonicalRequest`]: method, uri, query, canonical headers, signed headers and payload digest.
//! 2. [`SigningContext`] + [`StringToSign`] + [`generate_signing_key`]: the date/service/`tc3_request` key chain.
//! 3. [`build_authorization`]: the final `Authorization` header value.
//!
//! [`RequestSigner`] ties them together for `http` requests.
//!
//! - [Tencent Cloud API 3.0 Signature v3](https://cloud.tencent.com/document/api/213/30654)

mod constants;
pub use constants::*;

mod credential;
pub use credential::Credential;

mod config;
pub use config::Config;

mod canonical;
pub use canonical::CanonicalRequest;

mod sign_request;
pub use sign_request::{
    authorization, build_authorization, calculate_signature, generate_signing_key,
    RequestSigner, SigningContext, StringToSign,
};

mod provide_credential;
pub use provide_credential::*;
