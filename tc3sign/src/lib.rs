//! Sign Tencent Cloud API v3 requests with `TC3-HMAC-SHA256` and call the ID card OCR service.
//!
//! ```no_run
//! use tc3sign::ocr::{CardSide, IdCardOcrRequest};
//! use tc3sign::ocr::render_outcome;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let client = tc3sign::ocr::default_client();
//! let input = IdCardOcrRequest::from_image(b"<jpeg bytes>", CardSide::Front);
//!
//! println!("{}", render_outcome(&client.recognize(&input).await));
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use tc3sign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_context, DefaultContext};

/// TC3-HMAC-SHA256 signing for any Tencent Cloud API v3 service.
pub mod tencent {
    pub use tc3sign_tencent_tc3::*;
}

pub mod ocr;
