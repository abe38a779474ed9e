//! Tencent Cloud ID card OCR (`IDCardOCR`) on top of the TC3 signer.
//!
//! - [`IdCardOcrRequest`] turns an opaque image payload and a [`CardSide`] into the request body.
//! - [`IdCardOcrClient`] signs, sends and checks the HTTP status.
//! - [`pretty_result_from_response`] turns the JSON answer into labeled lines for display.
//!
//! - [IDCardOCR](https://cloud.tencent.com/document/api/866/33524)

mod constants;
pub use constants::*;

mod request;
pub use request::{CardSide, IdCardOcrRequest};

mod response;
pub use response::{pretty_result_from_response, render_outcome, ApiError, EMPTY_RESPONSE};

mod client;
pub use client::IdCardOcrClient;
