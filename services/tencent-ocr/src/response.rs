use serde_json::{Map, Value};
use std::fmt::Write;
use tc3sign_core::{Error, Result};

/// Rendered when the service answered with an empty or blank body.
pub const EMPTY_RESPONSE: &str = "空响应";

/// Recognized fields in display order, with their labels.
const FIELDS: [(&str, &str); 8] = [
    ("Name", "姓名"),
    ("Sex", "性别"),
    ("Nation", "民族"),
    ("Birth", "出生"),
    ("Address", "住址"),
    ("IdNum", "身份证号"),
    ("Authority", "签发机关"),
    ("ValidDate", "有效期限"),
];

/// `Response.Error` of a Tencent Cloud API v3 answer.
///
/// Non-string scalars are kept as their JSON text, missing or null as `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Error code such as `FailedOperation.OcrFailed`.
    pub code: Option<String>,
    /// Human readable message.
    pub message: Option<String>,
}

impl ApiError {
    fn from_value(value: &Value) -> Option<Self> {
        let Value::Object(obj) = value else {
            return None;
        };

        Some(Self {
            code: scalar_text(obj, "Code"),
            message: scalar_text(obj, "Message"),
        })
    }
}

/// Render the JSON body of an `IDCardOCR` answer as labeled lines.
///
/// - A blank body renders as [`EMPTY_RESPONSE`].
/// - A body without an object under `Response` is returned unchanged.
/// - When none of the recognized fields is present the body is returned
///   unchanged too, even if `Response.Error` is set.
/// - Otherwise the output starts with `RequestId: <id>` and an empty line,
///   then one `<label>：<value>` line per present field, and finally
///   `\n错误：<code> - <message>` when `Response.Error` exists.
///
/// Bodies that are not a JSON object fail with
/// [`ErrorKind::ResponseInvalid`](tc3sign_core::ErrorKind::ResponseInvalid).
pub fn pretty_result_from_response(body: &str) -> Result<String> {
    if body.trim().is_empty() {
        return Ok(EMPTY_RESPONSE.to_string());
    }

    let root: Value = serde_json::from_str(body)?;
    let Value::Object(root) = root else {
        return Err(Error::response_invalid(
            "response body is not a JSON object",
        ));
    };
    let Some(Value::Object(resp)) = root.get("Response") else {
        return Ok(body.to_string());
    };

    let mut out = String::new();
    if let Some(request_id) = field_text(resp, "RequestId") {
        write!(out, "RequestId: {request_id}\n\n")?;
    }

    let mut extracted = 0;
    for (key, label) in FIELDS {
        if let Some(value) = field_text(resp, key) {
            writeln!(out, "{label}：{value}")?;
            extracted += 1;
        }
    }
    if extracted == 0 {
        return Ok(body.to_string());
    }

    if let Some(err) = resp.get("Error").and_then(ApiError::from_value) {
        write!(
            out,
            "\n错误：{} - {}",
            err.code.unwrap_or_default(),
            err.message.unwrap_or_default()
        )?;
    }

    Ok(out)
}

/// Turn the outcome of a recognition into display text.
///
/// Failures render as `识别失败：` followed by the error on the next line.
pub fn render_outcome(outcome: &Result<String>) -> String {
    match outcome {
        Ok(text) => text.clone(),
        Err(err) => format!("识别失败：\n{err}"),
    }
}

/// Present and non-null values; strings as-is, other scalars as JSON text.
fn scalar_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Like [`scalar_text`], with blank strings counted as absent.
fn field_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    scalar_text(obj, key).filter(|v| !v.trim().is_empty())
}
