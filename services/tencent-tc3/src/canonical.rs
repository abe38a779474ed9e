use crate::constants::*;
use std::fmt::{self, Display, Formatter};
use tc3sign_core::hash::hex_sha256;

/// Canonical request of the TC3 signing scheme.
///
/// This variant always signs `POST /` without query string, and exactly two
/// headers: `content-type` then `host`. The header order is part of what gets
/// signed and must match [`SIGNED_HEADERS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    host: String,
    hashed_payload: String,
}

impl CanonicalRequest {
    /// Build the canonical request for `payload` sent to `host`.
    ///
    /// `payload` must be the exact body that will be transmitted.
    pub fn new(host: &str, payload: &[u8]) -> Self {
        Self {
            host: host.to_string(),
            hashed_payload: hex_sha256(payload),
        }
    }

    /// Canonical header block, each line newline terminated.
    pub fn canonical_headers(&self) -> String {
        format!("content-type:{CONTENT_TYPE_JSON}\nhost:{}\n", self.host)
    }

    /// `;` joined lowercase names of the signed headers.
    pub fn signed_headers(&self) -> &'static str {
        SIGNED_HEADERS
    }

    /// Lowercase hex SHA-256 of the payload.
    pub fn hashed_payload(&self) -> &str {
        &self.hashed_payload
    }

    /// Lowercase hex SHA-256 of the whole canonical request string.
    pub fn hashed(&self) -> String {
        hex_sha256(self.to_string().as_bytes())
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The header block ends with its own newline, followed by the
        // separator newline, which leaves an empty line before signed headers.
        writeln!(f, "{CANONICAL_METHOD}")?;
        writeln!(f, "{CANONICAL_URI}")?;
        writeln!(f, "{CANONICAL_QUERY_STRING}")?;
        writeln!(f, "{}", self.canonical_headers())?;
        writeln!(f, "{}", self.signed_headers())?;
        write!(f, "{}", self.hashed_payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const PAYLOAD: &str = r#"{"ImageBase64":"aGVsbG8=","CardSide":"FRONT"}"#;

    #[test]
    fn test_canonical_request_string() {
        let creq = CanonicalRequest::new("ocr.tencentcloudapi.com", PAYLOAD.as_bytes());

        assert_eq!(
            creq.to_string(),
            "POST\n/\n\ncontent-type:application/json; charset=utf-8\nhost:ocr.tencentcloudapi.com\n\ncontent-type;host\nd633b09cab51779f11c4f936dda3df46f9ac7b095f5824ff2f50b6bd9a59ba9d"
        );
        assert_eq!(
            creq.hashed(),
            "c0e9f27a671a5bff5dced7bfacbd885327eee854130bd86a067e211006df4b7f"
        );
    }

    #[test_case("ocr.tencentcloudapi.com"; "ocr")]
    #[test_case("cvm.tencentcloudapi.com"; "cvm")]
    fn test_only_host_line_varies(host: &str) {
        let creq = CanonicalRequest::new(host, PAYLOAD.as_bytes());

        assert_eq!(
            creq.canonical_headers(),
            format!("content-type:application/json; charset=utf-8\nhost:{host}\n")
        );
        assert_eq!(creq.signed_headers(), "content-type;host");
    }

    #[test]
    fn test_empty_payload_hash() {
        let creq = CanonicalRequest::new("ocr.tencentcloudapi.com", b"");
        assert_eq!(
            creq.hashed_payload(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_payload_change_changes_hash() {
        let a = CanonicalRequest::new("ocr.tencentcloudapi.com", PAYLOAD.as_bytes());
        let b = CanonicalRequest::new(
            "ocr.tencentcloudapi.com",
            PAYLOAD.replace("FRONT", "FRONt").as_bytes(),
        );

        assert_ne!(a.hashed_payload(), b.hashed_payload());
        assert_ne!(a.hashed(), b.hashed());
    }
}
