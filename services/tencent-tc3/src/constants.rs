// Signing scheme.
pub const ALGORITHM: &str = "TC3-HMAC-SHA256";
pub const KEY_PREFIX: &str = "TC3";
pub const TERMINATOR: &str = "tc3_request";
pub const SIGNED_HEADERS: &str = "content-type;host";
pub const CANONICAL_METHOD: &str = "POST";
pub const CANONICAL_URI: &str = "/";
pub const CANONICAL_QUERY_STRING: &str = "";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

// Headers used in tencent cloud api v3.
pub const X_TC_ACTION: &str = "x-tc-action";
pub const X_TC_VERSION: &str = "x-tc-version";
pub const X_TC_TIMESTAMP: &str = "x-tc-timestamp";
pub const X_TC_REGION: &str = "x-tc-region";
pub const X_TC_TOKEN: &str = "x-tc-token";

// Env values used in tencent cloud.
pub const TENCENTCLOUD_REGION: &str = "TENCENTCLOUD_REGION";
pub const TKE_REGION: &str = "TKE_REGION";
pub const TENCENTCLOUD_SECRET_ID: &str = "TENCENTCLOUD_SECRET_ID";
pub const TKE_SECRET_ID: &str = "TKE_SECRET_ID";
pub const TENCENTCLOUD_SECRET_KEY: &str = "TENCENTCLOUD_SECRET_KEY";
pub const TKE_SECRET_KEY: &str = "TKE_SECRET_KEY";
pub const TENCENTCLOUD_TOKEN: &str = "TENCENTCLOUD_TOKEN";
pub const TENCENTCLOUD_SECURITY_TOKEN: &str = "TENCENTCLOUD_SECURITY_TOKEN";
