use std::collections::HashMap;
use std::env;

use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::Request;
use http::StatusCode;
use log::debug;
use log::warn;
use pretty_assertions::assert_eq;
use tc3sign_core::{Context, ErrorKind, OsEnv, Result, Signer, StaticEnv};
use tc3sign_http_send_reqwest::ReqwestHttpSend;
use tc3sign_tencent_tc3::{
    Credential, DefaultCredentialProvider, RequestSigner, StaticCredentialProvider,
    TENCENTCLOUD_SECRET_ID, TENCENTCLOUD_SECRET_KEY, X_TC_ACTION, X_TC_REGION, X_TC_VERSION,
};

const PAYLOAD: &str = r#"{"ImageBase64":"aGVsbG8=","CardSide":"FRONT"}"#;

fn init_signer() -> Option<Signer<Credential>> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();
    if env::var("TC3SIGN_TENCENT_TEST").as_deref() != Ok("on") {
        return None;
    }

    let secret_id =
        env::var("TC3SIGN_TENCENT_SECRET_ID").expect("env TC3SIGN_TENCENT_SECRET_ID must set");
    let secret_key =
        env::var("TC3SIGN_TENCENT_SECRET_KEY").expect("env TC3SIGN_TENCENT_SECRET_KEY must set");
    let provider = StaticCredentialProvider::new(&secret_id, &secret_key);
    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    Some(Signer::new(ctx, provider, RequestSigner::new("ocr")))
}

fn ocr_request() -> http::request::Parts {
    Request::builder()
        .method(http::Method::POST)
        .uri("https://ocr.tencentcloudapi.com/")
        .header(X_TC_ACTION, "IDCardOCR")
        .header(X_TC_VERSION, "2018-11-19")
        .header(X_TC_REGION, "ap-guangzhou")
        .body(())
        .expect("request must be valid")
        .into_parts()
        .0
}

#[tokio::test]
async fn test_signature_accepted_by_service() -> Result<()> {
    let Some(signer) = init_signer() else {
        warn!("TC3SIGN_TENCENT_TEST is not set, skipped");
        return Ok(());
    };

    let mut parts = ocr_request();
    signer.sign(&mut parts, PAYLOAD.as_bytes()).await?;
    let req = Request::from_parts(parts, Bytes::from_static(PAYLOAD.as_bytes()));
    debug!("signed request: {:?}", req.headers().get(AUTHORIZATION));

    let resp = signer.context().http_send_as_string(req).await?;
    debug!("got response: {}", resp.body());
    assert_eq!(StatusCode::OK, resp.status());

    // The image is not a real ID card, so the service answers with an
    // error. Anything but an authentication failure means the signature
    // itself was accepted.
    let body: serde_json::Value = serde_json::from_str(resp.body())?;
    let code = body["Response"]["Error"]["Code"].as_str().unwrap_or_default();
    assert!(!code.starts_with("AuthFailure"), "signature rejected: {code}");

    Ok(())
}

#[tokio::test]
async fn test_signer_loads_credential_from_env() -> Result<()> {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            (TENCENTCLOUD_SECRET_ID.to_string(), "AKIDEXAMPLE".to_string()),
            (
                TENCENTCLOUD_SECRET_KEY.to_string(),
                "Gu5t9xGARNpq86cd98joQYCN3EXAMPLE".to_string(),
            ),
        ]),
    });
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::default(),
        RequestSigner::new("ocr").with_time(1_700_000_000),
    );

    let mut parts = ocr_request();
    signer.sign(&mut parts, PAYLOAD.as_bytes()).await?;

    assert_eq!(
        parts.headers[AUTHORIZATION].to_str().unwrap(),
        "TC3-HMAC-SHA256 Credential=AKIDEXAMPLE/2023-11-14/ocr/tc3_request, SignedHeaders=content-type;host, Signature=ec9b35e45b3318b0209a56ac0e977c7a146b31ee11fb3d6c83b0db6ff1b7e02e"
    );
    // Caller supplied headers are left untouched.
    assert_eq!(parts.headers[X_TC_ACTION], "IDCardOCR");

    Ok(())
}

#[tokio::test]
async fn test_signer_without_credential_never_signs() {
    let signer = Signer::new(
        Context::new(),
        DefaultCredentialProvider::default(),
        RequestSigner::new("ocr"),
    );

    let mut parts = ocr_request();
    let err = signer
        .sign(&mut parts, PAYLOAD.as_bytes())
        .await
        .expect_err("signing must fail without credential");

    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(parts.headers.get(AUTHORIZATION).is_none());
}
