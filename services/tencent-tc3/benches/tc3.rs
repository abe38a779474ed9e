use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use tc3sign_core::{Context, SignRequest};
use tc3sign_tencent_tc3::{authorization, Credential, RequestSigner, SigningContext};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tencent_tc3");

    let cred = Credential::new("AKIDEXAMPLE", "Gu5t9xGARNpq86cd98joQYCN3EXAMPLE");
    // Roughly the size of a downscaled ID card photo after base64.
    let payload = format!(
        r#"{{"ImageBase64":"{}","CardSide":"FRONT"}}"#,
        "A".repeat(200 * 1024)
    );

    group.bench_function("authorization", |b| {
        let ctx = SigningContext::new("ocr", "ocr.tencentcloudapi.com", 1_700_000_000)
            .expect("timestamp must be valid");

        b.iter(|| authorization(&cred, &ctx, payload.as_bytes()).expect("must success"))
    });

    group.bench_function("sign_request", |b| {
        let signer = RequestSigner::new("ocr");
        let ctx = Context::new();

        b.iter(|| {
            let (mut parts, _) = http::Request::post("https://ocr.tencentcloudapi.com/")
                .body(())
                .expect("request must be valid")
                .into_parts();

            signer
                .sign_request(&ctx, &mut parts, payload.as_bytes(), &cred)
                .expect("must success")
        })
    });

    group.finish();
}
