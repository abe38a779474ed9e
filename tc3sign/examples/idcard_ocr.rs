//! Recognize an ID card image and print the labeled fields.
//!
//! ```shell
//! TENCENTCLOUD_SECRET_ID=... TENCENTCLOUD_SECRET_KEY=... \
//!     cargo run --example idcard_ocr -- card.jpg front
//! ```

use anyhow::{anyhow, Result};
use log::info;
use std::env;
use tc3sign::ocr::{default_client, render_outcome, CardSide, IdCardOcrRequest};
use tokio::sync::oneshot;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| anyhow!("usage: idcard_ocr <image> [front|back]"))?;
    let side: CardSide = args.next().as_deref().unwrap_or("front").parse()?;

    let image = tokio::fs::read(&path).await?;
    let input = IdCardOcrRequest::from_image(&image, side);
    info!("recognizing {path} ({side}), {} bytes", image.len());

    // Recognition runs off the caller's task; only the final text comes back.
    let client = default_client();
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = client.recognize(&input).await;
        let _ = tx.send(render_outcome(&outcome));
    });

    println!("{}", rx.await?);
    Ok(())
}
