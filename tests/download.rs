#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use radbot_dashboard::infrastructure::browser::{REVOKE_DELAY_MS, download_bytes};
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn body_children() -> u32 {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().child_element_count()
}

#[wasm_bindgen_test]
async fn download_cleans_up_link_now_and_url_later() {
    let before = body_children();

    download_bytes(b"\x89PNG", "radbot-dashboard-test.png", "image/png").unwrap();
    assert_eq!(body_children(), before);

    // The deferred revoke must fire without panicking.
    TimeoutFuture::new(REVOKE_DELAY_MS + 50).await;
    assert_eq!(body_children(), before);
}
