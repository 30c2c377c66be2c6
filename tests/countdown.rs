#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use radbot_dashboard::application::CountdownTicker;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn counting_ticker(period_ms: u64) -> (CountdownTicker, Rc<Cell<u32>>) {
    let ticks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&ticks);
    let ticker = CountdownTicker::start(Duration::from_millis(period_ms), move || {
        counter.set(counter.get() + 1);
    });
    (ticker, ticks)
}

#[wasm_bindgen_test(async)]
async fn ticks_until_stopped() {
    let (ticker, ticks) = counting_ticker(10);
    assert!(ticker.is_running());

    sleep(Duration::from_millis(75)).await;
    assert!(ticks.get() >= 3);

    ticker.stop();
    assert!(!ticker.is_running());
    let frozen = ticks.get();
    sleep(Duration::from_millis(50)).await;
    assert_eq!(ticks.get(), frozen);
}

#[wasm_bindgen_test(async)]
async fn dropping_the_ticker_cancels_it() {
    let (ticker, ticks) = counting_ticker(10);
    drop(ticker);

    sleep(Duration::from_millis(50)).await;
    assert_eq!(ticks.get(), 0);
}

#[wasm_bindgen_test]
fn default_cadence_is_one_second() {
    let ticker = CountdownTicker::every_second(|| {});
    assert_eq!(ticker.period(), Duration::from_secs(1));
}
