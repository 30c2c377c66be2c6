use futures::StreamExt;
use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::IntervalStream;
use std::time::Duration;

use crate::domain::logging::{LogComponent, get_logger};

/// Cadence of the package maturation countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Scheduled task that calls `on_tick` once per period until stopped.
///
/// The task lives exactly as long as this handle: dropping it (or calling
/// [`CountdownTicker::stop`]) aborts the interval, so a torn-down view never
/// leaves a timer behind.
pub struct CountdownTicker {
    abort: AbortHandle,
    period: Duration,
}

impl CountdownTicker {
    pub fn start(period: Duration, mut on_tick: impl FnMut() + 'static) -> Self {
        let (abort, registration) = AbortHandle::new_pair();
        let millis = period.as_millis().clamp(1, u32::MAX as u128) as u32;

        let ticks = async move {
            let mut interval = IntervalStream::new(millis);
            while interval.next().await.is_some() {
                on_tick();
            }
        };

        wasm_bindgen_futures::spawn_local(async move {
            if Abortable::new(ticks, registration).await.is_err() {
                get_logger().debug(LogComponent::Application("Countdown"), "⏹️ Ticker aborted");
            }
        });

        crate::log_debug!(LogComponent::Application("Countdown"), "▶️ Ticker started every {}ms", millis);
        Self { abort, period }
    }

    /// One-second ticker for the share ledger.
    pub fn every_second(on_tick: impl FnMut() + 'static) -> Self {
        Self::start(TICK_PERIOD, on_tick)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        !self.abort.is_aborted()
    }

    /// Idempotent.
    pub fn stop(&self) {
        self.abort.abort();
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
