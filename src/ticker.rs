//! Repeating timer driving the display refresh.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;

/// A repeating timer running a callback on every period boundary until
/// cancelled or dropped. The overlay never cancels its ticker — it repaints
/// until process termination — but the handle lets tests stop the loop
/// deterministically.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn(period: Duration, mut tick: impl FnMut() + Send + 'static) -> Self {
        let handle = tokio::task::spawn(async move {
            let mut interval = time::interval(period);
            loop {
                interval.tick().await;
                tick();
            }
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
