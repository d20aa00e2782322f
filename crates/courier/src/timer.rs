//! Periodic and one-shot timers for the floating-bar animation.
//!
//! Thin wrappers over the tokio runtime. The boss-bar state machine only
//! needs "register recurring callback, cancel callback", so nothing of the
//! scheduler leaks past this module.

use std::time::Duration;

use tokio::sync::oneshot;

/// Handle to cancel a running timer.
///
/// The timer is automatically cancelled when this handle is dropped.
#[derive(Debug)]
pub struct TimerHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl TimerHandle {
    /// Cancel the timer, stopping further callbacks.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Invoke `tick` every `period` until it returns `false` or the handle is
/// cancelled. The first tick fires immediately.
pub fn set_interval<F>(period: Duration, mut tick: F) -> TimerHandle
where
    F: FnMut() -> bool + Send + 'static,
{
    let (cancel_tx, mut cancel_rx) = oneshot::channel();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if !tick() {
                        break;
                    }
                }
                _ = &mut cancel_rx => {
                    break;
                }
            }
        }
    });
    TimerHandle {
        cancel_tx: Some(cancel_tx),
    }
}

/// Invoke `callback` once after `delay` unless cancelled first.
pub fn set_timer<F>(delay: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let (cancel_tx, mut cancel_rx) = oneshot::channel();
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(delay) => callback(),
            _ = &mut cancel_rx => {}
        }
    });
    TimerHandle {
        cancel_tx: Some(cancel_tx),
    }
}
