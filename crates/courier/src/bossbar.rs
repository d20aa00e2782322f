//! Floating-bar timed state.
//!
//! Each recipient owns at most one bar, tracked in a shared map. Displaying
//! a new bar replaces the old one. A decaying bar loses `1/durationTicks`
//! progress per tick and removes itself at zero; a non-decaying bar is
//! removed by a one-shot timer after its duration. Unregistering may race
//! with an in-flight tick, which then sees stale state and does nothing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::RecipientId;
use crate::router::{BarColor, BarRequest, BarStyle};
use crate::sink::BarSink;
use crate::timer::{self, TimerHandle};

/// Wall-clock length of one scheduling tick.
pub const TICK: Duration = Duration::from_millis(50);

/// Observable state of one displayed bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarState {
    pub progress: f64,
    pub color: BarColor,
    pub style: BarStyle,
    pub remaining_ticks: i32,
}

struct BarEntry {
    state: BarState,
    generation: u64,
    handle: Option<TimerHandle>,
}

/// Owns per-recipient bar state and drives the decay animation.
///
/// Must be created inside a tokio runtime; display and tick both lock the
/// shared map, and each display stamps a generation so a replaced bar's
/// leftover timer becomes a no-op.
pub struct BossbarManager<S: BarSink> {
    sink: Arc<S>,
    bars: Arc<Mutex<HashMap<RecipientId, BarEntry>>>,
    tick: Duration,
    generation: AtomicU64,
}

impl<S: BarSink> BossbarManager<S> {
    /// A manager animating at the standard tick cadence.
    pub fn new(sink: Arc<S>) -> Self {
        Self::with_tick(sink, TICK)
    }

    /// A manager with a custom tick cadence.
    pub fn with_tick(sink: Arc<S>, tick: Duration) -> Self {
        Self {
            sink,
            bars: Arc::new(Mutex::new(HashMap::new())),
            tick,
            generation: AtomicU64::new(0),
        }
    }

    /// Show `text` to `recipient`, replacing any bar already displayed.
    pub fn display(&self, recipient: RecipientId, text: &str, request: &BarRequest) {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed);
        {
            let mut bars = self.bars.lock().unwrap();
            // Inserting drops the previous entry and thereby its timer.
            bars.insert(
                recipient,
                BarEntry {
                    state: BarState {
                        progress: 1.0,
                        color: request.color,
                        style: request.style,
                        remaining_ticks: request.duration.max(0),
                    },
                    generation,
                    handle: None,
                },
            );
        }
        self.sink.show(recipient, text, request.color, request.style);

        let handle = if request.decaying && request.duration > 0 {
            self.decay_task(recipient, generation, request.duration)
        } else {
            self.removal_task(recipient, generation, request.duration)
        };

        let mut bars = self.bars.lock().unwrap();
        if let Some(entry) = bars.get_mut(&recipient) {
            if entry.generation == generation {
                entry.handle = Some(handle);
            }
        }
    }

    /// Remove the bar for `recipient`, if any.
    ///
    /// Dropping the entry cancels its timer; a tick already in flight sees
    /// the missing entry and stops.
    pub fn unregister(&self, recipient: RecipientId) {
        let removed = self.bars.lock().unwrap().remove(&recipient);
        if removed.is_some() {
            self.sink.remove(recipient);
        }
    }

    /// Current progress for `recipient`, if a bar is displayed.
    pub fn progress(&self, recipient: RecipientId) -> Option<f64> {
        self.state(recipient).map(|state| state.progress)
    }

    /// Full observable state for `recipient`, if a bar is displayed.
    pub fn state(&self, recipient: RecipientId) -> Option<BarState> {
        self.bars
            .lock()
            .unwrap()
            .get(&recipient)
            .map(|entry| entry.state)
    }

    /// Returns true if `recipient` currently has a bar.
    pub fn is_displayed(&self, recipient: RecipientId) -> bool {
        self.bars.lock().unwrap().contains_key(&recipient)
    }

    fn decay_task(&self, recipient: RecipientId, generation: u64, duration: i32) -> TimerHandle {
        let step = 1.0 / f64::from(duration);
        let bars = Arc::clone(&self.bars);
        let sink = Arc::clone(&self.sink);
        timer::set_interval(self.tick, move || {
            let mut map = bars.lock().unwrap();
            let Some(entry) = map.get_mut(&recipient) else {
                return false;
            };
            if entry.generation != generation {
                return false;
            }
            let progress = entry.state.progress;
            entry.state.progress -= step;
            entry.state.remaining_ticks -= 1;
            let done = entry.state.progress <= 0.0;
            if done {
                map.remove(&recipient);
            }
            drop(map);
            sink.set_progress(recipient, progress);
            if done {
                sink.remove(recipient);
            }
            !done
        })
    }

    fn removal_task(&self, recipient: RecipientId, generation: u64, duration: i32) -> TimerHandle {
        let delay = self.tick * duration.max(0) as u32;
        let bars = Arc::clone(&self.bars);
        let sink = Arc::clone(&self.sink);
        timer::set_timer(delay, move || {
            let mut map = bars.lock().unwrap();
            let current = map
                .get(&recipient)
                .is_some_and(|entry| entry.generation == generation);
            if current {
                map.remove(&recipient);
                drop(map);
                sink.remove(recipient);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct RecordingBar {
        shown: StdMutex<Vec<(RecipientId, String)>>,
        progress: StdMutex<Vec<f64>>,
        removed: StdMutex<Vec<RecipientId>>,
    }

    impl BarSink for RecordingBar {
        fn show(&self, recipient: RecipientId, text: &str, _color: BarColor, _style: BarStyle) {
            self.shown.lock().unwrap().push((recipient, text.to_string()));
        }

        fn set_progress(&self, _recipient: RecipientId, progress: f64) {
            self.progress.lock().unwrap().push(progress);
        }

        fn remove(&self, recipient: RecipientId) {
            self.removed.lock().unwrap().push(recipient);
        }
    }

    fn fast_manager(sink: &Arc<RecordingBar>) -> BossbarManager<RecordingBar> {
        BossbarManager::with_tick(Arc::clone(sink), Duration::from_millis(2))
    }

    #[tokio::test]
    async fn display_registers_at_full_progress() {
        let sink = Arc::new(RecordingBar::default());
        let manager = fast_manager(&sink);
        let request = BarRequest {
            duration: 10_000,
            ..BarRequest::default()
        };
        manager.display(7, "hello", &request);
        assert_eq!(manager.progress(7), Some(1.0));
        assert!(manager.is_displayed(7));
        let state = manager.state(7).unwrap();
        assert_eq!(state.color, BarColor::White);
        assert_eq!(state.style, BarStyle::Solid);
        assert_eq!(state.remaining_ticks, 10_000);
        assert_eq!(sink.shown.lock().unwrap().as_slice(), &[(7, "hello".into())]);
    }

    #[tokio::test]
    async fn decaying_bar_runs_out_and_unregisters() {
        let sink = Arc::new(RecordingBar::default());
        let manager = fast_manager(&sink);
        let request = BarRequest {
            duration: 5,
            decaying: true,
            ..BarRequest::default()
        };
        manager.display(1, "going", &request);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!manager.is_displayed(1));
        assert_eq!(sink.removed.lock().unwrap().as_slice(), &[1]);
        let progress = sink.progress.lock().unwrap();
        assert_eq!(progress.first().copied(), Some(1.0));
        assert!(progress.windows(2).all(|w| w[1] <= w[0]));
    }

    #[tokio::test]
    async fn static_bar_removed_after_duration() {
        let sink = Arc::new(RecordingBar::default());
        let manager = fast_manager(&sink);
        let request = BarRequest {
            duration: 5,
            decaying: false,
            ..BarRequest::default()
        };
        manager.display(2, "steady", &request);
        assert!(manager.is_displayed(2));
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!manager.is_displayed(2));
        assert_eq!(sink.removed.lock().unwrap().as_slice(), &[2]);
        // No decay ticks for a static bar.
        assert!(sink.progress.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn redisplay_replaces_prior_state() {
        let sink = Arc::new(RecordingBar::default());
        let manager = fast_manager(&sink);
        let long = BarRequest {
            duration: 100_000,
            decaying: true,
            ..BarRequest::default()
        };
        manager.display(3, "first", &long);
        manager.display(3, "second", &long);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(manager.progress(3).map(|p| p > 0.9), Some(true));
        assert_eq!(sink.shown.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unregister_is_idempotent_and_stops_ticks() {
        let sink = Arc::new(RecordingBar::default());
        let manager = fast_manager(&sink);
        let request = BarRequest {
            duration: 10_000,
            decaying: true,
            ..BarRequest::default()
        };
        manager.display(4, "bar", &request);
        manager.unregister(4);
        manager.unregister(4);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!manager.is_displayed(4));
        assert_eq!(sink.removed.lock().unwrap().as_slice(), &[4]);
    }
}
