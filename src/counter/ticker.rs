use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::Instant;

use crate::counter::state::StatCounter;

/// A counter shared between a card and its ticker thread.
pub type SharedCounter = Arc<Mutex<StatCounter>>;

fn lock(counter: &Mutex<StatCounter>) -> MutexGuard<'_, StatCounter> {
    // A panic while holding the lock cannot leave a StatCounter half-updated.
    counter.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Real-time interval timer driving one [`StatCounter`].
///
/// The thread exits on its own once the target is reached. Dropping the ticker cancels the timer
/// and joins the thread, so no recurring callback outlives the card.
#[derive(Debug)]
pub struct CounterTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CounterTicker {
    /// Deliver a visibility event to `counter` and start its timer if one is needed.
    ///
    /// Returns `None` when the counter was already triggered or its target is 0.
    pub fn on_visible(counter: &SharedCounter) -> Option<Self> {
        let interval = {
            let mut c = lock(counter);
            if !c.on_visible(Instant::now()) {
                return None;
            }
            c.interval()?
        };

        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let thread_counter = Arc::clone(counter);
        let handle = std::thread::spawn(move || {
            let mut next = Instant::now() + interval;
            while !thread_stop.load(Ordering::Acquire) {
                let now = Instant::now();
                if now < next {
                    std::thread::park_timeout(next - now);
                    continue;
                }
                next += interval;
                let mut c = lock(&thread_counter);
                c.tick();
                if c.is_done() {
                    tracing::debug!(value = c.displayed(), "stat counter finished");
                    break;
                }
            }
        });

        Some(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// `true` once the timer thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Block until the counter reaches its target.
    pub fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            let _ = handle.join();
        }
    }
}

impl Drop for CounterTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/counter/ticker.rs"]
mod tests;
