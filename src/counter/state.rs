use std::time::{Duration, Instant};

/// Lifecycle of a one-shot count-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterState {
    /// Not yet seen; nothing displayed beyond 0.
    Idle,
    /// Counting up one step per `interval` since `started_at`.
    Counting {
        /// Instant the card became visible.
        started_at: Instant,
        /// Time between steps.
        interval: Duration,
    },
    /// Target reached (or target was 0). Terminal.
    Done,
}

/// Visibility-triggered count-up from 0 to a target value.
///
/// Runs on wall-clock time, independent of the frame clock: it starts at the first visibility
/// event and never restarts.
#[derive(Clone, Debug)]
pub struct StatCounter {
    target: u32,
    total: Duration,
    displayed: u32,
    state: CounterState,
}

impl StatCounter {
    /// Counter for `target` spreading the full count over `total`.
    pub fn new(target: u32, total: Duration) -> Self {
        Self {
            target,
            total,
            displayed: 0,
            state: CounterState::Idle,
        }
    }

    /// Value the counter stops at.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Value to print right now.
    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CounterState {
        self.state
    }

    /// `true` once the counter can no longer change.
    pub fn is_done(&self) -> bool {
        self.state == CounterState::Done
    }

    /// Step interval: `total / target` in whole milliseconds, at least 1 ms.
    /// `None` when the target is 0 and no timer is needed.
    pub fn interval(&self) -> Option<Duration> {
        if self.target == 0 {
            return None;
        }
        let ms = self.total.as_millis() / u128::from(self.target);
        Some(Duration::from_millis(u64::try_from(ms).unwrap_or(u64::MAX).max(1)))
    }

    /// Feed a "became visible" event. Returns `true` when a timer must be started.
    ///
    /// Only the first event in `Idle` has an effect.
    pub fn on_visible(&mut self, now: Instant) -> bool {
        if self.state != CounterState::Idle {
            return false;
        }
        match self.interval() {
            None => {
                self.displayed = 0;
                self.state = CounterState::Done;
                false
            }
            Some(interval) => {
                self.state = CounterState::Counting {
                    started_at: now,
                    interval,
                };
                true
            }
        }
    }

    /// Apply one timer tick. Returns the displayed value after the tick.
    pub fn tick(&mut self) -> u32 {
        if let CounterState::Counting { .. } = self.state {
            if self.displayed < self.target {
                self.displayed += 1;
            }
            if self.displayed >= self.target {
                self.state = CounterState::Done;
            }
        }
        self.displayed
    }

    /// Apply every tick that has elapsed by `now`.
    pub fn advance_to(&mut self, now: Instant) -> u32 {
        let CounterState::Counting {
            started_at,
            interval,
        } = self.state
        else {
            return self.displayed;
        };
        let elapsed = now.saturating_duration_since(started_at);
        let due = elapsed.as_nanos() / interval.as_nanos().max(1);
        let due = u32::try_from(due).unwrap_or(u32::MAX).min(self.target);
        while self.displayed < due {
            self.tick();
        }
        self.displayed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/counter/state.rs"]
mod tests;
