use super::*;
use std::time::Duration;

fn shared(target: u32, total_ms: u64) -> SharedCounter {
    Arc::new(Mutex::new(StatCounter::new(
        target,
        Duration::from_millis(total_ms),
    )))
}

#[test]
fn runs_to_target_and_stops() {
    let counter = shared(5, 50);
    let ticker = CounterTicker::on_visible(&counter).unwrap();
    ticker.wait();
    let c = lock(&counter);
    assert_eq!(c.displayed(), 5);
    assert!(c.is_done());
}

#[test]
fn zero_target_starts_no_timer() {
    let counter = shared(0, 50);
    assert!(CounterTicker::on_visible(&counter).is_none());
    assert!(lock(&counter).is_done());
}

#[test]
fn second_visibility_event_is_ignored() {
    let counter = shared(3, 30);
    let first = CounterTicker::on_visible(&counter);
    assert!(first.is_some());
    assert!(CounterTicker::on_visible(&counter).is_none());
    if let Some(t) = first {
        t.wait();
    }
    assert_eq!(lock(&counter).displayed(), 3);
}

#[test]
fn drop_cancels_pending_ticks() {
    let counter = shared(10, 10_000);
    let started = Instant::now();
    let ticker = CounterTicker::on_visible(&counter).unwrap();
    assert!(!ticker.is_finished());
    drop(ticker);
    assert!(started.elapsed() < Duration::from_millis(900));
    assert_eq!(lock(&counter).displayed(), 0);
}
