use super::*;

const TOTAL: Duration = Duration::from_millis(1500);

#[test]
fn interval_is_floored_total_over_target() {
    assert_eq!(
        StatCounter::new(7, TOTAL).interval(),
        Some(Duration::from_millis(214))
    );
    assert_eq!(
        StatCounter::new(5000, TOTAL).interval(),
        Some(Duration::from_millis(1))
    );
    assert_eq!(StatCounter::new(0, TOTAL).interval(), None);
}

#[test]
fn zero_target_finishes_without_timer() {
    let mut c = StatCounter::new(0, TOTAL);
    assert!(!c.on_visible(Instant::now()));
    assert!(c.is_done());
    assert_eq!(c.displayed(), 0);
    assert_eq!(c.tick(), 0);
}

#[test]
fn ticks_increase_by_one_until_target() {
    let mut c = StatCounter::new(4, TOTAL);
    assert_eq!(c.tick(), 0, "idle counters ignore ticks");
    assert!(c.on_visible(Instant::now()));

    let mut prev = c.displayed();
    for _ in 0..4 {
        let v = c.tick();
        assert_eq!(v, prev + 1);
        prev = v;
    }
    assert!(c.is_done());
    for _ in 0..10 {
        assert_eq!(c.tick(), 4);
    }
}

#[test]
fn visibility_is_one_shot() {
    let t0 = Instant::now();
    let mut c = StatCounter::new(3, TOTAL);
    assert!(c.on_visible(t0));
    assert!(!c.on_visible(t0 + Duration::from_secs(1)));
    c.advance_to(t0 + Duration::from_secs(10));
    assert!(c.is_done());
    assert!(!c.on_visible(t0 + Duration::from_secs(20)));
    assert_eq!(c.displayed(), 3);
}

#[test]
fn advance_follows_wall_clock() {
    let t0 = Instant::now();
    let mut c = StatCounter::new(10, TOTAL);
    assert_eq!(c.advance_to(t0), 0);
    c.on_visible(t0);
    assert_eq!(c.advance_to(t0 + Duration::from_millis(149)), 0);
    assert_eq!(c.advance_to(t0 + Duration::from_millis(150)), 1);
    assert_eq!(c.advance_to(t0 + Duration::from_millis(760)), 5);
    assert_eq!(c.advance_to(t0 + Duration::from_millis(100)), 5);
    assert_eq!(c.advance_to(t0 + Duration::from_secs(60)), 10);
    assert!(c.is_done());
}
