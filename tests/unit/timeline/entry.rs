use super::*;

fn cfg() -> TimelineConfig {
    TimelineConfig {
        entry_delay: 30,
        entry_duration: 30,
        main_count: 4,
        stagger_interval: 100,
        intro_duration: 120,
        ..TimelineConfig::default()
    }
}

#[test]
fn delays_follow_two_cadences() {
    let cfg = cfg();
    assert_eq!(local_delay(0, &cfg), 30);
    assert_eq!(local_delay(1, &cfg), 60);
    assert_eq!(local_delay(3, &cfg), 120);
    assert_eq!(local_delay(4, &cfg), 150);
    assert_eq!(local_delay(5, &cfg), 250);
    assert_eq!(local_delay(29, &cfg), 150 + 25 * 100);
}

#[test]
fn first_card_at_its_start_frame() {
    let cfg = cfg();
    let t = entry_transform(FrameIndex(150), 0, &cfg);
    assert_eq!(t.local_frame, 0);
    assert_eq!(t.opacity, 0.0);
    assert_eq!(t.slide_y, 200.0);
    assert_eq!(t.bounce_y, cfg.bounce_px);
    assert!(t.ready);
}

#[test]
fn first_card_mid_slide() {
    let cfg = cfg();
    let t = entry_transform(FrameIndex(175), 0, &cfg);
    assert_eq!(t.local_frame, 25);
    // The opacity ramp is 20 frames long, so it has finished; the 30-frame slide has not.
    assert_eq!(t.opacity, 1.0);
    assert!((t.slide_y - 200.0 / 6.0).abs() < 1e-9, "slide={}", t.slide_y);

    let mid = entry_transform(FrameIndex(165), 0, &cfg);
    assert!((mid.opacity - 0.75).abs() < 1e-12);
}

#[test]
fn hidden_and_not_ready_before_start() {
    let cfg = cfg();
    for index in 0..cfg.cards_to_show {
        let start = local_delay(index, &cfg) + cfg.intro_duration;
        for frame in [0, start / 2, start.saturating_sub(1)] {
            if frame >= start {
                continue;
            }
            let t = entry_transform(FrameIndex(frame), index, &cfg);
            assert_eq!(t.opacity, 0.0, "index={index} frame={frame}");
            assert!(!t.ready, "index={index} frame={frame}");
        }
    }
}

#[test]
fn opacity_ramps_monotonically_then_holds() {
    let cfg = cfg();
    for index in [0, 3, 4, 12] {
        let start = local_delay(index, &cfg) + cfg.intro_duration;
        let mut prev = 0.0;
        for local in 0..=20 {
            let o = entry_transform(FrameIndex(start + local), index, &cfg).opacity;
            assert!(o >= prev);
            prev = o;
        }
        for local in 20..200 {
            let o = entry_transform(FrameIndex(start + local), index, &cfg).opacity;
            assert_eq!(o, 1.0);
        }
    }
}

#[test]
fn staggered_cards_only_bounce() {
    let cfg = cfg();
    let t = entry_transform(FrameIndex(270 + 10), 4, &cfg);
    assert_eq!(t.slide_y, 0.0);
    assert_eq!(t.offset_y, t.bounce_y);
    assert!(t.bounce_y < cfg.bounce_px);
}

#[test]
fn anchors_are_evenly_spaced() {
    let cfg = cfg();
    assert_eq!(anchor_x(0, &cfg), 2560.0 / 2.0 - 1300.0);
    assert_eq!(anchor_x(1, &cfg) - anchor_x(0, &cfg), 650.0);
    assert_eq!(
        entry_transform(FrameIndex(0), 7, &cfg).anchor_x,
        entry_transform(FrameIndex(9000), 7, &cfg).anchor_x
    );
}

#[test]
fn repeated_queries_are_bit_identical() {
    let cfg = cfg();
    for frame in [0, 150, 163, 175, 999, 4000] {
        for index in [0, 2, 4, 17] {
            let a = entry_transform(FrameIndex(frame), index, &cfg);
            let b = entry_transform(FrameIndex(frame), index, &cfg);
            assert_eq!(a.opacity.to_bits(), b.opacity.to_bits());
            assert_eq!(a.offset_y.to_bits(), b.offset_y.to_bits());
            assert_eq!(a.anchor_x.to_bits(), b.anchor_x.to_bits());
            assert_eq!(a.ready, b.ready);
        }
    }
}
