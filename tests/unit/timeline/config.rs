use super::*;

#[test]
fn defaults_match_reference_production() {
    let cfg = TimelineConfig::default();
    assert_eq!(cfg.total_duration, 60 * 170);
    assert_eq!(cfg.main_phase_span(), 30 + 4 * 30);
    assert_eq!(cfg.scroll_span(), 10_200 - 150);
    assert_eq!(cfg.animated_frames(), 120 + 10_200);
    assert_eq!(cfg.composition_frames(), 60 * 200);
    assert_eq!(cfg.screen_width(), 2560.0);
    cfg.validate().unwrap();
}

#[test]
fn json_overrides_keep_other_defaults() {
    let json = r#"{ "cards_to_show": 10, "spring": { "damping": 8.0 } }"#;
    let cfg = TimelineConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.cards_to_show, 10);
    assert_eq!(cfg.spring.damping, 8.0);
    assert_eq!(cfg.spring.stiffness, 100.0);
    assert_eq!(cfg.main_count, 4);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = TimelineConfig::from_reader("{ \"fps\": 12".as_bytes()).unwrap_err();
    assert!(matches!(err, ScoreReelError::Serde(_)));
}

#[test]
fn negative_scroll_span_is_not_an_error() {
    let cfg = TimelineConfig {
        total_duration: 100,
        ..TimelineConfig::default()
    };
    assert_eq!(cfg.scroll_span(), -50);
    cfg.validate().unwrap();
}

#[test]
fn rejects_broken_values() {
    let bad = [
        TimelineConfig {
            fps: Fps { num: 0, den: 1 },
            ..TimelineConfig::default()
        },
        TimelineConfig {
            canvas: Canvas {
                width: 0,
                height: 10,
            },
            ..TimelineConfig::default()
        },
        TimelineConfig {
            total_duration: 0,
            ..TimelineConfig::default()
        },
        TimelineConfig {
            card_pitch: f64::NAN,
            ..TimelineConfig::default()
        },
        TimelineConfig {
            spring: SpringConfig {
                mass: 0.0,
                ..SpringConfig::default()
            },
            ..TimelineConfig::default()
        },
        TimelineConfig {
            counter_duration_ms: 0,
            ..TimelineConfig::default()
        },
        TimelineConfig {
            composition_duration: 120 + 10_200 - 1,
            ..TimelineConfig::default()
        },
    ];
    for cfg in bad {
        assert!(cfg.validate().is_err(), "{cfg:?}");
    }
}

#[test]
fn composition_may_end_exactly_with_the_main_phase() {
    let cfg = TimelineConfig {
        composition_duration: 120 + 10_200,
        ..TimelineConfig::default()
    };
    cfg.validate().unwrap();
}
