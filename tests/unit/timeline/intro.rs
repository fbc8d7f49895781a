use super::*;

#[test]
fn title_leads_subtitle() {
    let s = intro_state(FrameIndex(0));
    assert_eq!(s.title.slide_pct, 100.0);
    assert_eq!(s.title.opacity, 0.0);
    assert_eq!(s.subtitle.opacity, 0.0);

    let s = intro_state(FrameIndex(15));
    assert_eq!(s.title.opacity, 0.75);
    assert_eq!(s.subtitle.opacity, 0.0);
    assert_eq!(s.subtitle.slide_pct, 100.0);
}

#[test]
fn settles_by_frame_forty() {
    for f in [40, 60, 119] {
        let s = intro_state(FrameIndex(f));
        assert_eq!(s.title.slide_pct, 0.0);
        assert_eq!(s.title.opacity, 1.0);
        assert_eq!(s.subtitle.slide_pct, 0.0);
        assert_eq!(s.subtitle.opacity, 1.0);
    }
}
