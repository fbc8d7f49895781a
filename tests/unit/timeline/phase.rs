use super::*;

#[test]
fn boundaries() {
    assert_eq!(segment(FrameIndex(0), 120, 300), Some(Phase::Intro));
    assert_eq!(segment(FrameIndex(119), 120, 300), Some(Phase::Intro));
    assert_eq!(segment(FrameIndex(120), 120, 300), Some(Phase::Main));
    assert_eq!(segment(FrameIndex(419), 120, 300), Some(Phase::Main));
    assert_eq!(segment(FrameIndex(420), 120, 300), None);
}

#[test]
fn zero_length_intro_starts_in_main() {
    assert_eq!(segment(FrameIndex(0), 0, 10), Some(Phase::Main));
}

#[test]
fn ranges_agree_with_segment() {
    for phase in [Phase::Intro, Phase::Main] {
        let r = phase_range(phase, 120, 300);
        for f in r.start.0..r.end.0 {
            assert_eq!(segment(FrameIndex(f), 120, 300), Some(phase));
        }
    }
}
