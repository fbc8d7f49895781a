use crate::foundation::core::{FrameIndex, FrameRange};

/// Contiguous frame range with its own animation behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Title card, `[0, intro_duration)`.
    Intro,
    /// Player cards, `[intro_duration, intro_duration + total_duration)`.
    Main,
}

/// Classify `frame`.
///
/// Frames after the main phase have no phase: the composition may run past it and those frames
/// show only the background.
pub fn segment(frame: FrameIndex, intro_duration: u64, total_duration: u64) -> Option<Phase> {
    [Phase::Intro, Phase::Main]
        .into_iter()
        .find(|&p| phase_range(p, intro_duration, total_duration).contains(frame))
}

/// Frame range covered by `phase`.
pub fn phase_range(phase: Phase, intro_duration: u64, total_duration: u64) -> FrameRange {
    match phase {
        Phase::Intro => FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(intro_duration),
        },
        Phase::Main => FrameRange {
            start: FrameIndex(intro_duration),
            end: FrameIndex(intro_duration.saturating_add(total_duration)),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/phase.rs"]
mod tests;
