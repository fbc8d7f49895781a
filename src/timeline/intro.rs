use crate::{animation::interp::ramp_frames, foundation::core::FrameIndex};

/// Title strings shown during the intro phase.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IntroText {
    /// Headline.
    pub title: String,
    /// Line under the headline.
    pub subtitle: String,
}

impl Default for IntroText {
    fn default() -> Self {
        Self {
            title: "Juventus All-Time Top Scorers".to_owned(),
            subtitle: "A Legacy of Goals, A History of Greatness".to_owned(),
        }
    }
}

/// Animated state of one intro line.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LineState {
    /// Vertical offset as a percentage of the line height (100 = fully below its mask).
    pub slide_pct: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Intro title card state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct IntroState {
    /// Headline animation.
    pub title: LineState,
    /// Subtitle animation, trailing the headline by 15 frames.
    pub subtitle: LineState,
}

/// Evaluate the intro title card. `frame` is counted from composition start.
pub fn intro_state(frame: FrameIndex) -> IntroState {
    let f = frame.since(0);
    IntroState {
        title: LineState {
            slide_pct: ramp_frames(f, 0, 25, 100.0, 0.0),
            opacity: ramp_frames(f, 0, 20, 0.0, 1.0),
        },
        subtitle: LineState {
            slide_pct: ramp_frames(f, 15, 40, 100.0, 0.0),
            opacity: ramp_frames(f, 15, 35, 0.0, 1.0),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/intro.rs"]
mod tests;
