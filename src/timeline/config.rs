use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::spring::SpringConfig,
    card::template::CardTemplate,
    foundation::core::{Canvas, Fps, to_signed},
    foundation::error::{ScoreReelError, ScoreReelResult},
    timeline::intro::IntroText,
};

/// Immutable timing and layout parameters for one composition.
///
/// Every field has a default taken from the reference 60 fps / 2560x1440 production, so a JSON
/// config only needs to list the values it overrides. `total_duration` and `composition_duration`
/// do not follow `fps` automatically; override them together.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Composition frame rate.
    pub fps: Fps,
    /// Output canvas; `canvas.width` is the screen width used for anchors.
    pub canvas: Canvas,
    /// Length of the intro phase in frames.
    pub intro_duration: u64,
    /// Length of the main phase in frames.
    pub total_duration: u64,
    /// Length of the whole composition in frames. Frames after the main phase show only the
    /// background. Must cover at least `intro_duration + total_duration`.
    pub composition_duration: u64,
    /// How many entities are laid out (and how far the scroll travels).
    pub cards_to_show: usize,
    /// Frames before the first main card starts.
    pub entry_delay: u64,
    /// Spacing between consecutive main-card starts.
    pub entry_duration: u64,
    /// Spacing between consecutive staggered-card starts.
    pub stagger_interval: u64,
    /// Number of front-loaded cards on the fast cadence.
    pub main_count: usize,
    /// Horizontal distance between adjacent card anchors in pixels.
    pub card_pitch: f64,
    /// Offset of the first anchor left of screen center in pixels.
    pub half_spread: f64,
    /// Frames for the 0 -> 1 opacity ramp.
    pub opacity_ramp: u64,
    /// Frames for the slide-up ramp of main cards.
    pub slide_ramp: u64,
    /// Initial slide-up offset of main cards in pixels.
    pub slide_distance: f64,
    /// Pixel scale applied to the bounce spring displacement.
    pub bounce_px: f64,
    /// Bounce spring parameters.
    pub spring: SpringConfig,
    /// Card presentation template.
    pub template: CardTemplate,
    /// Intro title strings.
    pub intro: IntroText,
    /// Wall-clock duration of a full stat count-up in milliseconds.
    pub counter_duration_ms: u64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        let fps = Fps::default();
        let secs = u64::from(fps.num / fps.den);
        Self {
            fps,
            canvas: Canvas::default(),
            intro_duration: 120,
            total_duration: secs * 170,
            composition_duration: secs * 200,
            cards_to_show: 30,
            entry_delay: 30,
            entry_duration: 30,
            stagger_interval: 100,
            main_count: 4,
            card_pitch: 650.0,
            half_spread: 1300.0,
            opacity_ramp: 20,
            slide_ramp: 30,
            slide_distance: 200.0,
            bounce_px: 20.0,
            spring: SpringConfig::default(),
            template: CardTemplate::default(),
            intro: IntroText::default(),
            counter_duration_ms: 1500,
        }
    }
}

impl TimelineConfig {
    /// Parse a config from a JSON reader. Missing fields keep their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScoreReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScoreReelError::serde(format!("parse timeline config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScoreReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScoreReelError::config(format!("open timeline config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Frames from main-phase start until the last front-loaded card starts.
    pub fn main_phase_span(&self) -> u64 {
        let main = u64::try_from(self.main_count).unwrap_or(u64::MAX);
        self.entry_delay
            .saturating_add(main.saturating_mul(self.entry_duration))
    }

    /// Raw scroll span `total_duration - main_phase_span`; negative when misconfigured.
    pub fn scroll_span(&self) -> i64 {
        to_signed(self.total_duration).saturating_sub(to_signed(self.main_phase_span()))
    }

    /// Intro plus main phase length.
    pub fn animated_frames(&self) -> u64 {
        self.intro_duration.saturating_add(self.total_duration)
    }

    /// Total frame count of the composition.
    pub fn composition_frames(&self) -> u64 {
        self.composition_duration
    }

    /// Screen width in pixels.
    pub fn screen_width(&self) -> f64 {
        f64::from(self.canvas.width)
    }

    /// Reject values that would make evaluation meaningless.
    ///
    /// Inconsistent but well-formed durations (a negative scroll span) only log a warning;
    /// evaluation degrades by jumping the scroll to its final position.
    pub fn validate(&self) -> ScoreReelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ScoreReelError::config("canvas width/height must be > 0"));
        }
        if self.total_duration == 0 {
            return Err(ScoreReelError::config("total_duration must be > 0 frames"));
        }
        if self.composition_duration < self.animated_frames() {
            return Err(ScoreReelError::config(format!(
                "composition_duration {} is shorter than intro_duration + total_duration ({})",
                self.composition_duration,
                self.animated_frames()
            )));
        }
        if !self.card_pitch.is_finite() || self.card_pitch <= 0.0 {
            return Err(ScoreReelError::config("card_pitch must be finite and > 0"));
        }
        for (name, value) in [
            ("half_spread", self.half_spread),
            ("slide_distance", self.slide_distance),
            ("bounce_px", self.bounce_px),
        ] {
            if !value.is_finite() {
                return Err(ScoreReelError::config(format!("{name} must be finite")));
            }
        }
        let s = self.spring;
        if !(s.damping.is_finite() && s.damping >= 0.0) {
            return Err(ScoreReelError::config("spring.damping must be finite and >= 0"));
        }
        if !(s.stiffness.is_finite() && s.stiffness >= 0.0) {
            return Err(ScoreReelError::config(
                "spring.stiffness must be finite and >= 0",
            ));
        }
        if !(s.mass.is_finite() && s.mass > 0.0) {
            return Err(ScoreReelError::config("spring.mass must be finite and > 0"));
        }
        if self.counter_duration_ms == 0 {
            return Err(ScoreReelError::config("counter_duration_ms must be > 0"));
        }

        if self.scroll_span() < 0 {
            tracing::warn!(
                main_phase_span = self.main_phase_span(),
                total_duration = self.total_duration,
                "entry animations outlast the main phase; scroll will jump to its end position"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/config.rs"]
mod tests;
