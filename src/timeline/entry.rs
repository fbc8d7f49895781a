use crate::{
    animation::interp::ramp_frames,
    animation::spring::spring,
    foundation::core::FrameIndex,
    timeline::config::TimelineConfig,
};

/// Per-card transform produced by the entry animation, before the shared scroll.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EntryTransform {
    /// Card animation clock; 0 at the frame the card starts, negative before.
    pub local_frame: i64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Slide-up component of the vertical offset (main cards only).
    pub slide_y: f64,
    /// Spring component of the vertical offset.
    pub bounce_y: f64,
    /// `slide_y + bounce_y`, in pixels relative to the vertical center.
    pub offset_y: f64,
    /// Static horizontal anchor.
    pub anchor_x: f64,
    /// Whether the card's animation has started.
    pub ready: bool,
}

/// Main-phase frame at which the card at `index` starts animating.
pub fn local_delay(index: usize, cfg: &TimelineConfig) -> u64 {
    let as_u64 = |v: usize| u64::try_from(v).unwrap_or(u64::MAX);
    if index < cfg.main_count {
        cfg.entry_delay
            .saturating_add(as_u64(index).saturating_mul(cfg.entry_duration))
    } else {
        let staggered = as_u64(index - cfg.main_count);
        cfg.main_phase_span()
            .saturating_add(staggered.saturating_mul(cfg.stagger_interval))
    }
}

/// Card animation clock: `frame - local_delay - intro_duration`.
pub fn local_frame(frame: FrameIndex, index: usize, cfg: &TimelineConfig) -> i64 {
    frame.since(local_delay(index, cfg).saturating_add(cfg.intro_duration))
}

/// Fixed layout position of card `index`, independent of the frame.
pub fn anchor_x(index: usize, cfg: &TimelineConfig) -> f64 {
    cfg.screen_width() / 2.0 - cfg.half_spread + (index as f64) * cfg.card_pitch
}

/// Evaluate the entry animation of card `index` at `frame`.
pub fn entry_transform(frame: FrameIndex, index: usize, cfg: &TimelineConfig) -> EntryTransform {
    let local = local_frame(frame, index, cfg);
    let ramp = |len: u64| i64::try_from(len).unwrap_or(i64::MAX);

    let opacity = ramp_frames(local, 0, ramp(cfg.opacity_ramp), 0.0, 1.0);
    let slide_y = if index < cfg.main_count {
        ramp_frames(local, 0, ramp(cfg.slide_ramp), cfg.slide_distance, 0.0)
    } else {
        0.0
    };
    let bounce_y = spring(local, cfg.fps, 1.0, 0.0, cfg.spring) * cfg.bounce_px;

    EntryTransform {
        local_frame: local,
        opacity,
        slide_y,
        bounce_y,
        offset_y: slide_y + bounce_y,
        anchor_x: anchor_x(index, cfg),
        ready: local >= 0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/entry.rs"]
mod tests;
