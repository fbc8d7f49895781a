use crate::{
    animation::interp::ramp_frames, foundation::core::FrameIndex, timeline::config::TimelineConfig,
};

/// Leftmost scroll position: the last laid-out card sits where the first one started.
pub fn final_scroll_x(cfg: &TimelineConfig) -> f64 {
    let steps = cfg.cards_to_show.saturating_sub(1) as f64;
    -cfg.card_pitch * steps
}

/// Shared horizontal translation applied to every card anchor at `frame`.
///
/// The pan starts once the front-loaded cards have started and ends at the main-phase end. A
/// non-positive span degenerates to a jump to [`final_scroll_x`] at the pan start.
pub fn scroll_x(frame: FrameIndex, cfg: &TimelineConfig) -> f64 {
    let local = frame.since(cfg.main_phase_span());
    let span = cfg.scroll_span().max(0);
    ramp_frames(local, 0, span, 0.0, final_scroll_x(cfg))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scroll.rs"]
mod tests;
