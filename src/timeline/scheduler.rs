use crate::{
    dataset::load::{DatasetOpts, load_players_or_empty},
    dataset::player::Player,
    foundation::core::{Affine, FrameIndex, FrameRange},
    foundation::error::ScoreReelResult,
    timeline::config::TimelineConfig,
    timeline::entry::entry_transform,
    timeline::intro::{IntroState, intro_state},
    timeline::phase::{Phase, segment},
    timeline::scroll::scroll_x,
};

/// Final render state of one card for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CardState {
    /// Player rank (stable identity).
    pub rank: u32,
    /// Position in the laid-out list.
    pub index: usize,
    /// Card animation clock.
    pub local_frame: i64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical offset from the canvas center line, in pixels.
    pub offset_y: f64,
    /// Static horizontal anchor.
    pub anchor_x: f64,
    /// `anchor_x + scroll_x`.
    pub x: f64,
    /// Whether the card's animation has started.
    pub ready: bool,
}

impl CardState {
    /// Translation from card space (origin at the card's left edge on the canvas center line)
    /// to canvas space.
    pub fn transform(&self) -> Affine {
        Affine::translate((self.x, self.offset_y))
    }
}

/// Everything the render collaborator needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameState {
    /// Evaluated frame.
    pub frame: FrameIndex,
    /// Active phase; `None` once the main phase is over.
    pub phase: Option<Phase>,
    /// Shared horizontal pan.
    pub scroll_x: f64,
    /// Intro title card, during the intro phase only.
    pub intro: Option<IntroState>,
    /// Laid-out cards in list order, during the main phase only.
    pub cards: Vec<CardState>,
}

/// Compute the visual state of `frame`.
///
/// Pure: the result depends only on the arguments, so frames can be evaluated in any order, in
/// parallel, or repeatedly. `players` is used in the given order; only the first
/// `cfg.cards_to_show` entries are laid out.
pub fn compute_frame_state(
    frame: FrameIndex,
    cfg: &TimelineConfig,
    players: &[Player],
) -> FrameState {
    let phase = segment(frame, cfg.intro_duration, cfg.total_duration);
    let scroll = scroll_x(frame, cfg);

    let intro = (phase == Some(Phase::Intro)).then(|| intro_state(frame));
    let cards = if phase == Some(Phase::Main) {
        players
            .iter()
            .take(cfg.cards_to_show)
            .enumerate()
            .map(|(index, p)| {
                let t = entry_transform(frame, index, cfg);
                CardState {
                    rank: p.rank,
                    index,
                    local_frame: t.local_frame,
                    opacity: t.opacity,
                    offset_y: t.offset_y,
                    anchor_x: t.anchor_x,
                    x: t.anchor_x + scroll,
                    ready: t.ready,
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    FrameState {
        frame,
        phase,
        scroll_x: scroll,
        intro,
        cards,
    }
}

/// Immutable configuration plus dataset, evaluated one frame at a time.
#[derive(Clone, Debug)]
pub struct TimelineScheduler {
    config: TimelineConfig,
    players: Vec<Player>,
}

impl TimelineScheduler {
    /// Build a scheduler over an already ordered player list.
    pub fn new(config: TimelineConfig, players: Vec<Player>) -> ScoreReelResult<Self> {
        config.validate()?;
        Ok(Self { config, players })
    }

    /// Build a scheduler from a raw JSON dataset; a dataset that fails validation yields a
    /// scheduler with zero players instead of an error.
    pub fn from_dataset_or_empty<R: std::io::Read>(
        config: TimelineConfig,
        dataset: R,
        opts: DatasetOpts,
    ) -> ScoreReelResult<Self> {
        Self::new(config, load_players_or_empty(dataset, opts))
    }

    /// Timeline configuration.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// All players in render order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players that get a card.
    pub fn visible_players(&self) -> &[Player] {
        let n = self.players.len().min(self.config.cards_to_show);
        &self.players[..n]
    }

    /// Every frame of the composition: intro, main phase and the background-only tail.
    pub fn composition_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.config.composition_frames()),
        }
    }

    /// Evaluate one frame.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn frame_state(&self, frame: FrameIndex) -> FrameState {
        compute_frame_state(frame, &self.config, &self.players)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scheduler.rs"]
mod tests;
