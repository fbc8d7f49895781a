//! Hand-off from computed frame state to a drawing backend.
//!
//! The timeline never draws. A [`RenderSurface`] receives positioned, faded cards and intro
//! lines and decides how they look; [`draw_frame`] is the only caller.

pub(crate) mod preview;

use crate::{
    card::content::{CardContent, card_content},
    card::template::CardTemplate,
    counter::board::CounterBoard,
    dataset::player::Player,
    foundation::error::ScoreReelResult,
    lookup::Lookups,
    timeline::config::TimelineConfig,
    timeline::intro::{IntroState, IntroText},
    timeline::scheduler::{CardState, FrameState},
};

/// One card ready to draw.
#[derive(Clone, Copy, Debug)]
pub struct CardDraw<'a> {
    /// Position, offset and opacity.
    pub state: &'a CardState,
    /// Printable content.
    pub content: &'a CardContent,
    /// Current value of the stat counter.
    pub stat_value: u32,
    /// Presentation template.
    pub template: CardTemplate,
}

/// Drawing backend for evaluated frames.
pub trait RenderSurface {
    /// Called once per frame before any draw call.
    fn begin_frame(&mut self, _state: &FrameState) -> ScoreReelResult<()> {
        Ok(())
    }

    /// Draw the intro title card.
    fn draw_intro(&mut self, intro: &IntroState, text: &IntroText) -> ScoreReelResult<()>;

    /// Draw one card. Cards arrive in list order.
    fn draw_card(&mut self, card: CardDraw<'_>) -> ScoreReelResult<()>;
}

/// Resolve card content for every player, in list order.
pub fn card_contents(players: &[Player], lookups: &Lookups) -> Vec<CardContent> {
    players.iter().map(|p| card_content(p, lookups)).collect()
}

/// Send `state` to `surface`.
///
/// Cards that have not started or are fully transparent are skipped. `contents` is indexed by
/// card position; a missing entry skips the card. Without a `board` every stat shows 0.
pub fn draw_frame(
    surface: &mut dyn RenderSurface,
    state: &FrameState,
    cfg: &TimelineConfig,
    contents: &[CardContent],
    board: Option<&CounterBoard>,
) -> ScoreReelResult<()> {
    surface.begin_frame(state)?;
    if let Some(intro) = &state.intro {
        surface.draw_intro(intro, &cfg.intro)?;
    }
    for card in &state.cards {
        if !card.ready || card.opacity <= 0.0 {
            continue;
        }
        let Some(content) = contents.get(card.index) else {
            continue;
        };
        surface.draw_card(CardDraw {
            state: card,
            content,
            stat_value: board.map(|b| b.displayed(card.rank)).unwrap_or(0),
            template: cfg.template,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/surface/draw.rs"]
mod tests;
