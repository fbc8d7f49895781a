use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::{
    card::template::CardTemplate,
    counter::state::StatCounter,
    dataset::player::Player,
    foundation::core::Canvas,
    timeline::scheduler::{CardState, FrameState},
};

/// One stat counter per card, keyed by player rank.
#[derive(Clone, Debug, Default)]
pub struct CounterBoard {
    counters: BTreeMap<u32, StatCounter>,
}

impl CounterBoard {
    /// Idle counters for every player.
    pub fn from_players(players: &[Player], total: Duration) -> Self {
        Self {
            counters: players
                .iter()
                .map(|p| (p.rank, StatCounter::new(p.assists, total)))
                .collect(),
        }
    }

    /// Counter for `rank`.
    pub fn get(&self, rank: u32) -> Option<&StatCounter> {
        self.counters.get(&rank)
    }

    /// Displayed value for `rank`; 0 for unknown ranks.
    pub fn displayed(&self, rank: u32) -> u32 {
        self.get(rank).map(StatCounter::displayed).unwrap_or(0)
    }

    /// Feed a visibility event for `rank`. Returns `true` when the counter started counting.
    pub fn on_visible(&mut self, rank: u32, now: Instant) -> bool {
        let Some(counter) = self.counters.get_mut(&rank) else {
            return false;
        };
        let started = counter.on_visible(now);
        if started {
            tracing::debug!(rank, target = counter.target(), "stat counter started");
        }
        started
    }

    /// Trigger counters for every card of `state` that intersects the canvas.
    pub fn observe(
        &mut self,
        state: &FrameState,
        canvas: Canvas,
        template: CardTemplate,
        now: Instant,
    ) {
        for card in &state.cards {
            if is_on_screen(card, canvas, template) {
                self.on_visible(card.rank, now);
            }
        }
    }

    /// Advance every counting counter to `now`.
    pub fn advance_to(&mut self, now: Instant) {
        for counter in self.counters.values_mut() {
            counter.advance_to(now);
        }
    }

    /// Iterate `(rank, counter)` in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &StatCounter)> {
        self.counters.iter().map(|(rank, c)| (*rank, c))
    }
}

/// Whether any part of `card` is visible: started, not fully transparent, and overlapping the
/// canvas horizontally.
pub fn is_on_screen(card: &CardState, canvas: Canvas, template: CardTemplate) -> bool {
    if !card.ready || card.opacity <= 0.0 {
        return false;
    }
    let (w, _) = template.size();
    card.x + w > 0.0 && card.x < f64::from(canvas.width)
}

#[cfg(test)]
#[path = "../../tests/unit/counter/board.rs"]
mod tests;
