//! Wall-clock stat counters, the only stateful part of a card.

pub(crate) mod board;
pub(crate) mod state;
pub(crate) mod ticker;
