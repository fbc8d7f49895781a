//! Frame-deterministic animation timeline.
//!
//! `frame -> phase -> per-card entry transform + shared scroll -> FrameState`. Nothing here keeps
//! state between frames.

pub(crate) mod config;
pub(crate) mod entry;
pub(crate) mod intro;
pub(crate) mod phase;
pub(crate) mod range;
pub(crate) mod scheduler;
pub(crate) mod scroll;
