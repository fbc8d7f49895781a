//! scorereel schedules the animation of a "top scorers" video card reel.
//!
//! A composition is a short intro title card followed by a horizontally scrolling row of player
//! cards. Each card fades, slides and springs into place on its own schedule while the whole row
//! pans left until the last card sits where the first one started. Every visual quantity is a
//! pure function of the frame index, so frames can be rendered in any order or in parallel.
//!
//! # Pipeline overview
//!
//! 1. **Load**: JSON dataset -> validated, render-ordered [`Player`] list
//! 2. **Schedule**: [`TimelineScheduler`] + [`FrameIndex`] -> [`FrameState`]
//! 3. **Resolve**: [`Player`] + [`Lookups`] -> [`CardContent`] (crests, flags, detail rows)
//! 4. **Draw**: [`draw_frame`] hands a [`FrameState`] to any [`RenderSurface`]
//!
//! Stat counters are the one exception to frame determinism: they count up in wall-clock time
//! once a card first becomes visible. See [`StatCounter`], [`CounterBoard`] and
//! [`CounterTicker`].
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO while evaluating**: datasets and configs are read once, up front.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod card;
mod counter;
mod dataset;
mod foundation;
mod lookup;
mod surface;
mod timeline;

pub use animation::interp::{Extrapolate, interpolate, ramp_frames};
pub use animation::spring::{SpringConfig, spring};
pub use card::content::{
    CardContent, DetailRow, GLOBE_PLACEHOLDER, avatar_fallback_url, avatar_url, card_content,
};
pub use card::template::{CardPalette, CardTemplate};
pub use counter::board::{CounterBoard, is_on_screen};
pub use counter::state::{CounterState, StatCounter};
pub use counter::ticker::{CounterTicker, SharedCounter};
pub use dataset::load::{
    DatasetOpts, load_players, load_players_from_path_or_empty, load_players_or_empty,
    parse_players,
};
pub use dataset::player::Player;
pub use dataset::validate::{SchemaError, SchemaErrors, SchemaPathElem, validate_players};
pub use foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Point};
pub use foundation::error::{ScoreReelError, ScoreReelResult};
pub use lookup::clubs::ClubLogos;
pub use lookup::countries::CountryCodes;
pub use lookup::{Lookups, PLACEHOLDER_LOGO_URL, or_placeholder};
pub use surface::preview::PreviewSurface;
pub use surface::{CardDraw, RenderSurface, card_contents, draw_frame};
pub use timeline::config::TimelineConfig;
pub use timeline::entry::{EntryTransform, anchor_x, entry_transform, local_delay, local_frame};
pub use timeline::intro::{IntroState, IntroText, LineState, intro_state};
pub use timeline::phase::{Phase, phase_range, segment};
pub use timeline::range::{EvalThreading, evaluate_range};
pub use timeline::scheduler::{CardState, FrameState, TimelineScheduler, compute_frame_state};
pub use timeline::scroll::{final_scroll_x, scroll_x};
