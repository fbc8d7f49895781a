use super::*;
use crate::foundation::core::FrameIndex;
use crate::timeline::scheduler::TimelineScheduler;
use std::time::{Duration, Instant};

#[derive(Default)]
struct Recorder {
    frames: usize,
    intros: usize,
    cards: Vec<(u32, u32)>,
}

impl RenderSurface for Recorder {
    fn begin_frame(&mut self, _state: &FrameState) -> ScoreReelResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn draw_intro(&mut self, _intro: &IntroState, _text: &IntroText) -> ScoreReelResult<()> {
        self.intros += 1;
        Ok(())
    }

    fn draw_card(&mut self, card: CardDraw<'_>) -> ScoreReelResult<()> {
        self.cards.push((card.content.rank, card.stat_value));
        Ok(())
    }
}

fn players() -> Vec<Player> {
    (1..=3)
        .rev()
        .map(|rank| Player {
            rank,
            name: format!("Player {rank}"),
            jersey_name: None,
            country: "Italy".to_owned(),
            flag: "Italy".to_owned(),
            assists: rank * 2,
            joined_year: Some(2000),
            end_year: Some(2010),
            height_cm: None,
            birth_date: None,
            team: Some("Juventus".to_owned()),
            position: None,
        })
        .collect()
}

#[test]
fn intro_frame_draws_only_the_title_card() {
    let sched = TimelineScheduler::new(TimelineConfig::default(), players()).unwrap();
    let contents = card_contents(sched.players(), &Lookups::serie_a());
    let mut rec = Recorder::default();

    draw_frame(&mut rec, &sched.frame_state(FrameIndex(30)), sched.config(), &contents, None)
        .unwrap();
    assert_eq!(rec.frames, 1);
    assert_eq!(rec.intros, 1);
    assert!(rec.cards.is_empty());
}

#[test]
fn cards_before_their_start_are_skipped() {
    let sched = TimelineScheduler::new(TimelineConfig::default(), players()).unwrap();
    let contents = card_contents(sched.players(), &Lookups::serie_a());
    let mut rec = Recorder::default();

    // Only the first card has faded in by frame 175.
    draw_frame(&mut rec, &sched.frame_state(FrameIndex(175)), sched.config(), &contents, None)
        .unwrap();
    assert_eq!(rec.intros, 0);
    assert_eq!(rec.cards, [(3, 0)]);
}

#[test]
fn stat_values_come_from_the_board() {
    let sched = TimelineScheduler::new(TimelineConfig::default(), players()).unwrap();
    let contents = card_contents(sched.players(), &Lookups::serie_a());
    let mut board = CounterBoard::from_players(sched.players(), Duration::from_millis(60));

    let state = sched.frame_state(FrameIndex(400));
    let t0 = Instant::now();
    board.observe(&state, sched.config().canvas, sched.config().template, t0);
    board.advance_to(t0 + Duration::from_secs(1));

    let mut rec = Recorder::default();
    draw_frame(&mut rec, &state, sched.config(), &contents, Some(&board)).unwrap();
    assert_eq!(rec.cards, [(3, 6), (2, 4), (1, 2)]);
}

#[test]
fn missing_content_skips_the_card() {
    let sched = TimelineScheduler::new(TimelineConfig::default(), players()).unwrap();
    let contents = card_contents(&sched.players()[..1], &Lookups::default());
    let mut rec = Recorder::default();

    draw_frame(&mut rec, &sched.frame_state(FrameIndex(400)), sched.config(), &contents, None)
        .unwrap();
    assert_eq!(rec.cards, [(3, 0)]);
}
