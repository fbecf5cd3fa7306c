// Host-side tests for the loading screen timeline.

use folio_core::loading::*;
use folio_core::{FrameTime, TaskStatus};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn timings(heroes: usize) -> LoadingTimings {
    LoadingTimings {
        hero_blocks: heroes,
        ..LoadingTimings::default()
    }
}

/// Run to completion, recording each event with the time it fired.
fn run(seq: &mut LoadingSequence) -> Vec<(Duration, LoadingEvent)> {
    let mut log = Vec::new();
    let mut out = Vec::new();
    let mut now = Duration::ZERO;
    for _ in 0..10_000 {
        let status = seq.tick(FrameTime::new(now, FRAME), &mut out);
        log.extend(out.drain(..).map(|e| (now, e)));
        if status == TaskStatus::Idle {
            return log;
        }
        now += FRAME;
    }
    panic!("sequence never completed");
}

fn position(log: &[(Duration, LoadingEvent)], event: LoadingEvent) -> usize {
    log.iter()
        .position(|(_, e)| *e == event)
        .unwrap_or_else(|| panic!("missing {event:?}"))
}

#[test]
fn events_fire_in_strict_order() {
    let mut seq = LoadingSequence::new(timings(3));
    let log = run(&mut seq);

    let fade = position(&log, LoadingEvent::FadeStarted);
    let hero0 = position(&log, LoadingEvent::HeroRevealed(0));
    let hero2 = position(&log, LoadingEvent::HeroRevealed(2));
    let removed = position(&log, LoadingEvent::OverlayRemoved);
    let dock = position(&log, LoadingEvent::DockRevealed);
    let done = position(&log, LoadingEvent::Completed);

    assert!(position(&log, LoadingEvent::Counter(100)) < fade);
    assert!(fade < hero0 && hero0 < hero2);
    assert!(removed < dock && dock < done);
    assert_eq!(done, log.len() - 1);
    assert!(seq.is_completed());
}

#[test]
fn dock_is_revealed_only_after_overlay_is_gone() {
    let t = timings(2);
    let removal_at = t.removal_at();
    let mut seq = LoadingSequence::new(t);
    let log = run(&mut seq);
    let (at, _) = log[position(&log, LoadingEvent::DockRevealed)];
    assert!(at >= removal_at);
    assert_eq!(removal_at, Duration::from_millis(2_700));
}

#[test]
fn counter_climbs_monotonically_to_100() {
    let mut seq = LoadingSequence::new(timings(0));
    let counters: Vec<u8> = run(&mut seq)
        .into_iter()
        .filter_map(|(_, e)| match e {
            LoadingEvent::Counter(v) => Some(v),
            _ => None,
        })
        .collect();
    assert_eq!(counters.first(), Some(&0));
    assert_eq!(counters.last(), Some(&100));
    assert!(counters.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn hero_blocks_are_staggered() {
    let t = timings(3);
    assert_eq!(t.hero_at(0), Duration::from_millis(2_000));
    assert_eq!(t.hero_at(2), Duration::from_millis(2_200));
    let mut seq = LoadingSequence::new(t);
    let log = run(&mut seq);
    let (at0, _) = log[position(&log, LoadingEvent::HeroRevealed(0))];
    let (at2, _) = log[position(&log, LoadingEvent::HeroRevealed(2))];
    assert!(at2 >= at0 + Duration::from_millis(200));
}

#[test]
fn completed_sequence_stays_quiet() {
    let mut seq = LoadingSequence::new(timings(1));
    run(&mut seq);
    let mut out = Vec::new();
    let status = seq.tick(FrameTime::new(Duration::from_secs(60), FRAME), &mut out);
    assert_eq!(status, TaskStatus::Idle);
    assert!(out.is_empty());
}

#[test]
fn skip_emits_remaining_events_once() {
    let mut seq = LoadingSequence::new(timings(2));
    let mut out = Vec::new();
    seq.tick(FrameTime::new(Duration::ZERO, FRAME), &mut out);
    assert_eq!(out, [LoadingEvent::Counter(0)]);
    out.clear();

    seq.skip(&mut out);
    assert_eq!(
        out,
        [
            LoadingEvent::Counter(100),
            LoadingEvent::FadeStarted,
            LoadingEvent::HeroRevealed(0),
            LoadingEvent::HeroRevealed(1),
            LoadingEvent::OverlayRemoved,
            LoadingEvent::DockRevealed,
            LoadingEvent::Completed,
        ]
    );
    out.clear();
    seq.skip(&mut out);
    assert!(out.is_empty());
}

#[test]
fn ease_out_cubic_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    assert_eq!(ease_out_cubic(2.0), 1.0);
}

#[test]
fn zero_length_ticker_jumps_to_100() {
    let mut seq = LoadingSequence::new(LoadingTimings {
        ticker: Duration::ZERO,
        ..timings(0)
    });
    let mut out = Vec::new();
    seq.tick(FrameTime::new(Duration::ZERO, FRAME), &mut out);
    assert_eq!(out.first(), Some(&LoadingEvent::Counter(100)));
}
